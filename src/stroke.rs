use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Marker thickness offered by the tool panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Thickness {
    #[default]
    Thin,
    Thick,
}

impl Thickness {
    pub fn label(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Thick => "Thick",
        }
    }
}

/// A freehand line: points in draw order plus width and color.
///
/// Points can only be appended while the stroke is the active stroke of a
/// [`DrawingHistory`](crate::command::DrawingHistory); once the gesture ends
/// the stroke is never touched again.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl Stroke {
    /// Start a stroke at a single point
    pub fn new(start: Pos2, width: f32, color: Color32) -> Self {
        Self::from_points(vec![start], width, color)
    }

    pub fn from_points(points: Vec<Pos2>, width: f32, color: Color32) -> Self {
        Self {
            points,
            width,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub(crate) fn push_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Draw the stroke as connected segments. Fewer than two points draws nothing.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.points.len() < 2 {
            return;
        }
        surface.draw_line(&self.points, self.width, self.color);
    }
}
