use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape};

/// Anything the sketchpad can be painted onto.
///
/// Coordinates are surface-local: `(0, 0)` is the top-left corner of the
/// canvas. Drawing outside the surface is allowed; the surface clips it.
pub trait Surface {
    /// Wipe everything drawn so far
    fn clear(&mut self);

    /// Draw connected line segments through `points`
    fn draw_line(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Draw `text` centered on `position`
    fn draw_glyph(&mut self, text: &str, position: Pos2);
}

/// Surface backed by an egui [`Painter`], clipped to the canvas rect
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
    glyph_font: FontId,
    glyph_color: Color32,
}

impl<'a> PainterSurface<'a> {
    pub const CORNER_RADIUS: f32 = 8.0;

    pub fn new(painter: &'a Painter, rect: Rect, background: Color32, glyph_size: f32) -> Self {
        Self {
            painter,
            rect,
            background,
            glyph_font: FontId::proportional(glyph_size),
            glyph_color: Color32::BLACK,
        }
    }

    fn to_screen(&self, local: Pos2) -> Pos2 {
        self.rect.min + local.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, Self::CORNER_RADIUS, self.background);
    }

    fn draw_line(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(points, egui::Stroke::new(width, color)));
    }

    fn draw_glyph(&mut self, text: &str, position: Pos2) {
        self.painter.text(
            self.to_screen(position),
            Align2::CENTER_CENTER,
            text,
            self.glyph_font.clone(),
            self.glyph_color,
        );
    }
}

/// One visible drawing call captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Line {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Glyph {
        text: String,
        position: Pos2,
    },
}

/// Headless surface that records what is currently visible
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    clear_count: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations drawn since the last clear
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn lines(&self) -> impl Iterator<Item = &SurfaceOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Line { .. }))
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &SurfaceOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Glyph { .. }))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.clear_count += 1;
    }

    fn draw_line(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(SurfaceOp::Line {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn draw_glyph(&mut self, text: &str, position: Pos2) {
        self.ops.push(SurfaceOp::Glyph {
            text: text.to_owned(),
            position,
        });
    }
}
