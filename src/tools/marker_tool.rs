use egui::{Color32, Pos2};

use super::{Tool, ToolPreview};
use crate::command::Command;
use crate::state::GestureState;
use crate::stroke::{Stroke, Thickness};

/// Freehand drawing: press starts a stroke, drag extends it, release ends it
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerTool {
    thickness: Thickness,
    width: f32,
    color: Color32,
}

impl MarkerTool {
    pub fn new(thickness: Thickness, width: f32, color: Color32) -> Self {
        Self {
            thickness,
            width,
            color,
        }
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Tool for MarkerTool {
    fn name(&self) -> &'static str {
        match self.thickness {
            Thickness::Thin => "Thin Marker",
            Thickness::Thick => "Thick Marker",
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, _state: &GestureState) -> Option<Command> {
        Some(Command::BeginStroke(Stroke::new(pos, self.width, self.color)))
    }

    fn on_pointer_move(&mut self, pos: Pos2, state: &GestureState) -> Option<Command> {
        state.is_drawing().then_some(Command::ExtendStroke(pos))
    }

    fn on_pointer_up(&mut self, state: &GestureState) -> Option<Command> {
        state.is_drawing().then_some(Command::FinishStroke)
    }

    fn preview(&self, pos: Pos2) -> Option<ToolPreview> {
        Some(ToolPreview::Marker {
            position: pos,
            width: self.width,
            color: self.color,
        })
    }
}
