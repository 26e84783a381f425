use egui::Pos2;

use crate::command::Command;
use crate::state::GestureState;

mod marker_tool;
mod preview;
mod sticker_tool;

pub use marker_tool::MarkerTool;
pub use preview::ToolPreview;
pub use sticker_tool::StickerTool;

/// Tool trait defines how pointer input becomes history commands
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas.
    /// Return a Command to **begin** an action if applicable, or None.
    fn on_pointer_down(&mut self, pos: Pos2, state: &GestureState) -> Option<Command>;

    /// Handle pointer movement, with or without a gesture in progress.
    fn on_pointer_move(&mut self, pos: Pos2, state: &GestureState) -> Option<Command>;

    /// Handle pointer release or the pointer leaving the canvas.
    /// Return a Command to **finalize** an action if applicable.
    fn on_pointer_up(&mut self, state: &GestureState) -> Option<Command>;

    /// What to show under an idle cursor
    fn preview(&self, pos: Pos2) -> Option<ToolPreview>;
}

/// Enum representing all available tool types
#[derive(Debug, Clone, PartialEq)]
pub enum ToolType {
    Marker(MarkerTool),
    Sticker(StickerTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Marker(tool) => tool.name(),
            Self::Sticker(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, state: &GestureState) -> Option<Command> {
        match self {
            Self::Marker(tool) => tool.on_pointer_down(pos, state),
            Self::Sticker(tool) => tool.on_pointer_down(pos, state),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, state: &GestureState) -> Option<Command> {
        match self {
            Self::Marker(tool) => tool.on_pointer_move(pos, state),
            Self::Sticker(tool) => tool.on_pointer_move(pos, state),
        }
    }

    fn on_pointer_up(&mut self, state: &GestureState) -> Option<Command> {
        match self {
            Self::Marker(tool) => tool.on_pointer_up(state),
            Self::Sticker(tool) => tool.on_pointer_up(state),
        }
    }

    fn preview(&self, pos: Pos2) -> Option<ToolPreview> {
        match self {
            Self::Marker(tool) => tool.preview(pos),
            Self::Sticker(tool) => tool.preview(pos),
        }
    }
}

impl ToolType {
    pub fn as_sticker_tool(&self) -> Option<&StickerTool> {
        match self {
            Self::Sticker(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_marker_tool(&self) -> Option<&MarkerTool> {
        match self {
            Self::Marker(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn is_sticker_tool(&self) -> bool {
        matches!(self, Self::Sticker(_))
    }
}
