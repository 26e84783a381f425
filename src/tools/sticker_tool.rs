use egui::Pos2;

use super::{Tool, ToolPreview};
use crate::command::Command;
use crate::state::GestureState;
use crate::sticker::{Sticker, StickerText};

/// Places a finished sticker where the pointer is pressed
#[derive(Debug, Clone, PartialEq)]
pub struct StickerTool {
    text: StickerText,
}

impl StickerTool {
    pub fn new(text: StickerText) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &StickerText {
        &self.text
    }
}

impl Tool for StickerTool {
    fn name(&self) -> &'static str {
        "Sticker"
    }

    fn on_pointer_down(&mut self, pos: Pos2, _state: &GestureState) -> Option<Command> {
        Some(Command::PlaceSticker(Sticker::new(self.text.clone(), pos)))
    }

    fn on_pointer_move(&mut self, _pos: Pos2, _state: &GestureState) -> Option<Command> {
        None
    }

    fn on_pointer_up(&mut self, _state: &GestureState) -> Option<Command> {
        None
    }

    fn preview(&self, pos: Pos2) -> Option<ToolPreview> {
        Some(ToolPreview::Sticker {
            text: self.text.clone(),
            position: pos,
        })
    }
}
