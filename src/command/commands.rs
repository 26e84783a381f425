use egui::Pos2;

use super::DrawingHistory;
use crate::event::ContentChange;
use crate::sticker::Sticker;
use crate::stroke::Stroke;

/// Mutations the sketchpad can apply to its history
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a stroke; it stays active until `FinishStroke`
    BeginStroke(Stroke),
    /// Append a point to the active stroke
    ExtendStroke(Pos2),
    /// End the active stroke
    FinishStroke,
    /// Place a finished sticker
    PlaceSticker(Sticker),
    Undo,
    Redo,
    Clear,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::BeginStroke(_) => "Begin Stroke",
            Command::ExtendStroke(_) => "Extend Stroke",
            Command::FinishStroke => "Finish Stroke",
            Command::PlaceSticker(_) => "Place Sticker",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
        }
    }

    /// Apply to `history`, returning what changed, or `None` for a no-op
    pub fn apply(self, history: &mut DrawingHistory) -> Option<ContentChange> {
        match self {
            Command::BeginStroke(stroke) => {
                history.begin_stroke(stroke);
                Some(ContentChange::StrokeStarted)
            }
            Command::ExtendStroke(point) => history
                .extend_active_stroke(point)
                .then_some(ContentChange::StrokeExtended),
            Command::FinishStroke => history
                .finish_active_stroke()
                .then_some(ContentChange::StrokeFinished),
            Command::PlaceSticker(sticker) => {
                history.append(sticker);
                Some(ContentChange::StickerPlaced)
            }
            Command::Undo => history.undo().then_some(ContentChange::Undone),
            Command::Redo => history.redo().then_some(ContentChange::Redone),
            Command::Clear => history.clear().then_some(ContentChange::Cleared),
        }
    }
}
