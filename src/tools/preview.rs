use egui::{Color32, Pos2, vec2};

use crate::sticker::StickerText;
use crate::surface::Surface;

/// Transient drawing of the active tool under the cursor.
///
/// Never stored in the history; recomputed on every idle pointer move.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Crosshair sized to the marker width
    Marker {
        position: Pos2,
        width: f32,
        color: Color32,
    },
    /// The sticker glyph that a click would place
    Sticker { text: StickerText, position: Pos2 },
}

impl ToolPreview {
    const CROSSHAIR_GAP: f32 = 4.0;

    pub fn position(&self) -> Pos2 {
        match self {
            Self::Marker { position, .. } | Self::Sticker { position, .. } => *position,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Self::Marker {
                position,
                width,
                color,
            } => {
                let arm = width / 2.0 + Self::CROSSHAIR_GAP;
                let color = color.gamma_multiply(0.5);
                surface.draw_line(
                    &[*position - vec2(arm, 0.0), *position + vec2(arm, 0.0)],
                    *width,
                    color,
                );
                surface.draw_line(
                    &[*position - vec2(0.0, arm), *position + vec2(0.0, arm)],
                    *width,
                    color,
                );
            }
            Self::Sticker { text, position } => surface.draw_glyph(text.as_str(), *position),
        }
    }
}
