use egui::Pos2;
use thiserror::Error;

use crate::surface::Surface;

/// Errors raised when user-entered sticker text is turned into a [`StickerText`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StickerTextError {
    #[error("Sticker text must contain at least one visible character")]
    Blank,
}

/// Non-blank text usable as a sticker glyph
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StickerText(String);

impl StickerText {
    /// Validate user input. Empty or whitespace-only text is rejected.
    pub fn parse(text: impl Into<String>) -> Result<Self, StickerTextError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(StickerTextError::Blank);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StickerText {
    type Error = StickerTextError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl From<StickerText> for String {
    fn from(text: StickerText) -> Self {
        text.0
    }
}

impl std::fmt::Display for StickerText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A glyph placed at a fixed position on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    text: StickerText,
    position: Pos2,
}

impl Sticker {
    pub fn new(text: StickerText, position: Pos2) -> Self {
        Self { text, position }
    }

    pub fn text(&self) -> &StickerText {
        &self.text
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    /// Draw the glyph centered on its position
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_glyph(self.text.as_str(), self.position);
    }
}
