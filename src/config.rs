use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::sticker::StickerText;
use crate::stroke::Thickness;

/// Errors that can occur while loading or saving a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Sketchpad settings. Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    pub canvas_size: Vec2,
    pub thin_width: f32,
    pub thick_width: f32,
    pub stroke_color: Color32,
    pub background: Color32,
    /// Font size used for stickers and the sticker preview
    pub glyph_size: f32,
    /// Palette of sticker buttons, including user-created ones
    pub stickers: Vec<StickerText>,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::splat(256.0),
            thin_width: 1.0,
            thick_width: 2.0,
            stroke_color: Color32::BLACK,
            background: Color32::WHITE,
            glyph_size: 24.0,
            stickers: ["😸", "😹", "😻"]
                .into_iter()
                .filter_map(|glyph| StickerText::parse(glyph).ok())
                .collect(),
        }
    }
}

impl SketchpadConfig {
    /// Width of the marker for the given thickness
    pub fn width_for(&self, thickness: Thickness) -> f32 {
        match thickness {
            Thickness::Thin => self.thin_width,
            Thickness::Thick => self.thick_width,
        }
    }

    /// Add a sticker to the palette unless it is already there
    pub fn add_sticker(&mut self, text: StickerText) -> bool {
        if self.stickers.contains(&text) {
            return false;
        }
        self.stickers.push(text);
        true
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        };
        positive("canvas width", self.canvas_size.x)?;
        positive("canvas height", self.canvas_size.y)?;
        positive("thin_width", self.thin_width)?;
        positive("thick_width", self.thick_width)?;
        positive("glyph_size", self.glyph_size)?;
        Ok(())
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded sketchpad config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
