#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod drawable;
pub mod event;
pub mod input;
pub mod panels;
pub mod sketchpad;
pub mod state;
pub mod sticker;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use command::{Command, DrawingHistory};
pub use config::{ConfigError, SketchpadConfig};
pub use drawable::{Drawable, DrawableId, DrawableKind};
pub use event::{ContentChange, EventBus, EventHandler, SketchEvent};
pub use input::{InputEvent, InputHandler};
pub use sketchpad::Sketchpad;
pub use state::GestureState;
pub use sticker::{Sticker, StickerText, StickerTextError};
pub use stroke::{Stroke, Thickness};
pub use surface::{PainterSurface, RecordingSurface, Surface, SurfaceOp};
pub use tools::{Tool, ToolPreview, ToolType};
