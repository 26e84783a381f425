use crate::config::SketchpadConfig;
use crate::event::SketchEvent;
use crate::input::InputHandler;
use crate::panels;
use crate::sketchpad::Sketchpad;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
/// Only the configuration (including custom stickers) is persisted; the
/// drawing itself starts empty every session.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchpadApp {
    config: SketchpadConfig,
    #[serde(skip)]
    sketchpad: Sketchpad,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    custom_sticker: String,
    #[serde(skip)]
    custom_sticker_error: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    ///
    /// An explicit `config` takes precedence over the one restored from storage.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<SketchpadConfig>) -> Self {
        let restored: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let config = usable_config(config.unwrap_or(restored.config));

        let app = Self::with_config(config);
        let ctx = cc.egui_ctx.clone();
        app.sketchpad
            .event_bus()
            .subscribe(move |_: &SketchEvent| ctx.request_repaint());
        app
    }

    pub fn with_config(config: SketchpadConfig) -> Self {
        Self {
            sketchpad: Sketchpad::new(&config),
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SketchpadConfig {
        &mut self.config
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn custom_sticker_mut(&mut self) -> &mut String {
        &mut self.custom_sticker
    }

    pub fn custom_sticker_error(&self) -> Option<&str> {
        self.custom_sticker_error.as_deref()
    }

    pub fn set_custom_sticker_error(&mut self, error: Option<String>) {
        self.custom_sticker_error = error;
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, Modifiers};

        // Check redo first: consume_key(COMMAND, Z) would also match Cmd+Shift+Z
        let (undo, redo) = ctx.input_mut(|input| {
            let redo = input.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)
                || input.consume_key(Modifiers::COMMAND, Key::Y);
            let undo = input.consume_key(Modifiers::COMMAND, Key::Z);
            (undo, redo)
        });
        if undo {
            self.sketchpad.undo();
        }
        if redo {
            self.sketchpad.redo();
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

/// Fall back to the default configuration if `config` fails validation
fn usable_config(config: SketchpadConfig) -> SketchpadConfig {
    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            log::warn!("Ignoring stored config: {}", err);
            SketchpadConfig::default()
        }
    }
}
