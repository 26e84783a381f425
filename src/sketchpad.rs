//! The sketchpad ties the drawing history to pointer input and tool selection.
//!
//! Input flows in through the `pointer_*` methods, the active tool turns it
//! into [`Command`]s, and every command that changes the history emits a
//! [`SketchEvent::ContentChanged`] on the event bus so the front end knows to
//! redraw. Rendering replays the history onto any [`Surface`] and overlays the
//! tool preview.

use egui::Pos2;

use crate::command::{Command, DrawingHistory};
use crate::config::SketchpadConfig;
use crate::event::{EventBus, SketchEvent};
use crate::state::GestureState;
use crate::sticker::StickerText;
use crate::stroke::Thickness;
use crate::surface::Surface;
use crate::tools::{MarkerTool, StickerTool, Tool, ToolType};

#[derive(Debug)]
pub struct Sketchpad {
    history: DrawingHistory,
    state: GestureState,
    tool: ToolType,
    thickness: Thickness,
    /// Marker widths and stroke color
    config: SketchpadConfig,
    /// Last pointer position over the canvas, used to refresh the preview on tool changes
    hover_pos: Option<Pos2>,
    event_bus: EventBus,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(&SketchpadConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: &SketchpadConfig) -> Self {
        let thickness = Thickness::default();
        Self {
            history: DrawingHistory::new(),
            state: GestureState::default(),
            tool: ToolType::Marker(MarkerTool::new(
                thickness,
                config.width_for(thickness),
                config.stroke_color,
            )),
            thickness,
            config: config.clone(),
            hover_pos: None,
            event_bus: EventBus::new(),
        }
    }

    pub fn history(&self) -> &DrawingHistory {
        &self.history
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    /// The sticker that a press would place, if the sticker tool is active
    pub fn selected_sticker(&self) -> Option<&StickerText> {
        self.tool.as_sticker_tool().map(StickerTool::text)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Pointer pressed at a canvas-local position
    pub fn pointer_down(&mut self, pos: Pos2) {
        self.hover_pos = Some(pos);
        if self.state.is_drawing() {
            log::debug!("Pointer down while drawing, finishing previous stroke");
            self.end_gesture();
        }

        if let Some(command) = self.tool.on_pointer_down(pos, &self.state) {
            self.execute(command);
        }
    }

    /// Pointer moved to a canvas-local position
    pub fn pointer_move(&mut self, pos: Pos2) {
        self.hover_pos = Some(pos);
        if let Some(command) = self.tool.on_pointer_move(pos, &self.state) {
            self.execute(command);
        }
        if !self.state.is_drawing() {
            self.update_preview();
        }
    }

    /// Pointer released
    pub fn pointer_up(&mut self) {
        self.end_gesture();
    }

    /// Pointer left the canvas; ends any gesture and hides the preview
    pub fn pointer_leave(&mut self) {
        self.hover_pos = None;
        self.end_gesture();
        if self.state.preview().is_some() {
            self.state = GestureState::default();
            self.event_bus.emit(SketchEvent::ToolMoved { position: None });
        }
    }

    /// Switch to the marker with the given thickness
    pub fn select_thickness(&mut self, thickness: Thickness) {
        self.thickness = thickness;
        self.set_tool(ToolType::Marker(MarkerTool::new(
            thickness,
            self.config.width_for(thickness),
            self.config.stroke_color,
        )));
    }

    /// Switch to the sticker tool, or back to the marker when `None`
    pub fn select_sticker(&mut self, sticker: Option<StickerText>) {
        match sticker {
            Some(text) => self.set_tool(ToolType::Sticker(StickerTool::new(text))),
            None => self.select_thickness(self.thickness),
        }
    }

    pub fn undo(&mut self) {
        self.execute(Command::Undo);
    }

    pub fn redo(&mut self) {
        self.execute(Command::Redo);
    }

    pub fn clear(&mut self) {
        self.execute(Command::Clear);
    }

    /// Apply a command to the history, notifying observers if anything changed.
    ///
    /// The gesture state follows the history: starting a stroke enters
    /// `Drawing`, anything that ends the active stroke returns to `Idle`.
    pub fn execute(&mut self, command: Command) {
        let name = command.name();
        let change = command.apply(&mut self.history);
        self.sync_gesture_state();
        match change {
            Some(change) => self.event_bus.emit(SketchEvent::ContentChanged(change)),
            None => log::debug!("{} had no effect", name),
        }
    }

    /// Clear `surface` and draw the picture, then the tool preview if visible
    pub fn render(&self, surface: &mut dyn Surface) {
        self.history.render(surface);
        if let Some(preview) = self.state.preview() {
            preview.draw(surface);
        }
    }

    fn end_gesture(&mut self) {
        if let Some(command) = self.tool.on_pointer_up(&self.state) {
            self.execute(command);
        }
        if self.history.is_drawing() {
            self.execute(Command::FinishStroke);
        }
    }

    fn sync_gesture_state(&mut self) {
        match (self.history.is_drawing(), self.state.is_drawing()) {
            (true, false) => {
                log::debug!("Gesture started");
                self.state = GestureState::Drawing;
            }
            (false, true) => {
                log::debug!("Gesture finished");
                self.state = GestureState::default();
            }
            _ => {}
        }
    }

    fn set_tool(&mut self, tool: ToolType) {
        self.end_gesture();
        log::info!("Tool selected: {}", tool.name());
        self.tool = tool;
        self.event_bus.emit(SketchEvent::ToolChanged {
            tool: self.tool.name(),
        });
        if self.hover_pos.is_some() {
            self.update_preview();
        }
    }

    fn update_preview(&mut self) {
        let preview = self.hover_pos.and_then(|pos| self.tool.preview(pos));
        let position = preview.as_ref().map(|p| p.position());
        self.state = GestureState::Idle { preview };
        self.event_bus.emit(SketchEvent::ToolMoved { position });
    }
}
