use egui::{Context, PointerButton, Pos2, Rect};

mod router;
pub use router::route_event;

/// Pointer input in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown(Pos2),
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove(Pos2),
    /// Primary button was released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
}

/// The parts of egui's pointer state the canvas cares about for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Pointer position in screen coordinates, if the pointer is over the window
    pub hover_pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSnapshot {
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        })
    }
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last canvas-local position seen inside the canvas
    last_pos: Option<Pos2>,
    /// Whether a press that started on the canvas is still held
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's egui input against the canvas rect
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        self.process_snapshot(PointerSnapshot::from_context(ctx), canvas_rect)
    }

    /// Turn one frame of pointer state into events, in delivery order
    pub fn process_snapshot(
        &mut self,
        snapshot: PointerSnapshot,
        canvas_rect: Rect,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let local = snapshot
            .hover_pos
            .filter(|pos| canvas_rect.contains(*pos))
            .map(|pos| (pos - canvas_rect.min).to_pos2());

        match local {
            Some(pos) => {
                if self.last_pos != Some(pos) {
                    events.push(InputEvent::PointerMove(pos));
                }
                if snapshot.pressed {
                    events.push(InputEvent::PointerDown(pos));
                    self.pressed_on_canvas = true;
                }
                if snapshot.released && self.pressed_on_canvas {
                    events.push(InputEvent::PointerUp);
                    self.pressed_on_canvas = false;
                }
                self.last_pos = Some(pos);
            }
            None => {
                if self.last_pos.take().is_some() {
                    events.push(InputEvent::PointerLeave);
                    self.pressed_on_canvas = false;
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(100.0, 100.0), vec2(256.0, 256.0))
    }

    fn at(x: f32, y: f32) -> PointerSnapshot {
        PointerSnapshot {
            hover_pos: Some(pos2(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_positions_are_canvas_local() {
        let mut handler = InputHandler::new();
        let events = handler.process_snapshot(at(110.0, 120.0), canvas());
        assert_eq!(events, vec![InputEvent::PointerMove(pos2(10.0, 20.0))]);
    }

    #[test]
    fn test_press_drag_release() {
        let mut handler = InputHandler::new();
        let press = PointerSnapshot {
            pressed: true,
            ..at(110.0, 110.0)
        };
        assert_eq!(
            handler.process_snapshot(press, canvas()),
            vec![
                InputEvent::PointerMove(pos2(10.0, 10.0)),
                InputEvent::PointerDown(pos2(10.0, 10.0)),
            ]
        );

        // Same position, nothing new
        assert!(handler.process_snapshot(at(110.0, 110.0), canvas()).is_empty());

        let release = PointerSnapshot {
            released: true,
            ..at(120.0, 110.0)
        };
        assert_eq!(
            handler.process_snapshot(release, canvas()),
            vec![InputEvent::PointerMove(pos2(20.0, 10.0)), InputEvent::PointerUp]
        );
    }

    #[test]
    fn test_leaving_canvas_emits_leave_once() {
        let mut handler = InputHandler::new();
        handler.process_snapshot(at(150.0, 150.0), canvas());

        assert_eq!(
            handler.process_snapshot(at(10.0, 10.0), canvas()),
            vec![InputEvent::PointerLeave]
        );
        assert!(handler.process_snapshot(PointerSnapshot::default(), canvas()).is_empty());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        let press = PointerSnapshot {
            pressed: true,
            ..at(10.0, 10.0)
        };
        assert!(handler.process_snapshot(press, canvas()).is_empty());
    }
}
