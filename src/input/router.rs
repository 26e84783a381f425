use crate::sketchpad::Sketchpad;

use super::InputEvent;

/// Deliver an input event to the sketchpad
pub fn route_event(event: &InputEvent, sketchpad: &mut Sketchpad) {
    match *event {
        InputEvent::PointerDown(pos) => sketchpad.pointer_down(pos),
        InputEvent::PointerMove(pos) => sketchpad.pointer_move(pos),
        InputEvent::PointerUp => sketchpad.pointer_up(),
        InputEvent::PointerLeave => sketchpad.pointer_leave(),
    }
}
