mod bus;
mod events;

pub use bus::EventBus;
pub use events::{ContentChange, SketchEvent};

/// Receives events emitted on an [`EventBus`]
pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&SketchEvent),
{
    fn handle_event(&mut self, event: &SketchEvent) {
        self(event)
    }
}
