use egui::Pos2;

/// How the picture changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentChange {
    StrokeStarted,
    StrokeExtended,
    StrokeFinished,
    StickerPlaced,
    Undone,
    Redone,
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SketchEvent {
    /// The history changed; the canvas needs a redraw
    ContentChanged(ContentChange),
    /// The tool preview moved, or went away when `position` is `None`
    ToolMoved { position: Option<Pos2> },
    ToolChanged { tool: &'static str },
}

