use uuid::Uuid;

use crate::sticker::Sticker;
use crate::stroke::Stroke;
use crate::surface::Surface;

/// Stable identity of a drawable across undo and redo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(Uuid);

impl DrawableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DrawableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a drawable is
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableKind {
    Stroke(Stroke),
    Sticker(Sticker),
}

/// The unit of undo/redo: a stroke or a sticker with an identity
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    id: DrawableId,
    kind: DrawableKind,
}

impl Drawable {
    pub fn stroke(stroke: Stroke) -> Self {
        Self {
            id: DrawableId::new(),
            kind: DrawableKind::Stroke(stroke),
        }
    }

    pub fn sticker(sticker: Sticker) -> Self {
        Self {
            id: DrawableId::new(),
            kind: DrawableKind::Sticker(sticker),
        }
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    pub fn kind(&self) -> &DrawableKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            DrawableKind::Stroke(_) => "stroke",
            DrawableKind::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match &self.kind {
            DrawableKind::Stroke(stroke) => Some(stroke),
            DrawableKind::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match &self.kind {
            DrawableKind::Sticker(sticker) => Some(sticker),
            DrawableKind::Stroke(_) => None,
        }
    }

    pub(crate) fn as_stroke_mut(&mut self) -> Option<&mut Stroke> {
        match &mut self.kind {
            DrawableKind::Stroke(stroke) => Some(stroke),
            DrawableKind::Sticker(_) => None,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match &self.kind {
            DrawableKind::Stroke(stroke) => stroke.draw(surface),
            DrawableKind::Sticker(sticker) => sticker.draw(surface),
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Self::stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Self::sticker(sticker)
    }
}
