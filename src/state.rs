use crate::tools::ToolPreview;

/// Where the sketchpad is in a pointer gesture
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    /// No gesture; the tool preview follows the cursor when it is over the canvas
    Idle { preview: Option<ToolPreview> },
    /// A stroke is being dragged out and is the active stroke of the history
    Drawing,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle { preview: None }
    }
}

impl GestureState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing)
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        match self {
            Self::Idle { preview } => preview.as_ref(),
            Self::Drawing => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle { .. } => "Idle",
            Self::Drawing => "Drawing",
        }
    }
}
