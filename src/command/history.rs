use crate::drawable::{Drawable, DrawableId};
use crate::stroke::Stroke;
use crate::surface::Surface;
use egui::Pos2;

/// Ordered drawables that make up the picture, plus undo/redo bookkeeping.
///
/// `undo_stack` holds drawables taken off the picture by [`undo`](Self::undo),
/// most recent on top; [`redo`](Self::redo) puts them back. `redo_stack`
/// records which drawables were restored by redo since the last new action.
/// Any new action empties both.
#[derive(Debug, Default, Clone)]
pub struct DrawingHistory {
    drawables: Vec<Drawable>,
    undo_stack: Vec<Drawable>,
    redo_stack: Vec<DrawableId>,
    /// Set while the last drawable is a stroke still receiving points
    drawing: bool,
}

impl DrawingHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished drawable on top of the picture
    pub fn append(&mut self, drawable: impl Into<Drawable>) {
        self.finish_active_stroke();
        self.discard_redo();
        self.drawables.push(drawable.into());
    }

    /// Add a stroke that keeps accepting points until
    /// [`finish_active_stroke`](Self::finish_active_stroke)
    pub fn begin_stroke(&mut self, stroke: Stroke) -> DrawableId {
        let drawable = Drawable::stroke(stroke);
        let id = drawable.id();
        self.append(drawable);
        self.drawing = true;
        id
    }

    /// Append a point to the active stroke. Returns false if there is none.
    pub fn extend_active_stroke(&mut self, point: Pos2) -> bool {
        if !self.drawing {
            return false;
        }
        match self.drawables.last_mut().and_then(Drawable::as_stroke_mut) {
            Some(stroke) => {
                stroke.push_point(point);
                true
            }
            None => {
                self.drawing = false;
                false
            }
        }
    }

    /// Stop accepting points. Returns false if no stroke was active.
    pub fn finish_active_stroke(&mut self) -> bool {
        std::mem::replace(&mut self.drawing, false)
    }

    /// Move the newest drawable onto the undo stack.
    ///
    /// Does nothing while a stroke is being drawn or when the picture is empty.
    pub fn undo(&mut self) -> bool {
        if self.drawing {
            return false;
        }
        let Some(drawable) = self.drawables.pop() else {
            return false;
        };
        if self.redo_stack.last() == Some(&drawable.id()) {
            self.redo_stack.pop();
        }
        log::debug!("Undo {} {}", drawable.kind_name(), drawable.id());
        self.undo_stack.push(drawable);
        true
    }

    /// Put the most recently undone drawable back on top of the picture.
    ///
    /// Does nothing while a stroke is being drawn or when nothing was undone.
    pub fn redo(&mut self) -> bool {
        if self.drawing {
            return false;
        }
        let Some(drawable) = self.undo_stack.pop() else {
            return false;
        };
        log::debug!("Redo {} {}", drawable.kind_name(), drawable.id());
        self.redo_stack.push(drawable.id());
        self.drawables.push(drawable);
        true
    }

    /// Drop the picture and both stacks.
    ///
    /// Ignored while a stroke is being drawn or when there is nothing to drop.
    pub fn clear(&mut self) -> bool {
        if !self.can_clear() {
            return false;
        }
        self.drawables.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        true
    }

    /// Clear the surface and redraw every drawable, oldest first
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        for drawable in &self.drawables {
            drawable.draw(surface);
        }
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn undo_stack(&self) -> &[Drawable] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[DrawableId] {
        &self.redo_stack
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        if !self.drawing {
            return None;
        }
        self.drawables.last().and_then(Drawable::as_stroke)
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Returns true if there is a drawable that can be undone
    pub fn can_undo(&self) -> bool {
        !self.drawing && !self.drawables.is_empty()
    }

    /// Returns true if there is a drawable that can be redone
    pub fn can_redo(&self) -> bool {
        !self.drawing && !self.undo_stack.is_empty()
    }

    /// Returns true if [`clear`](Self::clear) would change anything
    pub fn can_clear(&self) -> bool {
        !self.drawing
            && !(self.drawables.is_empty()
                && self.undo_stack.is_empty()
                && self.redo_stack.is_empty())
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    fn discard_redo(&mut self) {
        if !self.undo_stack.is_empty() {
            log::debug!("Discarding {} undone drawables", self.undo_stack.len());
        }
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sticker::{Sticker, StickerText};
    use egui::{Color32, pos2};

    fn sticker(text: &str) -> Sticker {
        Sticker::new(StickerText::parse(text).unwrap(), pos2(5.0, 5.0))
    }

    #[test]
    fn test_redo_restores_in_reverse_undo_order() {
        let mut history = DrawingHistory::new();
        history.append(sticker("a"));
        history.append(sticker("b"));
        history.append(sticker("c"));

        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(history.len(), 1);

        assert!(history.redo());
        let texts: Vec<_> = history
            .drawables()
            .iter()
            .filter_map(|d| d.as_sticker())
            .map(|s| s.text().as_str().to_owned())
            .collect();
        assert_eq!(texts, ["a", "b"]);
        assert_eq!(history.undo_stack().len(), 1);
        assert_eq!(history.redo_stack().len(), 1);
    }

    #[test]
    fn test_undo_of_redone_drawable_pops_redo_record() {
        let mut history = DrawingHistory::new();
        history.append(sticker("a"));
        history.undo();
        history.redo();
        assert_eq!(history.redo_stack(), &[history.drawables()[0].id()]);

        history.undo();
        assert!(history.redo_stack().is_empty());
        assert_eq!(history.undo_stack().len(), 1);
    }

    #[test]
    fn test_new_action_discards_redo() {
        let mut history = DrawingHistory::new();
        history.append(sticker("a"));
        history.append(sticker("b"));
        history.undo();
        history.redo();
        history.undo();
        assert!(history.can_redo());

        history.append(sticker("c"));
        assert!(!history.can_redo());
        assert!(history.undo_stack().is_empty());
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn test_stack_operations_ignored_while_drawing() {
        let mut history = DrawingHistory::new();
        history.append(sticker("a"));
        history.append(sticker("b"));
        history.undo();

        history.begin_stroke(Stroke::new(pos2(0.0, 0.0), 1.0, Color32::BLACK));
        assert!(history.is_drawing());
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(!history.clear());
        assert_eq!(history.len(), 2);

        assert!(history.finish_active_stroke());
        assert!(history.undo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_clear_needs_something_to_drop() {
        let mut history = DrawingHistory::new();
        assert!(!history.can_clear());
        assert!(!history.clear());

        history.append(sticker("a"));
        history.undo();
        assert!(history.is_empty());
        assert!(history.can_clear());
        assert!(history.clear());
        assert!(!history.can_redo());
        assert!(!history.clear());
    }

    #[test]
    fn test_extend_only_touches_active_stroke() {
        let mut history = DrawingHistory::new();
        assert!(!history.extend_active_stroke(pos2(1.0, 1.0)));

        history.begin_stroke(Stroke::new(pos2(0.0, 0.0), 1.0, Color32::BLACK));
        assert!(history.extend_active_stroke(pos2(1.0, 1.0)));
        assert!(history.finish_active_stroke());
        assert!(!history.extend_active_stroke(pos2(2.0, 2.0)));

        let stroke = history.drawables()[0].as_stroke().unwrap();
        assert_eq!(stroke.points(), &[pos2(0.0, 0.0), pos2(1.0, 1.0)]);
        assert!(history.active_stroke().is_none());
    }

    #[test]
    fn test_append_finishes_active_stroke() {
        let mut history = DrawingHistory::new();
        history.begin_stroke(Stroke::new(pos2(0.0, 0.0), 1.0, Color32::BLACK));
        history.append(sticker("a"));

        assert!(!history.is_drawing());
        assert!(!history.extend_active_stroke(pos2(3.0, 3.0)));
        assert_eq!(history.len(), 2);
    }
}
