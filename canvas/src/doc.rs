//! Widget store: the ordered collection of rectangles on the canvas.
//!
//! Widgets are kept back to front, so iteration order is draw order and the
//! last element is the frontmost widget. The store is the single owner of
//! every widget; everything else refers to widgets by [`WidgetId`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use uuid::Uuid;

use crate::geom::Point;
use crate::widget::RectangleWidget;

/// Unique identifier for a widget.
pub type WidgetId = Uuid;

/// In-memory z-ordered store of widgets.
#[derive(Debug, Clone, Default)]
pub struct WidgetStore {
    widgets: Vec<RectangleWidget>,
}

impl WidgetStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { widgets: Vec::new() }
    }

    /// Add a widget on top of every other widget.
    pub fn insert(&mut self, widget: RectangleWidget) {
        self.widgets.push(widget);
    }

    /// Remove a widget by id, returning it if it was present.
    pub fn remove(&mut self, id: &WidgetId) -> Option<RectangleWidget> {
        let idx = self.position(id)?;
        Some(self.widgets.remove(idx))
    }

    /// Remove every widget, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.widgets.len();
        self.widgets.clear();
        count
    }

    #[must_use]
    pub fn get(&self, id: &WidgetId) -> Option<&RectangleWidget> {
        self.widgets.iter().find(|w| w.id() == *id)
    }

    pub fn get_mut(&mut self, id: &WidgetId) -> Option<&mut RectangleWidget> {
        self.widgets.iter_mut().find(|w| w.id() == *id)
    }

    /// Move a widget to the top of the stack. Returns false if it doesn't exist.
    pub fn bring_to_front(&mut self, id: &WidgetId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let widget = self.widgets.remove(idx);
        self.widgets.push(widget);
        true
    }

    /// The frontmost widget whose touch area (frame grown by `margin`)
    /// contains `pt`.
    #[must_use]
    pub fn topmost_at(&self, pt: Point, margin: f64) -> Option<WidgetId> {
        self.widgets
            .iter()
            .rev()
            .find(|w| w.outer_frame(margin).contains(pt))
            .map(RectangleWidget::id)
    }

    /// Widgets back to front.
    pub fn iter(&self) -> impl Iterator<Item = &RectangleWidget> {
        self.widgets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RectangleWidget> {
        self.widgets.iter_mut()
    }

    /// Ids of the selected widgets, back to front.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<WidgetId> {
        self.widgets.iter().filter(|w| w.is_selected()).map(RectangleWidget::id).collect()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.widgets.iter().filter(|w| w.is_selected()).count()
    }

    /// Number of widgets currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` if the store contains no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn position(&self, id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| w.id() == *id)
    }
}
