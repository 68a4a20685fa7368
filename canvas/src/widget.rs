//! One draggable, resizable rectangle on the canvas.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use uuid::Uuid;

use crate::color::Rgba;
use crate::doc::WidgetId;
use crate::geom::{Point, Rect};
use crate::hit::{self, GestureKind};
use crate::input::GestureSession;

/// A selection transition reported by a widget.
///
/// Only produced when `selected` actually flips; reassigning the same value
/// reports nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub id: WidgetId,
    pub selected: bool,
}

/// A colored rectangle the user can move, resize, select and recolor.
///
/// `frame` is the rectangle itself in canvas pixels. Corner handles are drawn
/// centered on its corners, so the widget accepts touches over
/// [`RectangleWidget::outer_frame`], the frame grown by the handle margin.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleWidget {
    id: WidgetId,
    pub frame: Rect,
    pub color: Rgba,
    selected: bool,
}

impl RectangleWidget {
    /// A new, unselected widget with a fresh id.
    #[must_use]
    pub fn new(frame: Rect, color: Rgba) -> Self {
        Self { id: Uuid::new_v4(), frame, color, selected: false }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The frame grown by `margin` on every side; the widget's touch area.
    #[must_use]
    pub fn outer_frame(&self, margin: f64) -> Rect {
        self.frame.outset(margin)
    }

    /// Set the selection flag, reporting the change only when it flips.
    pub fn set_selected(&mut self, selected: bool) -> Option<SelectionChange> {
        if self.selected == selected {
            return None;
        }
        self.selected = selected;
        Some(SelectionChange { id: self.id, selected })
    }

    /// Whether a touch at `pt` grabs a corner or the whole body.
    #[must_use]
    pub fn classify_touch(&self, pt: Point, touch_target: f64) -> GestureKind {
        hit::classify_touch(&self.frame, pt, touch_target)
    }

    /// Start tracking a touch at `pt`, fixing the anchor for a corner grab.
    ///
    /// Selection is left to the caller: a corner grab selects this widget
    /// exclusively, a body grab only affects selection when it ends as a tap.
    #[must_use]
    pub fn begin_gesture(&self, pt: Point, touch_target: f64) -> GestureSession {
        GestureSession::begin(self.id, &self.frame, self.classify_touch(pt, touch_target), pt)
    }

    /// Apply `session` for a touch now at `pt`, returning the new frame.
    pub fn update_gesture(&mut self, session: &GestureSession, pt: Point, minimum_size: f64) -> Rect {
        self.frame = session.apply(&self.frame, pt, minimum_size);
        self.frame
    }

    /// Finish a gesture. A gesture without any movement is a tap and toggles
    /// the selection, whichever part of the widget it landed on.
    pub fn end_gesture(&mut self, moved: bool) -> Option<SelectionChange> {
        if moved {
            return None;
        }
        self.set_selected(!self.selected)
    }
}
