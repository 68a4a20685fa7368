//! Input model: the per-touch gesture session and the controller's state machine.
//!
//! A [`GestureSession`] captures everything needed to turn a later touch
//! position into a new widget frame: which widget owns the gesture, where the
//! touch started, and whether it moves the whole frame or drags one corner
//! around a fixed anchor. Applying it is a pure function of the session and the
//! current point, so the geometry can be tested without an engine.
//!
//! [`InputState`] is the touch being tracked between touch-begin and touch-end.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::WidgetId;
use crate::geom::{Point, Rect};
use crate::hit::GestureKind;
use crate::widget::RectangleWidget;

/// Start parameters of a gesture, tagged by what the gesture does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionKind {
    /// Translate the frame; size is untouched.
    Move {
        /// Frame origin when the touch began.
        original_origin: Point,
    },
    /// Drag one corner while the diagonally opposite corner stays fixed.
    ResizeFromCorner {
        /// The fixed corner.
        anchor: Point,
        /// Position of the dragged corner when the touch began.
        original_corner: Point,
    },
}

/// Transient state of one touch on one widget, from touch-begin to touch-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Widget that owns the gesture.
    pub widget: WidgetId,
    /// Touch position at touch-begin.
    pub initial_touch: Point,
    pub kind: SessionKind,
}

impl GestureSession {
    /// Start a gesture of `kind` on `frame` for a touch beginning at `touch`.
    #[must_use]
    pub fn begin(widget: WidgetId, frame: &Rect, kind: GestureKind, touch: Point) -> Self {
        let kind = match kind {
            GestureKind::Move => SessionKind::Move { original_origin: frame.origin() },
            GestureKind::Resize(corner) => SessionKind::ResizeFromCorner {
                anchor: corner.opposite().of(frame),
                original_corner: corner.of(frame),
            },
        };
        Self { widget, initial_touch: touch, kind }
    }

    /// A resize whose anchor and dragged corner both start at `touch`, used to
    /// grow a freshly created widget out of a single point.
    #[must_use]
    pub fn create(widget: WidgetId, touch: Point) -> Self {
        Self {
            widget,
            initial_touch: touch,
            kind: SessionKind::ResizeFromCorner { anchor: touch, original_corner: touch },
        }
    }

    /// Whether this session drags a corner rather than the whole frame.
    #[must_use]
    pub fn is_resize(&self) -> bool {
        matches!(self.kind, SessionKind::ResizeFromCorner { .. })
    }

    /// The frame that results from the touch being at `pt`.
    ///
    /// For a resize, the frame spans the anchor and the dragged corner, with
    /// each side clamped up to `minimum_size`.
    #[must_use]
    pub fn apply(&self, frame: &Rect, pt: Point, minimum_size: f64) -> Rect {
        let delta = pt.delta_from(self.initial_touch);
        match self.kind {
            SessionKind::Move { original_origin } => frame.with_origin(original_origin.offset(delta)),
            SessionKind::ResizeFromCorner { anchor, original_corner } => {
                let target = original_corner.offset(delta);
                Rect::new(
                    target.x.min(anchor.x),
                    target.y.min(anchor.y),
                    (anchor.x - target.x).abs().max(minimum_size),
                    (anchor.y - target.y).abs().max(minimum_size),
                )
            }
        }
    }
}

/// The controller's touch state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No touch in progress.
    #[default]
    Idle,
    /// A touch began on empty canvas. The widget is not part of the canvas
    /// until the first move; a touch that ends here creates nothing.
    Staged {
        widget: RectangleWidget,
        touch: Point,
    },
    /// A widget owns the touch.
    Tracking {
        session: GestureSession,
        /// Whether any move arrived since touch-begin.
        moved: bool,
    },
    /// The touch began on the visible palette strip.
    Picking,
    /// The touch was rejected at touch-begin and is ignored until it ends.
    Ignored,
}

