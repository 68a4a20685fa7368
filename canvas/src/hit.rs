#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::{Point, Rect};

/// One of the four corners of a widget's frame, named by the two edges it joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

impl Corner {
    /// Hit-test priority: the first corner whose touch square contains the
    /// point wins when squares overlap on small frames.
    pub const PRIORITY: [Corner; 4] = [Corner::TopLeft, Corner::BottomLeft, Corner::TopRight, Corner::BottomRight];

    /// The diagonally opposite corner.
    #[must_use]
    pub fn opposite(self) -> Corner {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::BottomLeft => Self::TopRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// Position of this corner on `frame`.
    #[must_use]
    pub fn of(self, frame: &Rect) -> Point {
        match self {
            Self::TopLeft => Point::new(frame.min_x(), frame.min_y()),
            Self::BottomLeft => Point::new(frame.min_x(), frame.max_y()),
            Self::TopRight => Point::new(frame.max_x(), frame.min_y()),
            Self::BottomRight => Point::new(frame.max_x(), frame.max_y()),
        }
    }
}

/// What a touch on a widget will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Drag the whole widget.
    Move,
    /// Drag one corner while the opposite one stays put.
    Resize(Corner),
}

/// Classify `pt` against `frame`: a resize when it falls inside the
/// `touch_target`-sided square centered on a corner, otherwise a move.
#[must_use]
pub fn classify_touch(frame: &Rect, pt: Point, touch_target: f64) -> GestureKind {
    let half = touch_target / 2.0;
    Corner::PRIORITY
        .into_iter()
        .find(|corner| {
            let c = corner.of(frame);
            (pt.x - c.x).abs() <= half && (pt.y - c.y).abs() <= half
        })
        .map_or(GestureKind::Move, GestureKind::Resize)
}
