#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::hit::Corner;

const MIN: f64 = 44.0;

fn frame() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 100.0)
}

// =============================================================
// GestureSession::begin
// =============================================================

#[test]
fn begin_move_records_origin() {
    let id = Uuid::new_v4();
    let s = GestureSession::begin(id, &frame(), GestureKind::Move, Point::new(150.0, 150.0));
    assert_eq!(s.widget, id);
    assert_eq!(s.initial_touch, Point::new(150.0, 150.0));
    assert_eq!(s.kind, SessionKind::Move { original_origin: Point::new(100.0, 100.0) });
    assert!(!s.is_resize());
}

#[test]
fn begin_resize_anchors_opposite_corner() {
    let s = GestureSession::begin(Uuid::nil(), &frame(), GestureKind::Resize(Corner::TopLeft), Point::new(95.0, 98.0));
    assert_eq!(
        s.kind,
        SessionKind::ResizeFromCorner { anchor: Point::new(300.0, 200.0), original_corner: Point::new(100.0, 100.0) }
    );
    assert!(s.is_resize());

    let s = GestureSession::begin(Uuid::nil(), &frame(), GestureKind::Resize(Corner::BottomLeft), Point::new(100.0, 200.0));
    assert_eq!(
        s.kind,
        SessionKind::ResizeFromCorner { anchor: Point::new(300.0, 100.0), original_corner: Point::new(100.0, 200.0) }
    );
}

// =============================================================
// GestureSession::apply
// =============================================================

#[test]
fn move_translates_by_touch_delta() {
    let s = GestureSession::begin(Uuid::nil(), &frame(), GestureKind::Move, Point::new(150.0, 150.0));
    let moved = s.apply(&frame(), Point::new(170.0, 130.0), MIN);
    assert_eq!(moved, Rect::new(120.0, 80.0, 200.0, 100.0));
}

#[test]
fn move_is_relative_to_gesture_start_not_last_frame() {
    let s = GestureSession::begin(Uuid::nil(), &frame(), GestureKind::Move, Point::new(150.0, 150.0));
    let first = s.apply(&frame(), Point::new(160.0, 160.0), MIN);
    let second = s.apply(&first, Point::new(170.0, 170.0), MIN);
    assert_eq!(second, Rect::new(120.0, 120.0, 200.0, 100.0));
}

#[test]
fn resize_bottom_right_grows_from_top_left_anchor() {
    let f = frame();
    let s = GestureSession::begin(Uuid::nil(), &f, GestureKind::Resize(Corner::BottomRight), Point::new(305.0, 205.0));
    let r = s.apply(&f, Point::new(355.0, 225.0), MIN);
    assert_eq!(r, Rect::new(100.0, 100.0, 250.0, 120.0));
}

#[test]
fn resize_past_anchor_flips_frame() {
    let f = frame();
    let s = GestureSession::begin(Uuid::nil(), &f, GestureKind::Resize(Corner::BottomRight), Point::new(300.0, 200.0));
    let r = s.apply(&f, Point::new(0.0, 0.0), MIN);
    assert_eq!(r, Rect::new(0.0, 0.0, 100.0, 100.0));
}

#[test]
fn resize_clamps_to_minimum_size() {
    let f = frame();
    let s = GestureSession::begin(Uuid::nil(), &f, GestureKind::Resize(Corner::BottomRight), Point::new(300.0, 200.0));
    let r = s.apply(&f, Point::new(110.0, 101.0), MIN);
    assert_eq!(r, Rect::new(100.0, 100.0, MIN, MIN));
}

#[test]
fn resize_never_goes_below_minimum_for_any_delta() {
    let f = frame();
    for corner in Corner::PRIORITY {
        let start = corner.of(&f);
        let s = GestureSession::begin(Uuid::nil(), &f, GestureKind::Resize(corner), start);
        let mut dx = -400.0;
        while dx <= 400.0 {
            let mut dy = -400.0;
            while dy <= 400.0 {
                let r = s.apply(&f, Point::new(start.x + dx, start.y + dy), MIN);
                assert!(r.width >= MIN && r.height >= MIN, "{corner:?} ({dx}, {dy}) -> {r:?}");
                dy += 13.0;
            }
            dx += 13.0;
        }
    }
}

// =============================================================
// GestureSession::create
// =============================================================

#[test]
fn create_grows_from_touch_point() {
    let start = Point::new(50.0, 50.0);
    let s = GestureSession::create(Uuid::nil(), start);
    assert!(s.is_resize());
    let r = s.apply(&Rect::new(50.0, 50.0, 1.0, 1.0), Point::new(150.0, 200.0), MIN);
    assert_eq!(r, Rect::new(50.0, 50.0, 100.0, 150.0));
}

#[test]
fn create_dragging_up_left_moves_origin() {
    let s = GestureSession::create(Uuid::nil(), Point::new(200.0, 200.0));
    let r = s.apply(&Rect::new(200.0, 200.0, 1.0, 1.0), Point::new(100.0, 120.0), MIN);
    assert_eq!(r, Rect::new(100.0, 120.0, 100.0, 80.0));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}
