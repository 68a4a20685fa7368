#![allow(clippy::float_cmp)]

use canvas::color::{PALETTE, Rgba};

use super::*;

fn demo() -> DemoHost {
    let mut host = DemoHost::new(CanvasConfig::default(), Size::new(320.0, 480.0), None);
    host.load_demo_layout();
    host
}

// =============================================================
// parse_content_size
// =============================================================

#[test]
fn content_size_parses_width_by_height() {
    assert_eq!(parse_content_size("1024x768").unwrap(), Some(Size::new(1024.0, 768.0)));
    assert_eq!(parse_content_size(" 640 X 480 ").unwrap(), Some(Size::new(640.0, 480.0)));
}

#[test]
fn content_size_empty_is_none() {
    assert_eq!(parse_content_size("").unwrap(), None);
    assert_eq!(parse_content_size("   ").unwrap(), None);
}

#[test]
fn content_size_rejects_garbage() {
    for raw in ["1024", "axb", "0x100", "-5x10", "10x"] {
        assert!(matches!(parse_content_size(raw), Err(HostError::ContentSize(_))), "{raw}");
    }
}

// =============================================================
// TouchEvent
// =============================================================

#[test]
fn touch_event_json_is_tagged() {
    let json = serde_json::to_value(TouchEvent::Begin { x: 1.0, y: 2.0 }).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "begin", "x": 1.0, "y": 2.0 }));

    let events: Vec<TouchEvent> = serde_json::from_str(r#"[{"type":"end"},{"type":"shake"}]"#).unwrap();
    assert_eq!(events, vec![TouchEvent::End, TouchEvent::Shake]);
}

// =============================================================
// DemoHost
// =============================================================

#[test]
fn demo_layout_is_four_red_quadrants() {
    let host = demo();
    let shapes = host.shapes();
    assert_eq!(shapes.len(), 4);
    assert!(shapes.iter().all(|s| s.color == Rgba::RED));
    assert_eq!(host.palette_opacity(), 0.0);
}

#[test]
fn scripted_gesture_moves_recolors_and_resizes() {
    let mut host = demo();
    host.replay(&scripted_gesture());

    // The touched rectangle is now frontmost.
    let shapes = host.shapes();
    let last = shapes.last().copied().unwrap();
    assert_eq!(last.color, PALETTE[3]);
    assert_eq!(host.engine().widgets.iter().last().map(|w| w.frame), Some(canvas::geom::Rect::new(20.0, 20.0, 182.0, 282.0)));
    assert_eq!(host.palette_opacity(), 1.0);
    assert!(shapes[..3].iter().all(|s| s.color == Rgba::RED));
}

#[test]
fn shake_event_clears_and_hides_palette() {
    let mut host = demo();
    host.replay(&scripted_gesture());
    host.dispatch(TouchEvent::Shake);
    assert!(host.shapes().is_empty());
    assert_eq!(host.palette_opacity(), 0.0);
}
