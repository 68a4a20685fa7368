#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Size;

fn engine_with_one_widget() -> CanvasEngine {
    let mut engine = CanvasEngine::with_size(crate::config::CanvasConfig::default(), Size::new(320.0, 480.0));
    engine.touch_begin(Point::new(50.0, 50.0));
    engine.touch_move(Point::new(150.0, 200.0));
    engine.touch_end();
    engine
}

fn count<F>(cmds: &[DrawCmd], pred: F) -> usize
where
    F: Fn(&DrawCmd) -> bool,
{
    cmds.iter().filter(|c| pred(c)).count()
}

#[test]
fn empty_canvas_draws_nothing() {
    let engine = CanvasEngine::with_size(crate::config::CanvasConfig::default(), Size::new(320.0, 480.0));
    assert!(draw_list(&engine, 0.0).is_empty());
}

#[test]
fn unselected_widget_draws_outline_only() {
    let engine = engine_with_one_widget();
    let cmds = draw_list(&engine, 0.0);
    assert_eq!(
        cmds,
        vec![DrawCmd::Outline { frame: Rect::new(50.0, 50.0, 100.0, 150.0), color: Rgba::DEFAULT_TINT, width: 1.0 }]
    );
}

#[test]
fn selected_widget_draws_four_handles_on_corners() {
    let mut engine = engine_with_one_widget();
    engine.touch_begin(Point::new(100.0, 125.0));
    engine.touch_end();
    let cmds = draw_list(&engine, 1.0);
    assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Circle { .. })), 4);
    assert!(cmds.contains(&DrawCmd::Circle {
        center: Point::new(150.0, 200.0),
        radius: 8.0,
        fill: Rgba::DEFAULT_TINT,
        stroke: Rgba::WHITE,
    }));
}

#[test]
fn swatches_drawn_last_with_opacity() {
    let engine = engine_with_one_widget();
    let cmds = draw_list(&engine, 0.5);
    assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Swatch { opacity, .. } if *opacity == 0.5)), 8);
    assert!(matches!(cmds[0], DrawCmd::Outline { .. }));
    assert!(matches!(cmds.last(), Some(DrawCmd::Swatch { .. })));
}
