//! Rendering: turns engine state into a flat list of draw commands.
//!
//! The platform layer owns the actual drawing surface. This module only reads
//! engine state and describes what to draw, back to front: each widget's
//! border outline, its corner handles when selected, then the palette
//! swatches on top of everything.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::color::Rgba;
use crate::consts::BORDER_WIDTH;
use crate::engine::CanvasEngine;
use crate::geom::{Point, Rect};
use crate::hit::Corner;
use crate::widget::RectangleWidget;

/// One primitive for the platform layer to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Unfilled rectangle outline.
    Outline { frame: Rect, color: Rgba, width: f64 },
    /// Filled circle with a thin stroke.
    Circle { center: Point, radius: f64, fill: Rgba, stroke: Rgba },
    /// Palette swatch: a circle inscribed in `frame`.
    Swatch { frame: Rect, color: Rgba, border: Rgba, opacity: f64 },
}

/// Describe the whole scene. `palette_opacity` is the palette's current
/// animated opacity as tracked by the host; swatches are omitted at zero.
#[must_use]
pub fn draw_list(engine: &CanvasEngine, palette_opacity: f64) -> Vec<DrawCmd> {
    let mut cmds = Vec::new();
    for widget in engine.widgets.iter() {
        draw_widget(&mut cmds, widget, engine.config.handle_radius);
    }

    if palette_opacity > 0.0 {
        let palette = &engine.palette;
        for (frame, color) in palette.swatch_frames().into_iter().zip(palette.colors()) {
            cmds.push(DrawCmd::Swatch { frame, color: *color, border: Rgba::LIGHT_GRAY, opacity: palette_opacity });
        }
    }
    cmds
}

fn draw_widget(cmds: &mut Vec<DrawCmd>, widget: &RectangleWidget, handle_radius: f64) {
    cmds.push(DrawCmd::Outline { frame: widget.frame, color: widget.color, width: BORDER_WIDTH });
    if !widget.is_selected() {
        return;
    }
    for corner in Corner::PRIORITY {
        cmds.push(DrawCmd::Circle {
            center: corner.of(&widget.frame),
            radius: handle_radius,
            fill: widget.color,
            stroke: Rgba::WHITE,
        });
    }
}
