//! Color palette strip: a vertical column of circular swatches docked on the
//! right edge of the canvas.
//!
//! The palette reports a color on every touch inside its strip, during a drag
//! as well as on touch-begin, which lets the engine recolor the selection live
//! while the finger slides over the swatches. Whether it is shown is a binary
//! intent driven by the engine; the host animates the actual opacity.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::color::{PALETTE, Rgba};
use crate::geom::{Point, Rect};

/// Lay out `count` circular swatches in a vertical stack inside `bounds`.
///
/// The diameter is the evenly divided height left after the gaps, clipped to
/// the available width; the stack is centered vertically and aligned to the
/// left edge of `bounds`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout(bounds: Rect, count: usize, spacing: f64) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    let gaps = spacing * (n - 1.0);
    let diameter = ((bounds.height - gaps) / n).min(bounds.width).max(0.0);
    let stack_height = diameter * n + gaps;
    let start_y = bounds.y + (bounds.height - stack_height) / 2.0;
    (0..count)
        .map(|i| Rect::new(bounds.x, start_y + (diameter + spacing) * i as f64, diameter, diameter))
        .collect()
}

/// Index of the swatch whose vertical center is nearest to `pt`.
///
/// There is no miss inside the strip: any point maps to some swatch as long as
/// there is one.
#[must_use]
pub fn hit_test(swatches: &[Rect], pt: Point) -> Option<usize> {
    swatches
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (pt.y - a.mid_y()).abs().total_cmp(&(pt.y - b.mid_y()).abs()))
        .map(|(i, _)| i)
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: Vec<Rgba>,
    frame: Rect,
    width: f64,
    spacing: f64,
    current: Option<Rgba>,
    visible: bool,
}

impl ColorPalette {
    /// A hidden palette with the standard eight colors.
    #[must_use]
    pub fn new(width: f64, spacing: f64) -> Self {
        Self { colors: PALETTE.to_vec(), frame: Rect::default(), width, spacing, current: None, visible: false }
    }

    /// Dock the strip on the right edge of `canvas`, full height.
    pub fn dock(&mut self, canvas: Rect) {
        let width = self.width.min(canvas.width);
        self.frame = Rect::new(canvas.max_x() - width, canvas.y, width, canvas.height);
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Swatch frames in canvas coordinates, top to bottom.
    #[must_use]
    pub fn swatch_frames(&self) -> Vec<Rect> {
        layout(self.frame, self.colors.len(), self.spacing)
    }

    /// Whether a touch at `pt` belongs to the palette. A hidden palette takes
    /// no touches.
    #[must_use]
    pub fn accepts(&self, pt: Point) -> bool {
        self.visible && self.frame.contains(pt)
    }

    /// Pick the swatch nearest to `pt`, remember it as the current color and
    /// report it, even when it is the color already current.
    pub fn touch(&mut self, pt: Point) -> Option<Rgba> {
        let idx = hit_test(&self.swatch_frames(), pt)?;
        let color = *self.colors.get(idx)?;
        self.current = Some(color);
        Some(color)
    }

    /// The last color picked, if any.
    #[must_use]
    pub fn current_color(&self) -> Option<Rgba> {
        self.current
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set the visibility intent. Returns true when it changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        true
    }
}
