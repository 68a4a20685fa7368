//! Normalized shape model.
//!
//! A [`Shape`] describes one colored rectangle as fractions of the content
//! bounds, so a set of shapes survives canvas resizes and can be handed to
//! and from the embedding host independently of its pixel size. Conversion
//! to and from pixel frames goes through [`content_bounds`], which letterboxes
//! an optional fixed content size inside the canvas.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::geom::{Point, Rect, Size};

/// A colored rectangle in normalized (`0.0..=1.0`) content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub color: Rgba,
    pub origin: Point,
    pub size: Size,
}

impl Shape {
    #[must_use]
    pub fn new(color: Rgba, origin: Point, size: Size) -> Self {
        Self { color, origin, size }.clamped()
    }

    /// Copy with every coordinate forced into `0.0..=1.0`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            color: self.color,
            origin: Point::new(unit(self.origin.x), unit(self.origin.y)),
            size: Size::new(unit(self.size.width), unit(self.size.height)),
        }
    }
}

/// The letterboxed region of `canvas` that holds content of `content_size`.
///
/// Without a usable content size the whole canvas is the content area.
#[must_use]
pub fn content_bounds(canvas: Rect, content_size: Option<Size>) -> Rect {
    match content_size {
        Some(size) if size.is_usable() => canvas.aspect_fit(size),
        _ => canvas,
    }
}

/// Express a pixel `frame` as a normalized [`Shape`] relative to `content`.
#[must_use]
pub fn to_normalized(frame: Rect, color: Rgba, content: Rect) -> Shape {
    Shape {
        color,
        origin: Point::new(ratio(frame.x - content.x, content.width), ratio(frame.y - content.y, content.height)),
        size: Size::new(ratio(frame.width, content.width), ratio(frame.height, content.height)),
    }
}

/// Inverse of [`to_normalized`]: the pixel frame of `shape` inside `content`.
#[must_use]
pub fn to_pixel_frame(shape: &Shape, content: Rect) -> Rect {
    let shape = shape.clamped();
    Rect::new(
        content.x + shape.origin.x * content.width,
        content.y + shape.origin.y * content.height,
        shape.size.width * content.width,
        shape.size.height * content.height,
    )
}

/// Startup layout: four red quarter-sized rectangles, one per quadrant.
#[must_use]
pub fn demo_shapes() -> Vec<Shape> {
    [(0.0, 0.0), (0.5, 0.0), (0.0, 0.5), (0.5, 0.5)]
        .into_iter()
        .map(|(x, y)| Shape::new(Rgba::RED, Point::new(x, y), Size::new(0.5, 0.5)))
        .collect()
}

fn ratio(value: f64, extent: f64) -> f64 {
    if extent > 0.0 { unit(value / extent) } else { 0.0 }
}

fn unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
