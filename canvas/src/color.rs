//! RGBA colors and the fixed palette table.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color with `f64` components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque color from red, green and blue components.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    pub const LIGHT_GRAY: Rgba = Rgba::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

    /// Tint of a new widget when nothing has been picked from the palette.
    pub const DEFAULT_TINT: Rgba = Rgba::rgb(0.0, 164.0 / 255.0, 1.0);
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({:.3}, {:.3}, {:.3}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// The palette colors, top to bottom: black, white, red, purple, blue, green,
/// yellow, orange.
pub const PALETTE: [Rgba; 8] = [
    Rgba::rgb(0.0, 0.0, 0.0),
    Rgba::rgb(1.0, 1.0, 1.0),
    Rgba::rgb(1.0, 0.329, 0.329),
    Rgba::rgb(0.49, 0.125, 0.635),
    Rgba::rgb(0.357, 0.522, 0.902),
    Rgba::rgb(0.541, 0.867, 0.141),
    Rgba::rgb(1.0, 1.0, 0.329),
    Rgba::rgb(0.953, 0.361, 0.157),
];
