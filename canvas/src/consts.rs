//! Shared numeric constants for the canvas crate.

// ── Touch targets ───────────────────────────────────────────────

/// Side length of the square touch target centered on each corner handle.
pub const TOUCH_TARGET: f64 = 44.0;

/// Visual radius of a corner handle circle.
pub const HANDLE_RADIUS: f64 = 8.0;

/// Stroke width of a widget's border outline and of each handle circle.
pub const BORDER_WIDTH: f64 = 1.0;

// ── Palette ─────────────────────────────────────────────────────

/// Width of the palette strip docked on the right edge of the canvas.
pub const PALETTE_WIDTH: f64 = 44.0;

/// Vertical gap between two adjacent swatches.
pub const SWATCH_SPACING: f64 = 5.0;

/// Duration of a palette fade in or out, in milliseconds.
pub const FADE_MS: u64 = 150;

// ── Creation ────────────────────────────────────────────────────

/// Side length of a freshly staged widget before the first move.
pub const STAGED_SIDE: f64 = 1.0;
