//! Canvas configuration: touch-target geometry, palette layout and fade timing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::color::Rgba;
use crate::consts::{FADE_MS, HANDLE_RADIUS, PALETTE_WIDTH, SWATCH_SPACING, TOUCH_TARGET};

/// Error returned by [`CanvasConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The variable is set but isn't a number.
    #[error("{var}: cannot parse '{value}' as a number")]
    Parse { var: String, value: String },
    /// The variable parsed but is zero, negative or not finite.
    #[error("{var}: '{value}' must be a positive finite number")]
    OutOfRange { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Side of the square touch target centered on each corner.
    pub touch_target: f64,
    /// Visual radius of a corner handle.
    pub handle_radius: f64,
    /// Width of the palette strip on the right edge.
    pub palette_width: f64,
    /// Gap between adjacent palette swatches.
    pub swatch_spacing: f64,
    /// Duration of a palette fade in or out.
    pub fade_duration: Duration,
    /// Color of new widgets before anything is picked from the palette.
    pub default_color: Rgba,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            touch_target: TOUCH_TARGET,
            handle_radius: HANDLE_RADIUS,
            palette_width: PALETTE_WIDTH,
            swatch_spacing: SWATCH_SPACING,
            fade_duration: Duration::from_millis(FADE_MS),
            default_color: Rgba::DEFAULT_TINT,
        }
    }
}

impl CanvasConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `DRAWSHAPES_TOUCH_TARGET`: default 44
    /// - `DRAWSHAPES_HANDLE_RADIUS`: default 8
    /// - `DRAWSHAPES_PALETTE_WIDTH`: default 44
    /// - `DRAWSHAPES_SWATCH_SPACING`: default 5
    /// - `DRAWSHAPES_FADE_MS`: default 150
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to something that isn't
    /// a positive number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`CanvasConfig::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`CanvasConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            touch_target: positive(&lookup, "DRAWSHAPES_TOUCH_TARGET", defaults.touch_target)?,
            handle_radius: positive(&lookup, "DRAWSHAPES_HANDLE_RADIUS", defaults.handle_radius)?,
            palette_width: positive(&lookup, "DRAWSHAPES_PALETTE_WIDTH", defaults.palette_width)?,
            swatch_spacing: positive(&lookup, "DRAWSHAPES_SWATCH_SPACING", defaults.swatch_spacing)?,
            fade_duration: Duration::from_millis(positive_millis(&lookup, "DRAWSHAPES_FADE_MS", FADE_MS)?),
            default_color: defaults.default_color,
        })
    }

    /// Distance a widget's touch area extends past its frame on every side.
    #[must_use]
    pub fn handle_margin(&self) -> f64 {
        self.touch_target / 2.0
    }

    /// Smallest side a resize may produce: corner touch squares can abut but
    /// never overlap, and neither can the handle circles.
    #[must_use]
    pub fn minimum_size(&self) -> f64 {
        self.touch_target.max(2.0 * self.handle_radius)
    }
}

fn positive<F>(lookup: &F, var: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Parse { var: var.into(), value: raw.clone() })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::OutOfRange { var: var.into(), value: raw });
    }
    Ok(value)
}

fn positive_millis<F>(lookup: &F, var: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::OutOfRange { var: var.into(), value: raw }),
        Ok(ms) => Ok(ms),
        Err(_) => Err(ConfigError::Parse { var: var.into(), value: raw }),
    }
}
