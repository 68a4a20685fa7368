//! Demo host: stands in for the platform screen that embeds the canvas.
//!
//! It owns a [`CanvasEngine`], feeds it a script of touch events, applies the
//! returned actions the way a view layer would (tracking palette opacity,
//! counting draws), and exposes the resulting shapes.

use canvas::config::{CanvasConfig, ConfigError};
use canvas::engine::{Action, CanvasEngine};
use canvas::geom::{Point, Size};
use canvas::render;
use canvas::shape::{self, Shape};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("DRAWSHAPES_CONTENT_SIZE: expected WIDTHxHEIGHT, got '{0}'")]
    ContentSize(String),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One input event delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TouchEvent {
    Begin { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    End,
    Shake,
}

/// Parse a `WIDTHxHEIGHT` content size. An empty string means no content size.
///
/// # Errors
///
/// Returns [`HostError::ContentSize`] when the value isn't two positive numbers.
pub fn parse_content_size(raw: &str) -> Result<Option<Size>, HostError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let bad = || HostError::ContentSize(raw.to_string());
    let (w, h) = raw.split_once(['x', 'X']).ok_or_else(bad)?;
    let width = w.trim().parse::<f64>().map_err(|_| bad())?;
    let height = h.trim().parse::<f64>().map_err(|_| bad())?;
    let size = Size::new(width, height);
    if !size.is_usable() {
        return Err(bad());
    }
    Ok(Some(size))
}

/// Over the demo layout: drag the top-left rectangle, tap it to select it,
/// slide over the palette, then resize it from its bottom-right corner.
#[must_use]
pub fn scripted_gesture() -> Vec<TouchEvent> {
    vec![
        TouchEvent::Begin { x: 80.0, y: 120.0 },
        TouchEvent::Move { x: 90.0, y: 130.0 },
        TouchEvent::Move { x: 100.0, y: 140.0 },
        TouchEvent::End,
        TouchEvent::Begin { x: 100.0, y: 140.0 },
        TouchEvent::End,
        TouchEvent::Begin { x: 300.0, y: 170.0 },
        TouchEvent::Move { x: 300.0, y: 220.0 },
        TouchEvent::End,
        TouchEvent::Begin { x: 178.0, y: 258.0 },
        TouchEvent::Move { x: 200.0, y: 300.0 },
        TouchEvent::End,
    ]
}

pub struct DemoHost {
    engine: CanvasEngine,
    palette_opacity: f64,
    applied: usize,
}

impl DemoHost {
    #[must_use]
    pub fn new(config: CanvasConfig, size: Size, content_size: Option<Size>) -> Self {
        let mut host = Self { engine: CanvasEngine::with_size(config, size), palette_opacity: 0.0, applied: 0 };
        let actions = host.engine.set_content_size(content_size);
        host.apply(&actions);
        host
    }

    /// Seed the canvas with the startup layout.
    pub fn load_demo_layout(&mut self) {
        let actions = self.engine.set_shapes(&shape::demo_shapes());
        self.apply(&actions);
    }

    /// Deliver one platform event to the engine.
    pub fn dispatch(&mut self, event: TouchEvent) {
        let actions = match event {
            TouchEvent::Begin { x, y } => self.engine.touch_begin(Point::new(x, y)),
            TouchEvent::Move { x, y } => self.engine.touch_move(Point::new(x, y)),
            TouchEvent::End => self.engine.touch_end(),
            TouchEvent::Shake => self.engine.shake(),
        };
        self.apply(&actions);
    }

    pub fn replay(&mut self, events: &[TouchEvent]) {
        for event in events {
            self.dispatch(*event);
        }
        let draws = render::draw_list(&self.engine, self.palette_opacity).len();
        info!(events = events.len(), actions = self.applied, draws, "script replayed");
    }

    fn apply(&mut self, actions: &[Action]) {
        for action in actions {
            match action {
                Action::PaletteFade { visible, duration } => {
                    // Fades aren't animated here; jump straight to the target.
                    self.palette_opacity = if *visible { 1.0 } else { 0.0 };
                    debug!(visible, ?duration, "palette fade");
                }
                other => debug!(action = ?other, "applied"),
            }
        }
        self.applied += actions.len();
    }

    #[must_use]
    pub fn shapes(&self) -> Vec<Shape> {
        self.engine.shapes()
    }

    #[must_use]
    pub fn palette_opacity(&self) -> f64 {
        self.palette_opacity
    }

    #[must_use]
    pub fn engine(&self) -> &CanvasEngine {
        &self.engine
    }
}
