//! Touch-driven rectangle editor for a drawing canvas.
//!
//! The host platform feeds single-touch begin/move/end events and shake events
//! into [`engine::CanvasEngine`] and applies the [`engine::Action`]s it gets
//! back. The engine owns every rectangle on the canvas: it hit-tests corners
//! versus bodies, resizes around a fixed anchor, keeps selection exclusive,
//! shows the color palette while something is selected, and converts widgets
//! to and from resolution-independent [`shape::Shape`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Touch routing, selection, palette visibility, shape import/export |
//! | [`doc`] | Z-ordered widget store |
//! | [`widget`] | One draggable, resizable rectangle |
//! | [`input`] | Gesture session and touch state machine |
//! | [`hit`] | Corner versus body classification |
//! | [`shape`] | Normalized shapes and content-bounds letterboxing |
//! | [`palette`] | Swatch layout and nearest-swatch picking |
//! | [`render`] | Draw list for the platform layer |
//! | [`geom`] | Points, sizes and rectangles |
//! | [`color`] | RGBA colors and the palette table |
//! | [`config`] | Tunable geometry and timing, with env overrides |
//! | [`consts`] | Default numeric constants |

pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod palette;
pub mod render;
pub mod shape;
pub mod widget;
