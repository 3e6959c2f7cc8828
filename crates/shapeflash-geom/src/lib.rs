//! 2D geometry primitives for flash-shape metrics.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The model crate derives star and rectangle drawing metrics from these
//! types; renderers convert to their own device space.

mod line;
mod rect;
mod vec2;

pub use line::Line;
pub use rect::Rect;
pub use vec2::Vec2;
