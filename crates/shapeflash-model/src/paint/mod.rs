//! Color model shared between shape configuration and renderers.
//!
//! Scope:
//! - packed ARGB color representation
//! - named constant palettes
//!
//! Geometry types live in `shapeflash-geom`.

mod color;
mod palette;

pub use color::Color;
pub use palette::Palette;
