//! Flash shape configuration records.
//!
//! A [`FlashShape`] holds everything a renderer needs to draw one animated
//! decorative shape: the kind tag, pixel offsets, per-segment colors, and
//! optional interpolators. Shapes are built, configured, handed to a
//! renderer, and discarded when the effect ends.

mod flash_shape;
mod kind;
mod spiral;

pub use flash_shape::FlashShape;
pub use kind::ShapeKind;
pub use spiral::{SegmentHalf, SpiralArcDescriptor, SpiralSegment};
