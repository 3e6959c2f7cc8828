//! Shapeflash model crate.
//!
//! Data models for animated, multi-colored "flash" shapes: the shape
//! configuration records a renderer consumes, the packed-ARGB color and
//! palette tables, and the interpolators that derive drawable quantities
//! from an animation progress value. No rendering happens here.

pub mod interpolators;
pub mod logging;
pub mod paint;
pub mod shapes;
