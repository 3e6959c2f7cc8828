//! Animation interpolators for flash shapes.
//!
//! Every interpolator composes a [`Progress`] tracker: an integer value
//! (scroll distance, elapsed ticks) advances toward a maximum, and the
//! interpolator derives a drawable quantity — an alpha, a shade, an angle,
//! a set of rectangles — from the resulting fraction.

mod alpha;
mod angle;
mod color;
mod progress;
mod rectangle;
mod spiral;
mod star;
mod triangle;

pub use alpha::AlphaInterpolator;
pub use angle::{AngleInterpolator, ArcSweep};
pub use color::ColorInterpolator;
pub use progress::Progress;
pub use rectangle::RectangleInterpolator;
pub use spiral::SpiralInterpolator;
pub use star::{StarBuildError, StarBuilder, StarInterpolator};
pub use triangle::TriangleInterpolator;

/// Kind-specific interpolator attached to a shape: angular sweep for an
/// arc, rectangle growth for a rectangle, and so on. A shape holds at most
/// one; absence means the kind-specific animation is not configured.
#[derive(Debug, Clone)]
pub enum ShapeInterpolator {
    Angle(AngleInterpolator),
    Rectangle(RectangleInterpolator),
    Spiral(SpiralInterpolator),
    Star(StarInterpolator),
    Triangle(TriangleInterpolator),
}

impl ShapeInterpolator {
    /// Advances the underlying progress value, whichever variant this is.
    pub fn update(&mut self, value: i32) {
        match self {
            ShapeInterpolator::Angle(i) => i.update(value),
            ShapeInterpolator::Rectangle(i) => i.update(value),
            ShapeInterpolator::Spiral(i) => i.update(value),
            ShapeInterpolator::Star(i) => i.update(value),
            ShapeInterpolator::Triangle(i) => i.update(value),
        }
    }
}
