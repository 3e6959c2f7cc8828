use crate::paint::Color;

use super::Progress;

/// Drives a fill color whose alpha fades in with the interpolation
/// fraction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorInterpolator {
    progress: Progress,
    color: Color,
}

impl ColorInterpolator {
    pub fn new(max_value: i32) -> Self {
        Self {
            progress: Progress::new(max_value),
            color: Color::BLACK,
        }
    }

    pub fn with_color(max_value: i32, color: Color) -> Self {
        Self {
            progress: Progress::new(max_value),
            color,
        }
    }

    #[inline]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[inline]
    pub fn update(&mut self, value: i32) {
        self.progress.update(value);
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The configured color with its alpha byte scaled by the current
    /// fraction.
    #[inline]
    pub fn interpolated_shade(&self) -> Color {
        self.color
            .with_alpha((self.progress.fraction() * 255.0) as u8)
    }
}
