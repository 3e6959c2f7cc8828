use super::Progress;

/// Drives the alpha channel of a shape's fill.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AlphaInterpolator {
    progress: Progress,
    alpha: f32,
}

impl AlphaInterpolator {
    pub fn new(max_value: i32) -> Self {
        Self {
            progress: Progress::new(max_value),
            alpha: 1.0,
        }
    }

    pub fn with_alpha(max_value: i32, alpha: f32) -> Self {
        Self {
            progress: Progress::new(max_value),
            alpha,
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
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    /// Alpha channel at the current fraction: 255 is fully opaque, 0 fully
    /// transparent.
    #[inline]
    pub fn interpolated_alpha(&self) -> u8 {
        (255.0 * self.progress.fraction()) as u8
    }
}
