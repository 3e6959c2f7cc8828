use shapeflash_geom::Rect;

use super::Progress;

/// Drives the growth of a rectangle shape inside fixed drawing bounds.
///
/// In symmetric mode the shape is drawn as four corner rectangles closing
/// in on the center, so the interpolation dimensions are halved.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectangleInterpolator {
    progress: Progress,
    width: f32,
    height: f32,
    bounds_width: f32,
    bounds_height: f32,
    symmetric: bool,
}

impl RectangleInterpolator {
    pub fn new(max_value: i32, height: f32, width: f32) -> Self {
        Self::with_symmetry(max_value, height, width, false)
    }

    /// Non-positive dimensions are coerced to 1 so interpolation stays
    /// well-defined.
    pub fn with_symmetry(max_value: i32, height: f32, width: f32, symmetric: bool) -> Self {
        let height = if height > 0.0 { height } else { 1.0 };
        let width = if width > 0.0 { width } else { 1.0 };
        Self {
            progress: Progress::new(max_value),
            width: if symmetric { width / 2.0 } else { width },
            height: if symmetric { height / 2.0 } else { height },
            bounds_width: width,
            bounds_height: height,
            symmetric,
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
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Width of the bounds the component rectangles are placed in.
    #[inline]
    pub fn bounds_width(&self) -> f32 {
        self.bounds_width
    }

    /// Height of the bounds the component rectangles are placed in.
    #[inline]
    pub fn bounds_height(&self) -> f32 {
        self.bounds_height
    }

    #[inline]
    pub fn symmetric(&self) -> bool {
        self.symmetric
    }

    /// Toggling symmetry halves or doubles the interpolation dimensions to
    /// match the four-rectangle drawing mode.
    pub fn set_symmetric(&mut self, symmetric: bool) {
        if symmetric == self.symmetric {
            return;
        }

        if symmetric {
            self.width /= 2.0;
            self.height /= 2.0;
        } else {
            self.width *= 2.0;
            self.height *= 2.0;
        }
        self.symmetric = symmetric;
    }

    /// `(width, height)` at the current fraction.
    pub fn interpolated_dimensions(&self) -> (f32, f32) {
        (
            self.progress.fraction() * self.width,
            self.progress.fraction() * self.height,
        )
    }

    /// Component rectangles at the current fraction, positioned inside the
    /// drawing bounds: one bottom-anchored rectangle normally, four corner
    /// rectangles in symmetric mode.
    pub fn rectangles(&self) -> Vec<Rect> {
        let (w, h) = self.interpolated_dimensions();
        let bounds = Rect::from_edges(0.0, 0.0, self.bounds_width, self.bounds_height);

        if !self.symmetric {
            return vec![Rect::from_edges(
                bounds.left(),
                bounds.bottom() - h,
                bounds.left() + w,
                bounds.bottom(),
            )];
        }

        vec![
            // Bottom-left
            Rect::from_edges(bounds.left(), bounds.bottom() - h, bounds.left() + w, bounds.bottom()),
            // Bottom-right
            Rect::from_edges(bounds.right() - w, bounds.bottom() - h, bounds.right(), bounds.bottom()),
            // Top-left
            Rect::from_edges(bounds.left(), bounds.top(), bounds.left() + w, bounds.top() + h),
            // Top-right
            Rect::from_edges(bounds.right() - w, bounds.top(), bounds.right(), bounds.top() + h),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asymmetric_growth_is_bottom_anchored() {
        let mut interpolator = RectangleInterpolator::new(100, 100.0, 200.0);
        interpolator.update(50);

        let rects = interpolator.rectangles();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::from_edges(0.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn symmetric_mode_halves_dimensions_and_fills_corners() {
        let mut interpolator = RectangleInterpolator::with_symmetry(100, 100.0, 200.0, true);
        assert_eq!(interpolator.width(), 100.0);
        assert_eq!(interpolator.height(), 50.0);

        interpolator.update(100);
        let rects = interpolator.rectangles();
        assert_eq!(rects.len(), 4);

        // At full progress the four corner rects tile the bounds exactly.
        assert_eq!(rects[0], Rect::from_edges(0.0, 50.0, 100.0, 100.0));
        assert_eq!(rects[1], Rect::from_edges(100.0, 50.0, 200.0, 100.0));
        assert_eq!(rects[2], Rect::from_edges(0.0, 0.0, 100.0, 50.0));
        assert_eq!(rects[3], Rect::from_edges(100.0, 0.0, 200.0, 50.0));
    }

    #[test]
    fn toggling_symmetry_rescales() {
        let mut interpolator = RectangleInterpolator::new(100, 100.0, 200.0);
        interpolator.set_symmetric(true);
        assert_eq!(interpolator.width(), 100.0);
        assert_eq!(interpolator.height(), 50.0);

        interpolator.set_symmetric(false);
        assert_eq!(interpolator.width(), 200.0);
        assert_eq!(interpolator.height(), 100.0);

        // No-op when the mode does not change.
        interpolator.set_symmetric(false);
        assert_eq!(interpolator.width(), 200.0);
    }

    #[test]
    fn non_positive_dimensions_are_coerced_to_one() {
        let mut interpolator = RectangleInterpolator::new(100, 0.0, -5.0);
        assert_eq!(interpolator.width(), 1.0);
        assert_eq!(interpolator.height(), 1.0);
        assert_eq!(interpolator.bounds_width(), 1.0);
        assert_eq!(interpolator.bounds_height(), 1.0);

        // The coerced bounds keep the geometry non-degenerate.
        interpolator.update(100);
        assert_eq!(interpolator.interpolated_dimensions(), (1.0, 1.0));
        assert!(!interpolator.rectangles()[0].is_empty());
    }

    #[test]
    fn bounds_are_unaffected_by_symmetry() {
        let interpolator = RectangleInterpolator::with_symmetry(100, 80.0, 60.0, true);
        assert_eq!(interpolator.bounds_width(), 60.0);
        assert_eq!(interpolator.bounds_height(), 80.0);
    }
}
