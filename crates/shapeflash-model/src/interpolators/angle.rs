use super::Progress;

/// Start/sweep pair for one arc component, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSweep {
    pub start: f32,
    pub sweep: f32,
}

/// Drives the swept angle of an arc shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AngleInterpolator {
    progress: Progress,
    max_angle: f32,
    max_components: usize,
}

impl AngleInterpolator {
    pub fn new(max_value: i32) -> Self {
        Self {
            progress: Progress::new(max_value),
            max_angle: 0.0,
            max_components: 1,
        }
    }

    pub fn with_angle(max_value: i32, max_angle: f32, max_components: usize) -> Self {
        Self {
            progress: Progress::new(max_value),
            max_angle,
            max_components,
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
    pub fn max_angle(&self) -> f32 {
        self.max_angle
    }

    pub fn set_max_angle(&mut self, max_angle: f32) {
        self.max_angle = max_angle;
    }

    pub fn set_max_components(&mut self, max_components: usize) {
        self.max_components = max_components;
    }

    /// Angle swept at the current fraction, in degrees.
    #[inline]
    pub fn interpolated_angle(&self) -> f32 {
        self.progress.fraction() * self.max_angle
    }

    /// Start/sweep pairs tiling the current interpolated angle.
    ///
    /// With one component, a single sweep from zero. With more, the full
    /// circle is divided into `360 / max_components`-degree components and
    /// the last pair carries the remainder when the division is inexact.
    pub fn drawing_angles(&self) -> Vec<ArcSweep> {
        if self.max_components <= 1 {
            return vec![ArcSweep {
                start: 0.0,
                sweep: self.interpolated_angle(),
            }];
        }

        let angle_factor = 360.0 / self.max_components as f32;
        let interpolated = self.interpolated_angle();
        let component_count = (interpolated / angle_factor) as usize;
        let remainder = interpolated % angle_factor;

        let mut angles = Vec::with_capacity(component_count + 1);
        let mut start = 0.0;
        for _ in 0..component_count {
            angles.push(ArcSweep {
                start,
                sweep: angle_factor,
            });
            start += angle_factor;
        }
        if remainder != 0.0 {
            angles.push(ArcSweep {
                start,
                sweep: remainder,
            });
        }
        angles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_component_is_one_sweep() {
        let mut interpolator = AngleInterpolator::with_angle(100, 360.0, 1);
        interpolator.update(50);

        let angles = interpolator.drawing_angles();
        assert_eq!(angles.len(), 1);
        assert_eq!(angles[0].start, 0.0);
        assert_eq!(angles[0].sweep, 180.0);
    }

    #[test]
    fn components_tile_the_circle_evenly() {
        let mut interpolator = AngleInterpolator::with_angle(100, 360.0, 4);
        interpolator.update(100);

        let angles = interpolator.drawing_angles();
        assert_eq!(angles.len(), 4);
        for (i, arc) in angles.iter().enumerate() {
            assert_eq!(arc.start, i as f32 * 90.0);
            assert_eq!(arc.sweep, 90.0);
        }
    }

    #[test]
    fn partial_angle_ends_with_a_remainder_sweep() {
        let mut interpolator = AngleInterpolator::with_angle(100, 360.0, 4);
        // Fraction 0.3 → 108° = one full 90° component plus 18°.
        interpolator.update(30);

        let angles = interpolator.drawing_angles();
        assert_eq!(angles.len(), 2);
        assert_eq!(angles[0].sweep, 90.0);
        assert_eq!(angles[1].start, 90.0);
        assert!((angles[1].sweep - 18.0).abs() < 1e-3);
    }

    #[test]
    fn zero_progress_sweeps_nothing() {
        let interpolator = AngleInterpolator::with_angle(100, 360.0, 1);
        let angles = interpolator.drawing_angles();
        assert_eq!(angles.len(), 1);
        assert_eq!(angles[0].sweep, 0.0);
    }
}
