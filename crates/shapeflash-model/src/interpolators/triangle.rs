use super::Progress;

/// Drives the growth of one triangle component.
///
/// The triangle scales along one driving axis (altitude by default); the
/// other axis follows proportionally so the aspect ratio is preserved.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleInterpolator {
    progress: Progress,
    base: f32,
    altitude: f32,
    interpolate_on_altitude: bool,
}

impl TriangleInterpolator {
    /// `altitude` and `base` must be positive; non-positive inputs are
    /// coerced to 1 so the proportional scaling stays well-defined.
    pub fn new(max_value: i32, altitude: f32, base: f32) -> Self {
        Self {
            progress: Progress::new(max_value),
            base: if base > 0.0 { base } else { 1.0 },
            altitude: if altitude > 0.0 { altitude } else { 1.0 },
            interpolate_on_altitude: true,
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
    pub fn base(&self) -> f32 {
        self.base
    }

    pub fn set_base(&mut self, base: f32) {
        self.base = base;
    }

    #[inline]
    pub fn altitude(&self) -> f32 {
        self.altitude
    }

    pub fn set_altitude(&mut self, altitude: f32) {
        self.altitude = altitude;
    }

    #[inline]
    pub fn interpolate_on_altitude(&self) -> bool {
        self.interpolate_on_altitude
    }

    /// When true (the default) the altitude is the driving axis; when
    /// false, the base drives and the altitude follows.
    pub fn set_interpolate_on_altitude(&mut self, interpolate_on_altitude: bool) {
        self.interpolate_on_altitude = interpolate_on_altitude;
    }

    /// `(base, altitude)` at the current fraction.
    pub fn interpolated_values(&self) -> (f32, f32) {
        if self.interpolate_on_altitude {
            let altitude = self.progress.fraction() * self.altitude;
            let base = altitude * self.base / self.altitude;
            (base, altitude)
        } else {
            let base = self.progress.fraction() * self.base;
            let altitude = self.altitude * base / self.base;
            (base, altitude)
        }
    }
}
