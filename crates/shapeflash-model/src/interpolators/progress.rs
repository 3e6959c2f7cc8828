/// Interpolation fraction derived from an integer progress value.
///
/// `update` recomputes the fraction: values at or past `max_value` clamp to
/// 1.0, a non-positive `max_value` pins it at 0.0, otherwise it is
/// `|value| / max_value`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Progress {
    max_value: i32,
    value: i32,
    fraction: f32,
}

impl Progress {
    pub fn new(max_value: i32) -> Self {
        Self {
            max_value,
            value: 0,
            fraction: 0.0,
        }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Changes the maximum. The fraction is recomputed on the next
    /// `update`, not here.
    pub fn set_max_value(&mut self, max_value: i32) {
        self.max_value = max_value;
    }

    pub fn update(&mut self, value: i32) {
        self.value = value;
        self.fraction = if value >= self.max_value {
            1.0
        } else if self.max_value <= 0 {
            0.0
        } else {
            value.unsigned_abs() as f32 / self.max_value as f32
        };
    }

    #[inline]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }
}
