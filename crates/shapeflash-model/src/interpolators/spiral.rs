use crate::shapes::{SegmentHalf, SpiralSegment};

use super::Progress;

/// Drives spiral growth by emitting progressively larger 180° segments.
///
/// Segment dimensions step by fixed factors derived from the segment cap
/// and the height:width ratio, so the spiral keeps its proportions as it
/// unrolls.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpiralInterpolator {
    progress: Progress,
    max_segment_width: f32,
    max_segment_height: f32,
    segment_width_factor: f32,
    segment_height_factor: f32,
}

impl SpiralInterpolator {
    /// `max_segment_count` caps how many slices the spiral unrolls into;
    /// values below 1 are coerced to 1.
    pub fn new(
        max_value: i32,
        max_segment_height: f32,
        max_segment_width: f32,
        max_segment_count: usize,
    ) -> Self {
        let ratio = max_segment_height / max_segment_width;
        let count = max_segment_count.max(1);
        let segment_width_factor = max_segment_width / count as f32;

        Self {
            progress: Progress::new(max_value),
            max_segment_width,
            max_segment_height,
            segment_width_factor,
            segment_height_factor: ratio * segment_width_factor,
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
    pub fn max_segment_width(&self) -> f32 {
        self.max_segment_width
    }

    #[inline]
    pub fn max_segment_height(&self) -> f32 {
        self.max_segment_height
    }

    /// Segments making up the spiral at the current fraction, alternating
    /// bottom/top halves, clipped so neither dimension exceeds its maximum.
    pub fn segments(&self) -> Vec<SpiralSegment> {
        let interpolated_width = self.progress.fraction() * self.max_segment_width;
        let segment_count = (interpolated_width / self.segment_width_factor) as usize;

        let mut final_count = 0usize;
        while final_count <= segment_count
            && final_count as f32 * self.segment_height_factor <= self.max_segment_height
            && (final_count as f32) * self.segment_width_factor < self.max_segment_width
        {
            final_count += 1;
        }

        (0..final_count)
            .map(|i| {
                let half = if i % 2 == 0 {
                    SegmentHalf::Bottom
                } else {
                    SegmentHalf::Top
                };
                SpiralSegment::new(
                    half,
                    (i + 1) as f32 * self.segment_width_factor,
                    (i + 1) as f32 * self.segment_height_factor,
                )
            })
            .collect()
    }
}
