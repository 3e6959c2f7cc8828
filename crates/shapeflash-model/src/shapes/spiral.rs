use shapeflash_geom::Rect;

/// Which half of the oval a spiral segment is cut from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SegmentHalf {
    Top,
    Bottom,
}

/// One 180-degree slice of a spiral.
///
/// `width` and `height` are the dimensions of the rectangle bounding the
/// oval this slice belongs to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpiralSegment {
    pub half: SegmentHalf,
    pub width: f32,
    pub height: f32,
}

impl SpiralSegment {
    #[inline]
    pub const fn new(half: SegmentHalf, width: f32, height: f32) -> Self {
        Self { half, width, height }
    }
}

/// One arc along a spiral path: the oval bounds plus start/sweep angles
/// in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpiralArcDescriptor {
    pub bounds: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl SpiralArcDescriptor {
    #[inline]
    pub const fn new(bounds: Rect, start_angle: f32, sweep_angle: f32) -> Self {
        Self { bounds, start_angle, sweep_angle }
    }

    /// End angle of the arc, in degrees.
    #[inline]
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_descriptor_end_angle() {
        let arc = SpiralArcDescriptor::new(Rect::new(0.0, 0.0, 100.0, 50.0), 90.0, 180.0);
        assert_eq!(arc.end_angle(), 270.0);
        assert!(!arc.bounds.is_empty());
    }

    #[test]
    fn segment_carries_oval_bounds() {
        let segment = SpiralSegment::new(SegmentHalf::Top, 40.0, 80.0);
        assert_eq!(segment.half, SegmentHalf::Top);
        assert_eq!(segment.width, 40.0);
        assert_eq!(segment.height, 80.0);
    }
}
