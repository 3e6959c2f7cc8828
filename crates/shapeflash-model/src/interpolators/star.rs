use core::fmt;

use shapeflash_geom::{Line, Vec2};

use super::{Progress, TriangleInterpolator};

/// Failure to derive star metrics from the requested dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StarBuildError {
    /// Width or height was non-positive or non-finite.
    InvalidDimensions,
    /// A bottom edge of the inner polygon could not be constructed.
    DegenerateBottomLine,
    /// A bottom-edge bisector had no defined slope or no x-axis crossing.
    DegenerateBisector,
}

impl fmt::Display for StarBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarBuildError::InvalidDimensions => {
                write!(f, "star dimensions must be positive and finite")
            }
            StarBuildError::DegenerateBottomLine => {
                write!(f, "bottom edge of the inner polygon is degenerate")
            }
            StarBuildError::DegenerateBisector => {
                write!(f, "bottom edge bisector is degenerate")
            }
        }
    }
}

impl std::error::Error for StarBuildError {}

/// Metrics and per-triangle interpolators for drawing a five-pointed star.
///
/// The star is modeled as an inner polygon (top line, two vertical sides,
/// two diagonal bottom edges meeting at a peak) with five outward
/// triangles, one per point. Built with [`StarBuilder`];
/// [`update`](StarInterpolator::update) fans the progress value out to all
/// five triangle interpolators.
#[derive(Debug, Copy, Clone)]
pub struct StarInterpolator {
    progress: Progress,
    width: f32,
    height: f32,

    top_line: Line,
    left_side_line: Line,
    right_side_line: Line,
    bottom_left_line: Line,
    bottom_right_line: Line,

    bottom_left_bisector: Line,
    bottom_right_bisector: Line,

    center_polygon_peak: Vec2,
    bottom_left_midpoint: Vec2,
    bottom_right_midpoint: Vec2,
    bottom_left_bisector_x_intercept: Vec2,
    bottom_right_bisector_x_intercept: Vec2,

    top_triangle: TriangleInterpolator,
    left_triangle: TriangleInterpolator,
    right_triangle: TriangleInterpolator,
    bottom_left_triangle: TriangleInterpolator,
    bottom_right_triangle: TriangleInterpolator,
}

impl StarInterpolator {
    pub fn builder(max_value: i32) -> StarBuilder {
        StarBuilder::new(max_value)
    }

    #[inline]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Advances the star and all five point triangles.
    pub fn update(&mut self, value: i32) {
        self.progress.update(value);
        self.top_triangle.update(value);
        self.left_triangle.update(value);
        self.right_triangle.update(value);
        self.bottom_left_triangle.update(value);
        self.bottom_right_triangle.update(value);
    }

    #[inline]
    pub fn top_line(&self) -> Line {
        self.top_line
    }

    #[inline]
    pub fn left_side_line(&self) -> Line {
        self.left_side_line
    }

    #[inline]
    pub fn right_side_line(&self) -> Line {
        self.right_side_line
    }

    #[inline]
    pub fn bottom_left_line(&self) -> Line {
        self.bottom_left_line
    }

    #[inline]
    pub fn bottom_right_line(&self) -> Line {
        self.bottom_right_line
    }

    #[inline]
    pub fn bottom_left_bisector(&self) -> Line {
        self.bottom_left_bisector
    }

    #[inline]
    pub fn bottom_right_bisector(&self) -> Line {
        self.bottom_right_bisector
    }

    /// Apex of the inner polygon's bottom edges.
    #[inline]
    pub fn center_polygon_peak(&self) -> Vec2 {
        self.center_polygon_peak
    }

    #[inline]
    pub fn bottom_left_midpoint(&self) -> Vec2 {
        self.bottom_left_midpoint
    }

    #[inline]
    pub fn bottom_right_midpoint(&self) -> Vec2 {
        self.bottom_right_midpoint
    }

    /// Where the bottom-left triangle's bisector crosses the x-axis.
    #[inline]
    pub fn bottom_left_bisector_x_intercept(&self) -> Vec2 {
        self.bottom_left_bisector_x_intercept
    }

    /// Where the bottom-right triangle's bisector crosses the x-axis.
    #[inline]
    pub fn bottom_right_bisector_x_intercept(&self) -> Vec2 {
        self.bottom_right_bisector_x_intercept
    }

    #[inline]
    pub fn top_triangle(&self) -> &TriangleInterpolator {
        &self.top_triangle
    }

    #[inline]
    pub fn left_triangle(&self) -> &TriangleInterpolator {
        &self.left_triangle
    }

    #[inline]
    pub fn right_triangle(&self) -> &TriangleInterpolator {
        &self.right_triangle
    }

    #[inline]
    pub fn bottom_left_triangle(&self) -> &TriangleInterpolator {
        &self.bottom_left_triangle
    }

    #[inline]
    pub fn bottom_right_triangle(&self) -> &TriangleInterpolator {
        &self.bottom_right_triangle
    }
}

/// Builder for [`StarInterpolator`].
#[derive(Debug, Copy, Clone)]
pub struct StarBuilder {
    max_value: i32,
    width: f32,
    height: f32,
}

impl StarBuilder {
    pub fn new(max_value: i32) -> Self {
        Self {
            max_value,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Derives the star metrics. Fails on dimensions that cannot produce a
    /// valid inner polygon.
    pub fn build(self) -> Result<StarInterpolator, StarBuildError> {
        let (width, height) = (self.width, self.height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(StarBuildError::InvalidDimensions);
        }

        let ratio_width_to_height = width / height;
        let center = Vec2::new(width / 2.0, height / 2.0);

        // Inner polygon: top edge sits below center, the two vertical sides
        // flank it, and the bottom edges fall from their lower corners to a
        // peak below.
        let center_polygon_height = height / 4.0;
        let center_polygon_width = center_polygon_height * ratio_width_to_height;

        let top_line_y = center.y + center_polygon_height / 2.0;
        let left_x = center.x - center_polygon_width / 2.0;
        let right_x = center.x + center_polygon_width / 2.0;
        let peak_height = center_polygon_height + center_polygon_height / 4.0;

        let top_line = Line::Horizontal { y: top_line_y };
        let left_side_line = Line::Vertical { x: left_x };
        let right_side_line = Line::Vertical { x: right_x };

        let peak = Vec2::new(center.x, top_line_y - peak_height);
        let corner_right = Vec2::new(right_x, top_line_y - center_polygon_height);
        let corner_left = Vec2::new(left_x, top_line_y - center_polygon_height);

        let bottom_right_line = Line::from_two_points(peak, corner_right)
            .ok_or(StarBuildError::DegenerateBottomLine)?;
        let bottom_left_line = Line::from_two_points(peak, corner_left)
            .ok_or(StarBuildError::DegenerateBottomLine)?;

        let bottom_right_midpoint = peak.midpoint(corner_right);
        let bottom_left_midpoint = peak.midpoint(corner_left);

        // Bisectors through the bottom-edge midpoints determine where the
        // bottom triangles reach toward the x-axis.
        let bottom_right_bisector = Line::from_slope_and_point(
            Some(
                bottom_right_line
                    .orthogonal_slope()
                    .ok_or(StarBuildError::DegenerateBisector)?,
            ),
            bottom_right_midpoint,
        );
        let bottom_left_bisector = Line::from_slope_and_point(
            Some(
                bottom_left_line
                    .orthogonal_slope()
                    .ok_or(StarBuildError::DegenerateBisector)?,
            ),
            bottom_left_midpoint,
        );

        let x_axis = Line::Horizontal { y: 0.0 };
        let bottom_right_bisector_x_intercept =
            Line::intersection(x_axis, bottom_right_bisector)
                .ok_or(StarBuildError::DegenerateBisector)?;
        let bottom_left_bisector_x_intercept = Line::intersection(x_axis, bottom_left_bisector)
            .ok_or(StarBuildError::DegenerateBisector)?;

        // Point triangles.
        let top_triangle_base = right_x - left_x;
        let top_triangle_altitude = height - top_line_y;
        let top_triangle =
            TriangleInterpolator::new(self.max_value, top_triangle_altitude, top_triangle_base);

        let side_triangle_base = top_line_y - center_polygon_height;
        let side_triangle_altitude = width
            - bottom_right_line
                .x_intercept()
                .ok_or(StarBuildError::DegenerateBottomLine)?;
        let left_triangle =
            TriangleInterpolator::new(self.max_value, side_triangle_altitude, side_triangle_base);
        let right_triangle =
            TriangleInterpolator::new(self.max_value, side_triangle_altitude, side_triangle_base);

        let bottom_right_triangle = TriangleInterpolator::new(
            self.max_value,
            bottom_right_midpoint.distance(bottom_right_bisector_x_intercept),
            peak.distance(corner_right),
        );
        let bottom_left_triangle = TriangleInterpolator::new(
            self.max_value,
            bottom_left_midpoint.distance(bottom_left_bisector_x_intercept),
            peak.distance(corner_left),
        );

        Ok(StarInterpolator {
            progress: Progress::new(self.max_value),
            width,
            height,
            top_line,
            left_side_line,
            right_side_line,
            bottom_left_line,
            bottom_right_line,
            bottom_left_bisector,
            bottom_right_bisector,
            center_polygon_peak: peak,
            bottom_left_midpoint,
            bottom_right_midpoint,
            bottom_left_bisector_x_intercept,
            bottom_right_bisector_x_intercept,
            top_triangle,
            left_triangle,
            right_triangle,
            bottom_left_triangle,
            bottom_right_triangle,
        })
    }
}
