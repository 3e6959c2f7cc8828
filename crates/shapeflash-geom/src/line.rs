use super::Vec2;

/// Tolerance for point-on-line checks. Scale-aware so lines built from
/// pixel-sized coordinates still recognize their own defining points.
const EPS: f32 = 1e-4;

#[inline]
fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS * (1.0 + a.abs().max(b.abs()))
}

/// Slope-intercept model of a line in the plane.
///
/// The horizontal and vertical cases carry their own intercepts instead of
/// a slope, so "no slope" and "no intercept" are unrepresentable states
/// rather than sentinel values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Line {
    Horizontal { y: f32 },
    Vertical { x: f32 },
    Diagonal { slope: f32, y_intercept: f32 },
}

impl Line {
    /// Line through `point` with the given slope. `None` means a vertical
    /// line through the point's x; zero means a horizontal line through the
    /// point's y.
    pub fn from_slope_and_point(slope: Option<f32>, point: Vec2) -> Line {
        match slope {
            None => Line::Vertical { x: point.x },
            Some(s) if s == 0.0 => Line::Horizontal { y: point.y },
            Some(s) => Line::Diagonal {
                slope: s,
                y_intercept: point.y - s * point.x,
            },
        }
    }

    /// Line through two distinct points. Coincident points do not define a
    /// line and yield `None`.
    pub fn from_two_points(a: Vec2, b: Vec2) -> Option<Line> {
        if a == b {
            return None;
        }
        if a.x == b.x {
            return Some(Line::Vertical { x: a.x });
        }
        if a.y == b.y {
            return Some(Line::Horizontal { y: a.y });
        }

        let slope = (a.y - b.y) / (a.x - b.x);
        Some(Line::Diagonal {
            slope,
            y_intercept: b.y - slope * b.x,
        })
    }

    /// `None` for vertical lines.
    #[inline]
    pub fn slope(self) -> Option<f32> {
        match self {
            Line::Horizontal { .. } => Some(0.0),
            Line::Vertical { .. } => None,
            Line::Diagonal { slope, .. } => Some(slope),
        }
    }

    /// Slope of any line orthogonal to this one. `None` when the orthogonal
    /// line is vertical (this line is horizontal).
    #[inline]
    pub fn orthogonal_slope(self) -> Option<f32> {
        match self {
            Line::Horizontal { .. } => None,
            Line::Vertical { .. } => Some(0.0),
            Line::Diagonal { slope, .. } => Some(-1.0 / slope),
        }
    }

    /// Y-coordinate of the point at `x`. `None` for vertical lines, which
    /// cover every y at their single x.
    #[inline]
    pub fn y_at(self, x: f32) -> Option<f32> {
        match self {
            Line::Horizontal { y } => Some(y),
            Line::Vertical { .. } => None,
            Line::Diagonal { slope, y_intercept } => Some(slope * x + y_intercept),
        }
    }

    /// X-coordinate of the point at `y`. `None` for horizontal lines.
    #[inline]
    pub fn x_at(self, y: f32) -> Option<f32> {
        match self {
            Line::Horizontal { .. } => None,
            Line::Vertical { x } => Some(x),
            Line::Diagonal { slope, y_intercept } => Some((y - y_intercept) / slope),
        }
    }

    /// Where the line crosses the x-axis. `None` for horizontal lines off
    /// the axis.
    #[inline]
    pub fn x_intercept(self) -> Option<f32> {
        match self {
            Line::Horizontal { .. } => None,
            Line::Vertical { x } => Some(x),
            Line::Diagonal { slope, y_intercept } => Some(-y_intercept / slope),
        }
    }

    /// Where the line crosses the y-axis. `None` for vertical lines off
    /// the axis.
    #[inline]
    pub fn y_intercept(self) -> Option<f32> {
        match self {
            Line::Horizontal { y } => Some(y),
            Line::Vertical { .. } => None,
            Line::Diagonal { y_intercept, .. } => Some(y_intercept),
        }
    }

    pub fn contains(self, point: Vec2) -> bool {
        match self {
            Line::Horizontal { y } => approx(point.y, y),
            Line::Vertical { x } => approx(point.x, x),
            Line::Diagonal { slope, y_intercept } => {
                approx(point.y, slope * point.x + y_intercept)
            }
        }
    }

    /// Midpoint between two points on this line. `None` when either point
    /// is not on the line.
    pub fn midpoint(self, a: Vec2, b: Vec2) -> Option<Vec2> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        Some(a.midpoint(b))
    }

    /// Unit direction vector. Vertical lines point +Y, horizontal +X.
    pub fn unit_vector(self) -> Vec2 {
        match self {
            Line::Vertical { .. } => Vec2::new(0.0, 1.0),
            Line::Horizontal { .. } => Vec2::new(1.0, 0.0),
            Line::Diagonal { slope, .. } => {
                let length = (1.0 + slope * slope).sqrt();
                Vec2::new(1.0 / length, slope / length)
            }
        }
    }

    /// Point where two lines cross. `None` for parallel lines.
    pub fn intersection(a: Line, b: Line) -> Option<Vec2> {
        match (a, b) {
            (Line::Horizontal { .. }, Line::Horizontal { .. })
            | (Line::Vertical { .. }, Line::Vertical { .. }) => None,

            (Line::Vertical { x }, Line::Horizontal { y })
            | (Line::Horizontal { y }, Line::Vertical { x }) => Some(Vec2::new(x, y)),

            (Line::Horizontal { y }, diagonal @ Line::Diagonal { .. })
            | (diagonal @ Line::Diagonal { .. }, Line::Horizontal { y }) => {
                diagonal.x_at(y).map(|x| Vec2::new(x, y))
            }

            (Line::Vertical { x }, diagonal @ Line::Diagonal { .. })
            | (diagonal @ Line::Diagonal { .. }, Line::Vertical { x }) => {
                diagonal.y_at(x).map(|y| Vec2::new(x, y))
            }

            (
                Line::Diagonal {
                    slope: m1,
                    y_intercept: b1,
                },
                Line::Diagonal {
                    slope: m2,
                    y_intercept: b2,
                },
            ) => {
                if m1 == m2 {
                    return None;
                }
                let x = (b1 - b2) / (m2 - m1);
                Some(Vec2::new(x, m1 * x + b1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_two_points_coincident_is_none() {
        let a = Vec2::new(1.0, 1.0);
        assert!(Line::from_two_points(a, a).is_none());
    }

    #[test]
    fn from_two_points_positive_slope() {
        // y = x
        let line = Line::from_two_points(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)).unwrap();
        assert_eq!(line.slope(), Some(1.0));
        assert_eq!(line.x_intercept(), Some(0.0));
        assert_eq!(line.y_intercept(), Some(0.0));
        assert!(line.contains(Vec2::new(5.0, 5.0)));

        // y = 2x - 6
        let line = Line::from_two_points(Vec2::new(3.0, 0.0), Vec2::new(10.0, 14.0)).unwrap();
        assert_eq!(line.slope(), Some(2.0));
        assert_eq!(line.y_intercept(), Some(-6.0));
        assert_eq!(line.x_intercept(), Some(3.0));
        assert!(line.contains(Vec2::new(0.0, -6.0)));
        assert!(line.midpoint(Vec2::new(0.0, -6.0), Vec2::new(10.0, 14.0)).is_some());
    }

    #[test]
    fn from_two_points_axis_aligned() {
        let v = Line::from_two_points(Vec2::new(3.0, 0.0), Vec2::new(3.0, 9.0)).unwrap();
        assert_eq!(v, Line::Vertical { x: 3.0 });
        assert_eq!(v.slope(), None);

        let h = Line::from_two_points(Vec2::new(0.0, 4.0), Vec2::new(7.0, 4.0)).unwrap();
        assert_eq!(h, Line::Horizontal { y: 4.0 });
        assert_eq!(h.slope(), Some(0.0));
    }

    #[test]
    fn from_slope_and_point_positive_slope() {
        // y = 2x - 6
        let line = Line::from_slope_and_point(Some(2.0), Vec2::new(10.0, 14.0));
        assert_eq!(line.slope(), Some(2.0));
        assert_eq!(line.y_intercept(), Some(-6.0));
        assert_eq!(line.x_intercept(), Some(3.0));
        assert!(line.contains(Vec2::new(3.0, 0.0)));
    }

    #[test]
    fn from_slope_and_point_negative_slope() {
        // y = -x
        let line = Line::from_slope_and_point(Some(-1.0), Vec2::new(-2.0, 2.0));
        assert_eq!(line.slope(), Some(-1.0));
        assert_eq!(line.x_intercept(), Some(0.0));
        assert_eq!(line.y_intercept(), Some(0.0));
        assert!(line.contains(Vec2::new(1.0, -1.0)));

        let midpoint = line.midpoint(Vec2::new(-1.0, 1.0), Vec2::new(1.0, -1.0)).unwrap();
        assert_eq!(midpoint, Vec2::zero());

        // y = -x + 5
        let line = Line::from_slope_and_point(Some(-1.0), Vec2::new(2.0, 3.0));
        assert_eq!(line.x_intercept(), Some(5.0));
        assert_eq!(line.y_intercept(), Some(5.0));
        assert!(line.contains(Vec2::new(1.0, 4.0)));
        assert!(line.contains(Vec2::new(3.0, 2.0)));

        let midpoint = line.midpoint(Vec2::new(1.0, 4.0), Vec2::new(3.0, 2.0)).unwrap();
        assert_eq!(midpoint, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn from_slope_and_point_degenerate_slopes() {
        let v = Line::from_slope_and_point(None, Vec2::new(4.0, 9.0));
        assert_eq!(v, Line::Vertical { x: 4.0 });

        let h = Line::from_slope_and_point(Some(0.0), Vec2::new(4.0, 9.0));
        assert_eq!(h, Line::Horizontal { y: 9.0 });
    }

    // ── midpoint ──────────────────────────────────────────────────────────

    #[test]
    fn midpoint_requires_points_on_line() {
        let line = Line::from_slope_and_point(Some(1.0), Vec2::zero());
        assert!(line.midpoint(Vec2::new(1.0, 1.0), Vec2::new(2.0, 5.0)).is_none());
    }

    // ── intersection ──────────────────────────────────────────────────────

    #[test]
    fn intersection_of_diagonals() {
        // y = 3x - 3 and y = 2.3x + 4 cross near (10, 27).
        let line1 = Line::from_slope_and_point(Some(3.0), Vec2::new(0.0, -3.0));
        let line2 = Line::from_slope_and_point(Some(2.3), Vec2::new(0.0, 4.0));
        let p = Line::intersection(line1, line2).unwrap();
        assert_eq!(p.x.round(), 10.0);
        assert_eq!(p.y.round(), 27.0);

        // y = 2x + 3 and y = -0.5x + 7 cross at (1.6, 6.2).
        let line1 = Line::from_slope_and_point(Some(2.0), Vec2::new(0.0, 3.0));
        let line2 = Line::from_slope_and_point(Some(-0.5), Vec2::new(0.0, 7.0));
        let p = Line::intersection(line1, line2).unwrap();
        assert!((p.x - 1.6).abs() < 0.01);
        assert!((p.y - 6.2).abs() < 0.01);
    }

    #[test]
    fn intersection_axis_aligned_pairs() {
        let v = Line::Vertical { x: 3.0 };
        let h = Line::Horizontal { y: -2.0 };
        assert_eq!(Line::intersection(v, h), Some(Vec2::new(3.0, -2.0)));
        assert_eq!(Line::intersection(h, v), Some(Vec2::new(3.0, -2.0)));

        let d = Line::from_slope_and_point(Some(2.0), Vec2::zero());
        assert_eq!(Line::intersection(h, d), Some(Vec2::new(-1.0, -2.0)));
        assert_eq!(Line::intersection(v, d), Some(Vec2::new(3.0, 6.0)));
    }

    #[test]
    fn intersection_of_parallels_is_none() {
        assert!(Line::intersection(
            Line::Horizontal { y: 1.0 },
            Line::Horizontal { y: 2.0 }
        )
        .is_none());
        assert!(Line::intersection(
            Line::Vertical { x: 1.0 },
            Line::Vertical { x: 2.0 }
        )
        .is_none());

        let a = Line::from_slope_and_point(Some(2.0), Vec2::zero());
        let b = Line::from_slope_and_point(Some(2.0), Vec2::new(0.0, 5.0));
        assert!(Line::intersection(a, b).is_none());
    }

    // ── direction ─────────────────────────────────────────────────────────

    #[test]
    fn unit_vector_has_unit_length() {
        let line = Line::from_slope_and_point(Some(1.0), Vec2::zero());
        let u = line.unit_vector();
        assert!((u.length() - 1.0).abs() < 1e-6);
        assert!((u.x - u.y).abs() < 1e-6);

        assert_eq!(Line::Vertical { x: 0.0 }.unit_vector(), Vec2::new(0.0, 1.0));
        assert_eq!(Line::Horizontal { y: 0.0 }.unit_vector(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn orthogonal_slope_is_negative_reciprocal() {
        let line = Line::from_slope_and_point(Some(0.25), Vec2::zero());
        assert_eq!(line.orthogonal_slope(), Some(-4.0));
        assert_eq!(Line::Horizontal { y: 1.0 }.orthogonal_slope(), None);
        assert_eq!(Line::Vertical { x: 1.0 }.orthogonal_slope(), Some(0.0));
    }
}
