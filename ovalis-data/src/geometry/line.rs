use super::Point;

/// A line segment going from `start` to `end`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// Checks whether `point` is on the infinite line passing through both endpoints.
    ///
    /// `epsilon` is the largest allowed perpendicular distance. A segment with no length
    /// treats every point as being on it.
    #[must_use]
    pub fn point_on_line(&self, Point { x, y }: Point, epsilon: f64) -> bool {
        let Self { start, end } = self;
        let lhs = (x - start.x) * (end.y - start.y);
        let rhs = (end.x - start.x) * (y - start.y);
        // The cross product is the distance scaled by the length of the segment
        (lhs - rhs).abs() <= epsilon * self.length()
    }

    /// Checks whether `point` is on the line and between the two endpoints, both within
    /// `epsilon`.
    ///
    /// NOTE: The bounding box of the segment is grown by `epsilon` on every side, so a point up
    /// to `epsilon` past an endpoint still counts. A stricter check would reject it, but then
    /// intersections computed right at an endpoint could get lost to rounding.
    #[must_use]
    pub fn point_on_segment(&self, point: Point, epsilon: f64) -> bool {
        let Self { start, end } = self;
        let (x_min, x_max) = (start.x.min(end.x), start.x.max(end.x));
        let (y_min, y_max) = (start.y.min(end.y), start.y.max(end.y));

        self.point_on_line(point, epsilon)
            && (x_min - epsilon..=x_max + epsilon).contains(&point.x)
            && (y_min - epsilon..=y_max + epsilon).contains(&point.y)
    }
}
