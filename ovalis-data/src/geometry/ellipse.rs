use std::{f64::consts::TAU, fmt};

use rand::Rng;
use tracing::trace;

use super::{Frame, Line, Point, Rectangle};
use crate::error::{ensure_finite, Result};

/// How far off a line segment a computed intersection point may be while still counting as
/// being on it
pub const SEGMENT_TOLERANCE: f64 = 0.01;

/// A struct representing an axis-aligned ellipse
///
/// Properties:
/// * center is at (x, y)
/// * has a radius of w/2 (= a) in the x axis
/// * has a radius of h/2 (= b) in the y axis
///
/// Negative or zero extents are allowed, such an ellipse doesn't contain or intersect anything.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Ellipse {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Like [`Self::new`], but refuses NaNs and infinities.
    pub fn checked(x: f64, y: f64, w: f64, h: f64) -> Result<Self> {
        Ok(Self {
            x: ensure_finite("x", x)?,
            y: ensure_finite("y", y)?,
            w: ensure_finite("width", w)?,
            h: ensure_finite("height", h)?,
        })
    }

    pub fn set_to(&mut self, x: f64, y: f64, w: f64, h: f64) -> &mut Self {
        *self = Self { x, y, w, h };
        self
    }

    pub fn copy_from<F: Frame + ?Sized>(&mut self, source: &F) -> &mut Self {
        let (x, y, w, h) = source.frame();
        self.set_to(x, y, w, h)
    }

    pub fn copy_to<'a, F: Frame + ?Sized>(&self, dest: &'a mut F) -> &'a mut F {
        dest.set_frame(self.x, self.y, self.w, self.h);
        dest
    }

    #[must_use]
    pub fn centre(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Moves the ellipse, the width is left alone
    pub fn set_left(&mut self, value: f64) {
        self.x = value;
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Resizes the ellipse so that [`Self::right`] returns `value`, collapsing the width to 0 if
    /// `value` is to the left of `x`.
    pub fn set_right(&mut self, value: f64) {
        self.w = if value < self.x { 0.0 } else { value - self.x };
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Moves the ellipse, the height is left alone
    pub fn set_top(&mut self, value: f64) {
        self.y = value;
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn set_bottom(&mut self, value: f64) {
        self.h = if value < self.y { 0.0 } else { value - self.y };
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.w == 0.0 || self.h == 0.0
    }

    /// Passing `true` zeroes every field, `false` does nothing
    pub fn set_empty(&mut self, empty: bool) {
        if empty {
            self.set_to(0.0, 0.0, 0.0, 0.0);
        }
    }

    /// Returns `(x - w, y - h, w, h)`.
    ///
    /// NOTE: This is offset from the area the ellipse covers, which is what
    /// [`Self::framing_rect`] returns. Existing callers depend on this offset.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        let &Ellipse { x, y, w, h } = self;
        Rectangle::new(x - w, y - h, w, h)
    }

    /// The smallest rectangle enclosing the ellipse
    #[must_use]
    pub fn framing_rect(&self) -> Rectangle {
        let &Ellipse { x, y, w, h } = self;
        Rectangle::new(x - w / 2.0, y - h / 2.0, w, h).normalised()
    }

    /// Checks whether `point` lies strictly inside the ellipse
    #[must_use]
    pub fn contains(&self, Point { x: px, y: py }: Point) -> bool {
        let &Ellipse { x, y, w, h } = self;
        if w <= 0.0 || h <= 0.0 {
            return false;
        }

        // Map the framing rectangle onto [0,1]x[0,1], which turns the ellipse into a circle
        // of radius 0.5 centered on (0.5, 0.5), then move that circle to the origin
        let norm_x = (px - (x - w / 2.0)) / w - 0.5;
        let norm_y = (py - (y - h / 2.0)) / h - 0.5;

        norm_x * norm_x + norm_y * norm_y < 0.25
    }

    /// Picks a point inside the ellipse, every part of its area being equally likely.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let mut point = Point::default();
        self.random_into(rng, &mut point);
        point
    }

    /// Same as [`Self::random`], but writes into `out` instead.
    pub fn random_into<'a, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        out: &'a mut Point,
    ) -> &'a mut Point {
        let angle = rng.gen::<f64>() * TAU;
        // Without the square root, points would bunch up around the centre
        let radius = rng.gen::<f64>().sqrt();

        out.x = self.x + radius * angle.cos() * self.w / 2.0;
        out.y = self.y + radius * angle.sin() * self.h / 2.0;
        out
    }

    /// Checks whether the boundary of the ellipse crosses `line` between its endpoints.
    #[must_use]
    pub fn intersects_line(&self, line: &Line) -> bool {
        self.line_candidates(line)
            .into_iter()
            .flatten()
            .any(|point| line.point_on_segment(point, SEGMENT_TOLERANCE))
    }

    /// Returns the points where the boundary of the ellipse crosses `line` between its
    /// endpoints, there are at most 2 of them.
    #[must_use]
    pub fn line_intersections(&self, line: &Line) -> Vec<Point> {
        self.line_candidates(line)
            .into_iter()
            .flatten()
            .filter(|&point| line.point_on_segment(point, SEGMENT_TOLERANCE))
            .collect()
    }

    /// Intersects the boundary with the infinite line through `line`'s endpoints.
    ///
    /// The candidate with the larger x comes first, or the one with the larger y if both share
    /// the same x. A tangent line gives the touching point twice.
    fn line_candidates(&self, line: &Line) -> [Option<Point>; 2] {
        let &Ellipse { x: h, y: k, w, h: height } = self;
        if w <= 0.0 || height <= 0.0 {
            trace!("Degenerate ellipse {}, no intersections", self);
            return [None, None];
        }

        let a = w / 2.0;
        let b = height / 2.0;
        let Line { start, end } = *line;
        let direction = end - start;

        // Walk along start + t * direction in a frame where the ellipse is the unit circle
        // centered on the origin, then solve |(u, v) + t * (du, dv)|^2 = 1 for t
        let u = (start.x - h) / a;
        let v = (start.y - k) / b;
        let du = direction.x / a;
        let dv = direction.y / b;

        let quad_a = du * du + dv * dv;
        if quad_a == 0.0 {
            trace!("Line {line:?} has no length, no intersections");
            return [None, None];
        }
        let half_b = u * du + v * dv;
        let quad_c = u * u + v * v - 1.0;

        let discriminant = half_b * half_b - quad_a * quad_c;
        if discriminant < 0.0 {
            trace!(
                "Line {line:?} misses {}, discriminant = {discriminant}",
                self
            );
            return [None, None];
        }

        let root = discriminant.sqrt();
        let first = start + direction * ((-half_b + root) / quad_a);
        let second = start + direction * ((-half_b - root) / quad_a);

        let (first, second) =
            if second.x > first.x || (second.x == first.x && second.y > first.y) {
                (second, first)
            } else {
                (first, second)
            };

        [finite(first), finite(second)]
    }
}

fn finite(point: Point) -> Option<Point> {
    point.is_finite().then_some(point)
}

impl Frame for Ellipse {
    fn frame(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.w, self.h)
    }

    fn set_frame(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.set_to(x, y, w, h);
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let &Ellipse { x, y, w, h } = self;
        write!(f, "[{{Ellipse (x={x} y={y} width={w} height={h})}}]")
    }
}
