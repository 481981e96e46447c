use super::{Frame, Line, Point};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rectangle {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[must_use = "This function doesn't modify `self`, but returns a new `Rectangle`"]
    pub fn normalised(&self) -> Self {
        let Self {
            mut x,
            mut y,
            mut w,
            mut h,
        } = *self;

        if w < 0.0 {
            x += w;
            w = w.abs();
        }

        if h < 0.0 {
            y += h;
            h = h.abs();
        }

        Self { x, y, w, h }
    }

    #[must_use]
    pub fn contains(&self, Point { x: x1, y: y1 }: Point) -> bool {
        let &Rectangle { x, y, w, h } = self;
        (x..x + w).contains(&x1) && (y..y + h).contains(&y1)
    }

    /// The corners in clockwise order, starting at `(x, y)`
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let &Rectangle { x, y, w, h } = self;
        [
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ]
    }

    /// The four sides, each one going from a corner to the next clockwise one
    #[must_use]
    pub fn edges(&self) -> [Line; 4] {
        let [a, b, c, d] = self.corners();
        [Line::new(a, b), Line::new(b, c), Line::new(c, d), Line::new(d, a)]
    }
}

impl Frame for Rectangle {
    fn frame(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.w, self.h)
    }

    fn set_frame(&mut self, x: f64, y: f64, w: f64, h: f64) {
        *self = Self { x, y, w, h };
    }
}
