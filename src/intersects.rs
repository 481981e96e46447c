//! Intersection tests between an [`Ellipse`] and the other shapes.
//!
//! These are meant for code that's generic over which pair of shapes it's looking at, and as
//! such they all take the shapes in a fixed `(other, ellipse)` order.

use ovalis_data::geometry::{Ellipse, Line, Point, Rectangle};

/// Checks whether `point` is strictly inside `ellipse`
#[must_use]
pub fn point_to_ellipse(point: Point, ellipse: &Ellipse) -> bool {
    ellipse.contains(point)
}

/// Checks whether `line` crosses the boundary of `ellipse`
///
/// A segment that's entirely inside the ellipse doesn't cross it.
#[must_use]
pub fn line_to_ellipse(line: &Line, ellipse: &Ellipse) -> bool {
    ellipse.intersects_line(line)
}

/// Returns the points where `line` crosses the boundary of `ellipse`
#[must_use]
pub fn get_line_to_ellipse(line: &Line, ellipse: &Ellipse) -> Vec<Point> {
    ellipse.line_intersections(line)
}

/// Checks whether the areas of `rect` and `ellipse` overlap.
///
/// Shapes that only touch count as overlapping when the touching point is within
/// [`ovalis_data::geometry::SEGMENT_TOLERANCE`] of an edge.
#[must_use]
pub fn rectangle_to_ellipse(rect: &Rectangle, ellipse: &Ellipse) -> bool {
    let rect = rect.normalised();
    if rect.w == 0.0 || rect.h == 0.0 || ellipse.w <= 0.0 || ellipse.h <= 0.0 {
        return false;
    }

    rect.corners().into_iter().any(|corner| ellipse.contains(corner))
        || rect.contains(ellipse.centre())
        || rect
            .edges()
            .iter()
            .any(|edge| ellipse.intersects_line(edge))
}
