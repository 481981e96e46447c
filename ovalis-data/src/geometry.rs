mod ellipse;
mod line;
mod point;
mod rectangle;

pub use ellipse::*;
pub use line::*;
pub use point::*;
pub use rectangle::*;

/// A record that is laid out as `x`, `y`, `width`, `height`.
///
/// Shapes implementing this can have their fields copied between each other without caring
/// about what the fields mean for the concrete shape (a corner for [`Rectangle`], the centre
/// for [`Ellipse`]).
pub trait Frame {
    /// Returns `(x, y, width, height)`
    fn frame(&self) -> (f64, f64, f64, f64);

    fn set_frame(&mut self, x: f64, y: f64, w: f64, h: f64);
}
