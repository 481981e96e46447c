pub mod intersects;
pub mod logging;
pub mod sampling;

pub use ovalis_data::{
    geometry::{Ellipse, Frame, Line, Point, Rectangle, SEGMENT_TOLERANCE},
    Error,
};
pub use sampling::Sampler;
