pub mod error;
pub mod geometry;

pub use error::Error;
