#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum Error {
    #[error("The {field} of a shape must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Passes `value` through if it's finite, otherwise names the offending field.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { field, value })
    }
}
