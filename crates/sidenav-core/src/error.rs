//! Configuration errors shared by every crate that accepts layout constants.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must lie within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{field} must lie within the viewport")]
    OutsideViewport { field: &'static str },
    #[error("{field} must sit inside the navigation bar")]
    OutsideNavBar { field: &'static str },
}

impl ConfigError {
    /// Checks that `value` is finite and strictly positive.
    pub fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NotPositive { field, value })
        }
    }

    /// Checks that `value` lies within `[min, max]`. NaN is rejected.
    pub fn ensure_in_range(
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    ) -> Result<(), ConfigError> {
        if value >= min && value <= max {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}
