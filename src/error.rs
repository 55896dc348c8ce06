//! Error taxonomy for the crate.
//!
//! All fallible constructors and solvers return [`GeometryError`] through
//! the crate-wide [`Result`] alias. Validation happens at construction time,
//! so every live `Point2` or `Triangle` upholds its invariants and the
//! derived-quantity accessors are infallible.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{what} must be finite, got a NaN or infinite value")]
    NonFinite { what: &'static str },

    #[error("{what} must be positive, got {value}")]
    NonPositiveLength { what: &'static str, value: f64 },

    #[error("sides ({a}, {b}, {c}) violate the triangle inequality")]
    TriangleInequality { a: f64, b: f64, c: f64 },

    #[error("{what} must lie strictly inside (0°, 180°), got {value}°")]
    InvalidAngle { what: &'static str, value: f64 },

    #[error("angles sum to {sum}°, expected 180°")]
    AngleSum { sum: f64 },

    #[error("no triangle satisfies the given data: {reason}")]
    NoSolution { reason: &'static str },

    #[error("{what} requires at least one element")]
    EmptyInput { what: &'static str },
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Validates that a value is finite, tagging the error with `what`.
pub(crate) fn check_finite(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { what })
    }
}

/// Validates that a length is finite and strictly positive.
pub(crate) fn check_positive(what: &'static str, value: f64) -> Result<f64> {
    check_finite(what, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositiveLength { what, value })
    }
}

/// Validates that an angle in degrees lies strictly inside (0, 180).
pub(crate) fn check_angle(what: &'static str, value: f64) -> Result<f64> {
    check_finite(what, value)?;
    if value > 0.0 && value < 180.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidAngle { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_check() {
        assert!(check_finite("x", 1.0).is_ok());
        assert!(check_finite("x", f64::NAN).is_err());
        assert!(check_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_positive_check() {
        assert!(check_positive("side a", 3.0).is_ok());
        assert_eq!(
            check_positive("side a", 0.0),
            Err(GeometryError::NonPositiveLength {
                what: "side a",
                value: 0.0
            })
        );
        assert!(check_positive("side a", -1.0).is_err());
    }

    #[test]
    fn test_angle_check() {
        assert!(check_angle("angle A", 60.0).is_ok());
        assert!(check_angle("angle A", 0.0).is_err());
        assert!(check_angle("angle A", 180.0).is_err());
        assert!(check_angle("angle A", f64::NAN).is_err());
    }
}
