//! Error types for shape construction.

use thiserror::Error;

/// Errors raised while constructing shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A numeric parameter was outside its valid range.
    ///
    /// Raised when a radius or a circle precision is not strictly positive.
    #[error("invalid parameter `{parameter}`: {value} (must be > 0)")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A polygon would need more sides than [`MAX_SIDES`](crate::shape::MAX_SIDES).
    ///
    /// Raised for very fine circle precisions and very large side counts,
    /// whose paths could not be allocated.
    #[error("`{parameter}` requires {sides} sides, more than the limit of {limit}")]
    TooManySides {
        /// Name of the parameter that determined the side count.
        parameter: &'static str,
        /// The side count that was asked for.
        sides: f64,
        limit: u32,
    },
}

impl Error {
    /// Checks that `value` is strictly positive, returning it unchanged.
    ///
    /// NaN is rejected as well.
    pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<f64, Self> {
        if value > 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidParameter { parameter, value })
        }
    }

    /// Checks that a side count, computed as `f64`, fits under
    /// [`MAX_SIDES`](crate::shape::MAX_SIDES).
    pub(crate) fn require_side_count(parameter: &'static str, sides: f64) -> Result<u32, Self> {
        let limit = crate::shape::MAX_SIDES;
        if sides <= f64::from(limit) {
            Ok(sides as u32)
        } else {
            Err(Self::TooManySides {
                parameter,
                sides,
                limit,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(Error::require_positive("radius", 1e-6), Ok(1e-6));
        assert!(Error::require_positive("radius", 0.0).is_err());
        assert!(Error::require_positive("radius", -1.0).is_err());
        assert!(Error::require_positive("radius", f64::NAN).is_err());
    }

    #[test]
    fn test_require_side_count() {
        let limit = crate::shape::MAX_SIDES;
        assert_eq!(Error::require_side_count("sides", 126.0), Ok(126));
        assert_eq!(Error::require_side_count("sides", f64::from(limit)), Ok(limit));
        assert!(matches!(
            Error::require_side_count("precision", 62_831_853_072.0),
            Err(Error::TooManySides {
                parameter: "precision",
                ..
            })
        ));
    }

    #[test]
    fn test_error_message() {
        let err = Error::InvalidParameter {
            parameter: "precision",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "invalid parameter `precision`: 0 (must be > 0)");
    }
}
