//! Error types for sampling operations.
//!
//! Every failure is reported synchronously to the caller; no sampler returns
//! a partial sample. Internal consistency violations (a returned sample whose
//! length differs from the requested size) are defects and panic in debug
//! builds instead of surfacing here.

use thiserror::Error;

/// Errors raised by the random source provider and the samplers.
///
/// # Examples
/// ```
/// use sampling_core::SamplingError;
///
/// let err = SamplingError::SizeMismatch { expected: 5, allocated: 4 };
/// assert_eq!(
///     err.to_string(),
///     "Size mismatch: group sizes sum to 4, expected 5"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// A bound, step, size or population was unusable.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Proportional rounding across groups did not add up to the requested size.
    #[error("Size mismatch: group sizes sum to {allocated}, expected {expected}")]
    SizeMismatch {
        /// Requested total sample size.
        expected: usize,
        /// Sum of the per-group sizes after rounding.
        allocated: usize,
    },
}

impl SamplingError {
    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias for sampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SamplingError::invalid_argument("step", "must be positive");
        assert_eq!(err.to_string(), "Invalid argument 'step': must be positive");
    }

    #[test]
    fn test_size_mismatch_fields() {
        let err = SamplingError::SizeMismatch {
            expected: 3,
            allocated: 2,
        };
        assert!(err.to_string().contains("sum to 2"));
        assert!(err.to_string().contains("expected 3"));
    }
}
