//! Error types for the analytics pipeline.

use thiserror::Error;

/// Coarse classification of an [`AnalyticsError`].
///
/// Every pipeline failure is currently an input problem; warm-up windows and
/// degenerate windows are absorbed as placeholders and never surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("series is empty")]
    EmptySeries,

    #[error("price at index {index} must be finite and positive, got {price}")]
    NonPositivePrice { index: usize, price: f64 },

    #[error("series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("stress value {0} is outside [0, 100]")]
    StressOutOfRange(f64),

    #[error("series has zero variance, correlation is undefined")]
    ZeroVariance,

    #[error("value at index {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("window size must be at least 1")]
    InvalidWindow,

    #[error("need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("dates must align with prices and be strictly increasing: {0}")]
    InvalidDates(String),
}

impl AnalyticsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalyticsError::EmptySeries
            | AnalyticsError::NonPositivePrice { .. }
            | AnalyticsError::LengthMismatch { .. }
            | AnalyticsError::StressOutOfRange(_)
            | AnalyticsError::ZeroVariance
            | AnalyticsError::NonFiniteValue { .. }
            | AnalyticsError::InvalidWindow
            | AnalyticsError::InsufficientData { .. }
            | AnalyticsError::InvalidDates(_) => ErrorKind::InvalidInput,
        }
    }
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Fails with [`AnalyticsError::LengthMismatch`] unless both lengths agree.
pub(crate) fn ensure_same_len(left: usize, right: usize) -> AnalyticsResult<()> {
    if left != right {
        return Err(AnalyticsError::LengthMismatch { left, right });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_is_invalid_input() {
        let errors = [
            AnalyticsError::EmptySeries,
            AnalyticsError::NonPositivePrice {
                index: 3,
                price: -1.0,
            },
            AnalyticsError::LengthMismatch { left: 2, right: 3 },
            AnalyticsError::StressOutOfRange(101.0),
            AnalyticsError::ZeroVariance,
            AnalyticsError::NonFiniteValue {
                index: 0,
                value: f64::NAN,
            },
            AnalyticsError::InvalidWindow,
            AnalyticsError::InsufficientData {
                required: 2,
                actual: 1,
            },
            AnalyticsError::InvalidDates("unsorted".to_string()),
        ];
        for error in errors {
            assert_eq!(error.kind(), ErrorKind::InvalidInput, "{error}");
        }
    }

    #[test]
    fn messages_name_the_offending_value() {
        let error = AnalyticsError::NonPositivePrice {
            index: 4,
            price: 0.0,
        };
        assert_eq!(
            error.to_string(),
            "price at index 4 must be finite and positive, got 0"
        );
        assert!(ensure_same_len(3, 3).is_ok());
        assert_eq!(
            ensure_same_len(3, 4),
            Err(AnalyticsError::LengthMismatch { left: 3, right: 4 })
        );
    }
}
