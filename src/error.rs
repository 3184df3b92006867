//! Error type shared by every calculator.
//!
//! Failures are precondition violations only: each variant names the
//! offending parameter so the caller can surface a precise message.
//! Degenerate-but-valid inputs (zero margin, zero variance in R²) are
//! reported through result flags instead.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WorkStudyError>;

/// Precondition violations raised by the calculators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkStudyError {
    #[error("invalid confidence level '{0}': expected one of 90%, 95%, 99%")]
    InvalidConfidenceLevel(String),

    #[error("insufficient data: at least {required} values required, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("{parameter} = {value} is out of range: expected {expected}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("input lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("predictor has zero variance; regression slope is undefined")]
    ZeroVariance,

    #[error("invalid {factor} grade '{grade}'")]
    InvalidRating { factor: &'static str, grade: String },

    #[error("no noise exposures supplied")]
    EmptyExposures,

    #[error("total exposure duration is zero")]
    ZeroExposureDuration,

    #[error("noise level {0} dB exceeds the 130 dB table ceiling")]
    LevelAboveCeiling(f64),

    #[error("cycle numbers must be positive")]
    NonPositiveCycle,

    #[error("cycle times must be positive")]
    NonPositiveTime,

    #[error("the two cycle numbers must differ")]
    IdenticalCycles,

    #[error("the second cycle number must be greater than the first")]
    CyclesOutOfOrder,

    #[error("the later cycle time must be lower than the earlier one (no improvement observed)")]
    NoImprovement,
}

impl WorkStudyError {
    pub(crate) fn out_of_range(
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    ) -> Self {
        Self::OutOfRange {
            parameter,
            value,
            expected,
        }
    }
}
