//! Descriptive statistics.
//!
//! Mean (Kahan summation) and sample standard deviation (Welford, `n − 1`
//! denominator) come from `u_numflow::stats`. This module adds the
//! guards the calculators rely on: a single value has zero spread and a
//! zero mean has a zero coefficient of variation.

use serde::{Deserialize, Serialize};
use u_numflow::stats;

use crate::error::{Result, WorkStudyError};

/// Summary statistics of a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Sample size.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator); 0 when n = 1.
    pub std_dev: f64,
    /// Coefficient of variation, std_dev / |mean|; 0 when the mean is 0.
    pub coefficient_of_variation: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// max − min.
    pub range: f64,
}

/// Computes mean, standard deviation, coefficient of variation and range.
///
/// A single value yields `std_dev = 0`; a zero mean yields a coefficient
/// of variation of 0 rather than a division by zero.
///
/// # Errors
///
/// - [`WorkStudyError::InsufficientData`] if `values` is empty
/// - [`WorkStudyError::OutOfRange`] if any value is NaN or infinite
///
/// # Examples
///
/// ```
/// use u_workstudy::stats::descriptive_stats;
///
/// let s = descriptive_stats(&[10.0, 12.0, 14.0]).unwrap();
/// assert!((s.mean - 12.0).abs() < 1e-12);
/// assert!((s.std_dev - 2.0).abs() < 1e-12);
/// assert!((s.range - 4.0).abs() < 1e-12);
/// ```
pub fn descriptive_stats(values: &[f64]) -> Result<DescriptiveStats> {
    if values.is_empty() {
        return Err(WorkStudyError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(WorkStudyError::out_of_range("values", bad, "finite numbers"));
    }

    let n = values.len();
    let insufficient = WorkStudyError::InsufficientData {
        required: 1,
        actual: n,
    };
    let mean = stats::mean(values).ok_or_else(|| insufficient.clone())?;
    let min = stats::min(values).ok_or_else(|| insufficient.clone())?;
    let max = stats::max(values).ok_or(insufficient)?;
    let std_dev = stats::std_dev(values).unwrap_or(0.0);
    let coefficient_of_variation = if mean.abs() > f64::EPSILON {
        std_dev / mean.abs()
    } else {
        0.0
    };

    Ok(DescriptiveStats {
        n,
        mean,
        std_dev,
        coefficient_of_variation,
        min,
        max,
        range: max - min,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_has_zero_spread() {
        let s = descriptive_stats(&[7.5]).unwrap();
        assert_eq!(s.n, 1);
        assert!((s.mean - 7.5).abs() < 1e-15);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.coefficient_of_variation, 0.0);
        assert_eq!(s.range, 0.0);
    }

    #[test]
    fn zero_mean_guards_cv() {
        let s = descriptive_stats(&[-1.0, 1.0]).unwrap();
        assert!(s.mean.abs() < 1e-15);
        assert!(s.std_dev > 0.0);
        assert_eq!(s.coefficient_of_variation, 0.0);
    }

    #[test]
    fn coefficient_of_variation() {
        let s = descriptive_stats(&[8.0, 10.0, 12.0]).unwrap();
        assert!((s.coefficient_of_variation - 0.2).abs() < 1e-12);
        assert_eq!(s.min, 8.0);
        assert_eq!(s.max, 12.0);
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(
            descriptive_stats(&[]),
            Err(WorkStudyError::InsufficientData {
                required: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn nan_input_fails() {
        assert!(matches!(
            descriptive_stats(&[1.0, f64::NAN]),
            Err(WorkStudyError::OutOfRange { parameter: "values", .. })
        ));
    }

    #[test]
    fn spread_matches_welford_reference() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = descriptive_stats(&v).unwrap();
        assert_eq!(Some(s.mean), stats::mean(&v));
        assert_eq!(Some(s.std_dev), stats::std_dev(&v));
        assert!((s.std_dev - 2.138089935299395).abs() < 1e-12);
        assert_eq!((s.min, s.max), (2.0, 9.0));
    }
}
