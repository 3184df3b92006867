//! Observed, normal and standard time, and required number of cycles.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, WorkStudyError};
use crate::stats::{descriptive_stats, t_value, ConfidenceLevel, DescriptiveStats};

/// Result of a time study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeStudyResult {
    /// Mean of the accepted observations.
    pub observed_time: f64,
    /// Observed time × rating factor.
    pub normal_time: f64,
    /// Normal time × (1 + allowance/100).
    pub standard_time: f64,
    /// Rating factor applied.
    pub rating_factor: f64,
    /// PF&D allowance applied, in percent.
    pub allowance_pct: f64,
    /// Number of observations rejected (non-positive or non-finite).
    pub rejected: usize,
    /// Statistics of the accepted observations.
    pub stats: DescriptiveStats,
}

fn valid_observations(observations: &[f64]) -> Vec<f64> {
    observations
        .iter()
        .copied()
        .filter(|t| t.is_finite() && *t > 0.0)
        .collect()
}

/// Derives observed, normal and standard time.
///
/// Non-positive and non-finite observations are discarded before
/// averaging. The rating factor is applied as given; a negative factor
/// (possible from raw adjustment sets) yields a negative normal time.
///
/// # Errors
///
/// - [`WorkStudyError::InsufficientData`] if fewer than 2 observations
///   remain after filtering
/// - [`WorkStudyError::OutOfRange`] for a non-finite rating factor or a
///   negative or non-finite allowance
///
/// # Examples
///
/// ```
/// use u_workstudy::time_study::time_study;
///
/// let r = time_study(&[0.50, 0.52, 0.48, 0.50], 1.10, 15.0).unwrap();
/// assert!((r.observed_time - 0.50).abs() < 1e-12);
/// assert!((r.normal_time - 0.55).abs() < 1e-12);
/// assert!((r.standard_time - 0.6325).abs() < 1e-12);
/// ```
pub fn time_study(
    observations: &[f64],
    rating_factor: f64,
    allowance_pct: f64,
) -> Result<TimeStudyResult> {
    if !rating_factor.is_finite() {
        return Err(WorkStudyError::out_of_range(
            "rating_factor",
            rating_factor,
            "a finite number",
        ));
    }
    if !allowance_pct.is_finite() || allowance_pct < 0.0 {
        return Err(WorkStudyError::out_of_range(
            "allowance_pct",
            allowance_pct,
            "allowance >= 0",
        ));
    }

    let valid = valid_observations(observations);
    if valid.len() < 2 {
        return Err(WorkStudyError::InsufficientData {
            required: 2,
            actual: valid.len(),
        });
    }
    if rating_factor <= 0.0 {
        warn!(rating_factor, "non-positive rating factor applied to time study");
    }

    let stats = descriptive_stats(&valid)?;
    let observed_time = stats.mean;
    let normal_time = observed_time * rating_factor;
    let standard_time = normal_time * (1.0 + allowance_pct / 100.0);
    debug!(observed_time, normal_time, standard_time, "time study");

    Ok(TimeStudyResult {
        observed_time,
        normal_time,
        standard_time,
        rating_factor,
        allowance_pct,
        rejected: observations.len() - valid.len(),
        stats,
    })
}

/// Number of cycles needed so the mean lies within `±accuracy` (relative)
/// of the true mean at the given confidence.
///
/// ```text
/// n = ⌈(t · s / (k · x̄))²⌉,   t with n₀ − 1 degrees of freedom
/// ```
///
/// The result is never below the number of valid observations already
/// taken.
///
/// # Errors
///
/// - [`WorkStudyError::InsufficientData`] for fewer than 2 valid observations
/// - [`WorkStudyError::OutOfRange`] if `accuracy ∉ (0, 1)`
///
/// # Examples
///
/// ```
/// use u_workstudy::stats::ConfidenceLevel;
/// use u_workstudy::time_study::required_sample_size;
///
/// let obs = [10.0, 12.0, 11.0, 13.0, 9.0];
/// let n = required_sample_size(&obs, 0.05, ConfidenceLevel::NinetyFive).unwrap();
/// assert_eq!(n, 64);
/// ```
pub fn required_sample_size(
    observations: &[f64],
    accuracy: f64,
    confidence: ConfidenceLevel,
) -> Result<usize> {
    if !accuracy.is_finite() || accuracy <= 0.0 || accuracy >= 1.0 {
        return Err(WorkStudyError::out_of_range(
            "accuracy",
            accuracy,
            "0 < accuracy < 1",
        ));
    }
    let valid = valid_observations(observations);
    let current = valid.len();
    if current < 2 {
        return Err(WorkStudyError::InsufficientData {
            required: 2,
            actual: current,
        });
    }

    let stats = descriptive_stats(&valid)?;
    let t = t_value(confidence, current - 1);
    let ratio = t * stats.std_dev / (accuracy * stats.mean);
    let required = (ratio * ratio).ceil() as usize;
    debug!(current, required, t, "required time-study cycles");
    Ok(required.max(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_study::WestinghouseRating;

    #[test]
    fn filters_invalid_observations() {
        let r = time_study(&[1.0, -2.0, 0.0, f64::NAN, 3.0], 1.0, 0.0).unwrap();
        assert_eq!(r.rejected, 3);
        assert_eq!(r.stats.n, 2);
        assert!((r.observed_time - 2.0).abs() < 1e-12);
        assert!((r.standard_time - 2.0).abs() < 1e-12);
    }

    #[test]
    fn requires_two_valid_observations() {
        assert_eq!(
            time_study(&[1.0, 0.0, -1.0], 1.0, 10.0),
            Err(WorkStudyError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn rejects_negative_allowance() {
        assert!(matches!(
            time_study(&[1.0, 2.0], 1.0, -5.0),
            Err(WorkStudyError::OutOfRange { parameter: "allowance_pct", .. })
        ));
    }

    #[test]
    fn westinghouse_composition() {
        let rating = WestinghouseRating::from_labels("B1", "C1", "C", "C").unwrap();
        // 1 + 0.11 + 0.05 + 0.02 + 0.01 = 1.19
        let r = time_study(&[2.0, 2.0, 2.0], rating.factor(), 10.0).unwrap();
        assert!((r.normal_time - 2.38).abs() < 1e-12);
        assert!((r.standard_time - 2.618).abs() < 1e-12);
    }

    #[test]
    fn negative_factor_is_not_clamped() {
        let r = time_study(&[1.0, 1.0], -0.2, 0.0).unwrap();
        assert!((r.normal_time + 0.2).abs() < 1e-12);
    }

    #[test]
    fn required_size_textbook() {
        // x̄ = 11, s = √2.5, t(0.95, 4) = 2.776 → (2.776·1.5811/0.55)² = 63.69
        let n = required_sample_size(
            &[10.0, 12.0, 11.0, 13.0, 9.0],
            0.05,
            ConfidenceLevel::NinetyFive,
        )
        .unwrap();
        assert_eq!(n, 64);
    }

    #[test]
    fn required_size_floors_at_current_count() {
        let obs = [10.0, 10.01, 10.0, 9.99, 10.0];
        let n = required_sample_size(&obs, 0.05, ConfidenceLevel::Ninety).unwrap();
        assert_eq!(n, 5);
    }

    #[test]
    fn required_size_grows_with_confidence() {
        let obs = [4.2, 3.9, 4.5, 4.0, 4.4, 3.8, 4.1];
        let n90 = required_sample_size(&obs, 0.05, ConfidenceLevel::Ninety).unwrap();
        let n99 = required_sample_size(&obs, 0.05, ConfidenceLevel::NinetyNine).unwrap();
        assert!(n99 >= n90);
    }

    #[test]
    fn required_size_validation() {
        assert!(required_sample_size(&[1.0], 0.05, ConfidenceLevel::NinetyFive).is_err());
        assert!(required_sample_size(&[1.0, 2.0], 0.0, ConfidenceLevel::NinetyFive).is_err());
        assert!(required_sample_size(&[1.0, 2.0], 1.0, ConfidenceLevel::NinetyFive).is_err());
    }
}
