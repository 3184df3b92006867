//! Work sampling: sample size, error limit, and random observation times.
//!
//! Work sampling estimates the proportion `p` of time spent in an activity
//! from `n` instantaneous observations. For a confidence coefficient `z`
//! and absolute error limit `l`:
//!
//! ```text
//! n = ⌈z² · p(1 − p) / l²⌉
//! l = z · √(p(1 − p) / n)
//! ```
//!
//! # References
//!
//! - Barnes, R.M. (1980). *Motion and Time Study*, 7th ed., Chapter 29.
//! - Niebel & Freivalds (2014). *Methods, Standards, and Work Design*, 13th ed.

use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WorkStudyError};

/// Upper bound on generated observation times per call.
pub const MAX_OBSERVATIONS: usize = 10_000;

/// Confidence interval `p ± l` for an observed proportion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionInterval {
    /// Lower bound, clamped at 0.
    pub lower: f64,
    /// Upper bound, clamped at 1.
    pub upper: f64,
    /// Half-width `l` before clamping.
    pub error_limit: f64,
}

/// A random observation instant, expressed in fractional hours of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationTime {
    /// Hours since midnight, e.g. `13.5` for 13:30.
    pub hours: f64,
}

impl ObservationTime {
    /// Whole hour of the day.
    pub fn hour(&self) -> u32 {
        self.hours.floor() as u32
    }

    /// Whole minute within the hour.
    pub fn minute(&self) -> u32 {
        ((self.hours.fract() * 60.0).floor() as u32).min(59)
    }
}

fn check_proportion(p: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(WorkStudyError::out_of_range("p", p, "0 <= p <= 1"));
    }
    Ok(())
}

fn check_z(z: f64) -> Result<()> {
    if !z.is_finite() || z <= 0.0 {
        return Err(WorkStudyError::out_of_range("z", z, "z > 0"));
    }
    Ok(())
}

/// Number of observations needed to estimate `p` within `±l`.
///
/// Returns 0 when `p` is 0 or 1: a proportion with no variance needs no
/// sampling.
///
/// # Errors
///
/// [`WorkStudyError::OutOfRange`] naming the first invalid argument when
/// `p ∉ [0, 1]`, `z ≤ 0` or `l ∉ (0, 1]`.
///
/// # Examples
///
/// ```
/// use u_workstudy::work_sampling::sample_size;
///
/// assert_eq!(sample_size(0.5, 1.96, 0.05).unwrap(), 385);
/// assert_eq!(sample_size(0.0, 1.96, 0.05).unwrap(), 0);
/// ```
pub fn sample_size(p: f64, z: f64, l: f64) -> Result<u64> {
    check_proportion(p)?;
    check_z(z)?;
    if !l.is_finite() || l <= 0.0 || l > 1.0 {
        return Err(WorkStudyError::out_of_range("l", l, "0 < l <= 1"));
    }
    if p == 0.0 || p == 1.0 {
        return Ok(0);
    }

    let n = (z * z * p * (1.0 - p) / (l * l)).ceil() as u64;
    debug!(p, z, l, n, "work sampling size");
    Ok(n)
}

/// Absolute error limit achieved by `n` observations.
///
/// # Errors
///
/// [`WorkStudyError::OutOfRange`] when `p ∉ [0, 1]`, `z ≤ 0` or `n = 0`.
///
/// # Examples
///
/// ```
/// use u_workstudy::work_sampling::error_limit;
///
/// let l = error_limit(0.5, 1.96, 385).unwrap();
/// assert!(l <= 0.05);
/// assert!(l > 0.0499);
/// ```
pub fn error_limit(p: f64, z: f64, n: u64) -> Result<f64> {
    check_proportion(p)?;
    check_z(z)?;
    if n == 0 {
        return Err(WorkStudyError::out_of_range("n", 0.0, "n >= 1"));
    }
    Ok(z * (p * (1.0 - p) / n as f64).sqrt())
}

/// Confidence interval for an observed proportion.
///
/// # Errors
///
/// Same as [`error_limit`].
pub fn proportion_interval(p: f64, z: f64, n: u64) -> Result<ProportionInterval> {
    let l = error_limit(p, z, n)?;
    Ok(ProportionInterval {
        lower: (p - l).max(0.0),
        upper: (p + l).min(1.0),
        error_limit: l,
    })
}

/// Generates `count` uniformly distributed observation instants in
/// `[start_hour, end_hour)`, sorted ascending.
///
/// # Errors
///
/// [`WorkStudyError::OutOfRange`] when `count` is 0 or above
/// [`MAX_OBSERVATIONS`], when either hour lies outside `[0, 24]`, or when
/// `start_hour >= end_hour`.
///
/// # Examples
///
/// ```
/// use u_workstudy::random::create_rng;
/// use u_workstudy::work_sampling::random_observation_times;
///
/// let times = random_observation_times(20, 8.0, 17.0, &mut create_rng(3)).unwrap();
/// assert_eq!(times.len(), 20);
/// assert!(times.windows(2).all(|w| w[0].hours <= w[1].hours));
/// assert!(times.iter().all(|t| t.hours >= 8.0 && t.hours < 17.0));
/// ```
pub fn random_observation_times<R: Rng>(
    count: usize,
    start_hour: f64,
    end_hour: f64,
    rng: &mut R,
) -> Result<Vec<ObservationTime>> {
    if count == 0 || count > MAX_OBSERVATIONS {
        return Err(WorkStudyError::out_of_range(
            "count",
            count as f64,
            "1 <= count <= 10000",
        ));
    }
    for (name, hour) in [("start_hour", start_hour), ("end_hour", end_hour)] {
        if !hour.is_finite() || !(0.0..=24.0).contains(&hour) {
            return Err(WorkStudyError::out_of_range(name, hour, "0 <= hour <= 24"));
        }
    }
    if start_hour >= end_hour {
        return Err(WorkStudyError::out_of_range(
            "start_hour",
            start_hour,
            "start_hour < end_hour",
        ));
    }

    let mut times: Vec<ObservationTime> = (0..count)
        .map(|_| ObservationTime {
            hours: rng.random_range(start_hour..end_hour),
        })
        .collect();
    times.sort_by(|a, b| a.hours.total_cmp(&b.hours));
    Ok(times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn classic_sample_size() {
        assert_eq!(sample_size(0.5, 1.96, 0.05).unwrap(), 385);
    }

    #[test]
    fn degenerate_proportions_need_no_samples() {
        assert_eq!(sample_size(0.0, 2.576, 0.01).unwrap(), 0);
        assert_eq!(sample_size(1.0, 2.576, 0.01).unwrap(), 0);
    }

    #[test]
    fn rejects_each_argument() {
        assert!(matches!(
            sample_size(1.2, 1.96, 0.05),
            Err(WorkStudyError::OutOfRange { parameter: "p", .. })
        ));
        assert!(matches!(
            sample_size(0.5, 0.0, 0.05),
            Err(WorkStudyError::OutOfRange { parameter: "z", .. })
        ));
        assert!(matches!(
            sample_size(0.5, 1.96, 0.0),
            Err(WorkStudyError::OutOfRange { parameter: "l", .. })
        ));
        assert!(matches!(
            sample_size(0.5, 1.96, 1.5),
            Err(WorkStudyError::OutOfRange { parameter: "l", .. })
        ));
        assert!(matches!(
            error_limit(0.5, 1.96, 0),
            Err(WorkStudyError::OutOfRange { parameter: "n", .. })
        ));
    }

    #[test]
    fn interval_is_clamped() {
        let ci = proportion_interval(0.02, 1.96, 30).unwrap();
        assert_eq!(ci.lower, 0.0);
        assert!(ci.upper > 0.02);
        assert!((ci.upper - (0.02 + ci.error_limit)).abs() < 1e-15);
    }

    #[test]
    fn observation_time_accessors() {
        let t = ObservationTime { hours: 13.75 };
        assert_eq!(t.hour(), 13);
        assert_eq!(t.minute(), 45);
    }

    #[test]
    fn observation_times_reproducible_with_seed() {
        let a = random_observation_times(50, 6.0, 14.0, &mut create_rng(11)).unwrap();
        let b = random_observation_times(50, 6.0, 14.0, &mut create_rng(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn observation_times_validation() {
        let mut rng = create_rng(0);
        assert!(random_observation_times(0, 8.0, 17.0, &mut rng).is_err());
        assert!(random_observation_times(10_001, 8.0, 17.0, &mut rng).is_err());
        assert!(random_observation_times(5, 17.0, 8.0, &mut rng).is_err());
        assert!(random_observation_times(5, 8.0, 8.0, &mut rng).is_err());
        assert!(random_observation_times(5, 8.0, 25.0, &mut rng).is_err());
        assert_eq!(
            random_observation_times(MAX_OBSERVATIONS, 0.0, 24.0, &mut rng)
                .unwrap()
                .len(),
            MAX_OBSERVATIONS
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn error_limit_of_sample_size_within_bound(
            p in 0.01_f64..0.99,
            z in 1.0_f64..3.0,
            l in 0.005_f64..0.5,
        ) {
            let n = sample_size(p, z, l).unwrap();
            let achieved = error_limit(p, z, n).unwrap();
            prop_assert!(achieved <= l * (1.0 + 1e-12), "l = {l}, achieved = {achieved}, n = {n}");
        }

        #[test]
        fn sample_size_grows_as_limit_shrinks(
            p in 0.0_f64..=1.0,
            z in 1.0_f64..3.0,
            l1 in 0.01_f64..0.5,
            shrink in 0.1_f64..1.0,
        ) {
            let l2 = l1 * shrink;
            prop_assert!(sample_size(p, z, l2).unwrap() >= sample_size(p, z, l1).unwrap());
        }

        #[test]
        fn sample_size_grows_with_confidence(
            p in 0.0_f64..=1.0,
            l in 0.01_f64..0.5,
        ) {
            let n90 = sample_size(p, 1.645, l).unwrap();
            let n95 = sample_size(p, 1.96, l).unwrap();
            let n99 = sample_size(p, 2.576, l).unwrap();
            prop_assert!(n90 <= n95 && n95 <= n99);
        }

        #[test]
        fn error_limit_strictly_decreasing_in_n(
            p in 0.01_f64..0.99,
            z in 1.0_f64..3.0,
            n in 1_u64..100_000,
        ) {
            prop_assert!(error_limit(p, z, n + 1).unwrap() < error_limit(p, z, n).unwrap());
        }
    }
}
