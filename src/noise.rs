//! OSHA occupational noise exposure (29 CFR 1910.95).
//!
//! Uses the 5 dB exchange rate and 90 dB(A) criterion level:
//!
//! ```text
//! T   = 8 / 2^((L − 90) / 5)            allowed hours at level L
//! D   = 100 · Σ Cᵢ / Tᵢ                 dose, percent
//! TWA = 16.61 · log₁₀(D / 100) + 90     8-hour time-weighted average
//! ```
//!
//! Levels below the 80 dB(A) threshold contribute nothing to the dose.
//! Levels above 130 dB(A) are outside the regulation's table and rejected.
//!
//! # References
//!
//! - OSHA 29 CFR 1910.95, Appendix A, Tables G-16 and G-16a.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WorkStudyError};

/// Criterion level, dB(A).
pub const CRITERION_LEVEL: f64 = 90.0;
/// Threshold below which exposure is not counted, dB(A).
pub const THRESHOLD_LEVEL: f64 = 80.0;
/// Highest level with a defined allowed time, dB(A).
pub const CEILING_LEVEL: f64 = 130.0;
/// Exchange rate, dB per halving of allowed time.
pub const EXCHANGE_RATE: f64 = 5.0;

/// One exposure interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseExposure {
    /// Sound level, dB(A).
    pub level: f64,
    /// Duration, hours.
    pub duration: f64,
}

impl NoiseExposure {
    pub fn new(level: f64, duration: f64) -> Self {
        Self { level, duration }
    }
}

/// Contribution of a single exposure to the dose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialDose {
    pub exposure: NoiseExposure,
    /// Allowed hours at this level; `None` below the 80 dB threshold.
    pub allowed_time: Option<f64>,
    /// `100 · C / T`, percent; 0 below the threshold.
    pub dose: f64,
}

/// Dose band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseRisk {
    /// Dose below 50%.
    Safe,
    /// Dose from 50% to 100% inclusive: hearing conservation program required.
    ActionLevel,
    /// Dose above 100%: permissible exposure limit exceeded.
    ExceedsPel,
}

impl NoiseRisk {
    pub fn from_dose(dose: f64) -> Self {
        if dose > 100.0 {
            Self::ExceedsPel
        } else if dose >= 50.0 {
            Self::ActionLevel
        } else {
            Self::Safe
        }
    }
}

/// Result of a dose computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseDoseResult {
    /// Total dose, percent.
    pub dose: f64,
    /// 8-hour TWA, dB(A); 0 when the dose is 0.
    pub twa: f64,
    /// Sum of all exposure durations, hours.
    pub total_duration: f64,
    pub exposures: Vec<PartialDose>,
    pub risk: NoiseRisk,
    pub exceeds_pel: bool,
    pub above_action_level: bool,
}

/// Allowed exposure hours at `level` dB(A).
///
/// # Errors
///
/// [`WorkStudyError::OutOfRange`] if `level ∉ [80, 130]`.
///
/// # Examples
///
/// ```
/// use u_workstudy::noise::allowed_time;
///
/// assert!((allowed_time(90.0).unwrap() - 8.0).abs() < 1e-12);
/// assert!((allowed_time(95.0).unwrap() - 4.0).abs() < 1e-12);
/// assert!((allowed_time(80.0).unwrap() - 32.0).abs() < 1e-12);
/// assert!(allowed_time(79.9).is_err());
/// ```
pub fn allowed_time(level: f64) -> Result<f64> {
    if !level.is_finite() || !(THRESHOLD_LEVEL..=CEILING_LEVEL).contains(&level) {
        return Err(WorkStudyError::out_of_range(
            "level",
            level,
            "80 <= level <= 130 dB(A)",
        ));
    }
    Ok(8.0 / 2f64.powf((level - CRITERION_LEVEL) / EXCHANGE_RATE))
}

/// Sound level whose allowed time is `hours`; the inverse of
/// [`allowed_time`].
///
/// # Errors
///
/// [`WorkStudyError::OutOfRange`] if `hours` is not positive.
pub fn level_from_time(hours: f64) -> Result<f64> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(WorkStudyError::out_of_range("hours", hours, "hours > 0"));
    }
    Ok(CRITERION_LEVEL + EXCHANGE_RATE * (8.0 / hours).log2())
}

/// 8-hour TWA for a dose in percent. Returns 0 for a zero dose.
pub fn twa_from_dose(dose: f64) -> f64 {
    if dose <= 0.0 {
        return 0.0;
    }
    16.61 * (dose / 100.0).log10() + CRITERION_LEVEL
}

/// Dose in percent for an 8-hour TWA; the inverse of [`twa_from_dose`]
/// for positive doses.
pub fn dose_from_twa(twa: f64) -> f64 {
    100.0 * 10f64.powf((twa - CRITERION_LEVEL) / 16.61)
}

/// Computes the cumulative daily dose of a set of exposures.
///
/// # Errors
///
/// - [`WorkStudyError::EmptyExposures`] for an empty list
/// - [`WorkStudyError::LevelAboveCeiling`] if any level exceeds 130 dB(A)
/// - [`WorkStudyError::OutOfRange`] for a negative or non-finite duration
///   or a non-finite level
/// - [`WorkStudyError::ZeroExposureDuration`] if every duration is 0
///
/// # Examples
///
/// ```
/// use u_workstudy::noise::{noise_dose, NoiseExposure, NoiseRisk};
///
/// let r = noise_dose(&[NoiseExposure::new(90.0, 8.0)]).unwrap();
/// assert!((r.dose - 100.0).abs() < 1e-9);
/// assert!((r.twa - 90.0).abs() < 1e-9);
/// assert!(!r.exceeds_pel);
/// assert_eq!(r.risk, NoiseRisk::ActionLevel);
/// ```
pub fn noise_dose(exposures: &[NoiseExposure]) -> Result<NoiseDoseResult> {
    if exposures.is_empty() {
        return Err(WorkStudyError::EmptyExposures);
    }
    for e in exposures {
        if !e.level.is_finite() {
            return Err(WorkStudyError::out_of_range(
                "level",
                e.level,
                "a finite level in dB(A)",
            ));
        }
        if e.level > CEILING_LEVEL {
            return Err(WorkStudyError::LevelAboveCeiling(e.level));
        }
        if !e.duration.is_finite() || e.duration < 0.0 {
            return Err(WorkStudyError::out_of_range(
                "duration",
                e.duration,
                "duration >= 0 hours",
            ));
        }
    }
    let total_duration: f64 = exposures.iter().map(|e| e.duration).sum();
    if total_duration <= 0.0 {
        return Err(WorkStudyError::ZeroExposureDuration);
    }

    let mut partials = Vec::with_capacity(exposures.len());
    for &exposure in exposures {
        let partial = if exposure.level < THRESHOLD_LEVEL {
            PartialDose {
                exposure,
                allowed_time: None,
                dose: 0.0,
            }
        } else {
            let t = allowed_time(exposure.level)?;
            PartialDose {
                exposure,
                allowed_time: Some(t),
                dose: 100.0 * exposure.duration / t,
            }
        };
        partials.push(partial);
    }

    let dose: f64 = partials.iter().map(|p| p.dose).sum();
    let twa = twa_from_dose(dose);
    let risk = NoiseRisk::from_dose(dose);
    debug!(dose, twa, ?risk, "noise dose");

    Ok(NoiseDoseResult {
        dose,
        twa,
        total_duration,
        exposures: partials,
        risk,
        exceeds_pel: dose > 100.0,
        above_action_level: dose >= 50.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osha_table_g16() {
        for (level, hours) in [
            (90.0, 8.0),
            (92.0, 6.06),
            (95.0, 4.0),
            (97.0, 3.03),
            (100.0, 2.0),
            (105.0, 1.0),
            (110.0, 0.5),
            (115.0, 0.25),
        ] {
            let t = allowed_time(level).unwrap();
            assert!((t - hours).abs() < 0.01, "L = {level}: {t}");
        }
    }

    #[test]
    fn level_from_time_rejects_non_positive() {
        assert!(level_from_time(0.0).is_err());
        assert!(level_from_time(-1.0).is_err());
        assert!((level_from_time(2.0).unwrap() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn mixed_exposures() {
        // 4 h at 90 (50%) + 2 h at 95 (50%) + 2 h at 75 (ignored)
        let r = noise_dose(&[
            NoiseExposure::new(90.0, 4.0),
            NoiseExposure::new(95.0, 2.0),
            NoiseExposure::new(75.0, 2.0),
        ])
        .unwrap();
        assert!((r.dose - 100.0).abs() < 1e-9);
        assert!((r.total_duration - 8.0).abs() < 1e-12);
        assert_eq!(r.exposures.len(), 3);
        assert_eq!(r.exposures[2].allowed_time, None);
        assert_eq!(r.exposures[2].dose, 0.0);
        assert!((r.exposures[1].dose - 50.0).abs() < 1e-9);
    }

    #[test]
    fn exceeds_pel() {
        let r = noise_dose(&[NoiseExposure::new(100.0, 4.0)]).unwrap();
        assert!((r.dose - 200.0).abs() < 1e-9);
        assert!((r.twa - (16.61 * 2f64.log10() + 90.0)).abs() < 1e-9);
        assert!(r.exceeds_pel);
        assert_eq!(r.risk, NoiseRisk::ExceedsPel);
    }

    #[test]
    fn quiet_day_has_zero_twa() {
        let r = noise_dose(&[NoiseExposure::new(70.0, 8.0)]).unwrap();
        assert_eq!(r.dose, 0.0);
        assert_eq!(r.twa, 0.0);
        assert_eq!(r.risk, NoiseRisk::Safe);
        assert!(!r.above_action_level);
    }

    #[test]
    fn failures() {
        assert_eq!(noise_dose(&[]), Err(WorkStudyError::EmptyExposures));
        assert_eq!(
            noise_dose(&[NoiseExposure::new(90.0, 0.0)]),
            Err(WorkStudyError::ZeroExposureDuration)
        );
        assert_eq!(
            noise_dose(&[NoiseExposure::new(135.0, 1.0)]),
            Err(WorkStudyError::LevelAboveCeiling(135.0))
        );
        assert!(matches!(
            noise_dose(&[NoiseExposure::new(90.0, -1.0)]),
            Err(WorkStudyError::OutOfRange { parameter: "duration", .. })
        ));
    }

    #[test]
    fn risk_bands() {
        assert_eq!(NoiseRisk::from_dose(49.9), NoiseRisk::Safe);
        assert_eq!(NoiseRisk::from_dose(50.0), NoiseRisk::ActionLevel);
        assert_eq!(NoiseRisk::from_dose(100.0), NoiseRisk::ActionLevel);
        assert_eq!(NoiseRisk::from_dose(100.1), NoiseRisk::ExceedsPel);
    }

    #[test]
    fn repeated_dose_is_identical() {
        let exposures = [
            NoiseExposure::new(92.0, 3.0),
            NoiseExposure::new(87.5, 4.5),
            NoiseExposure::new(78.0, 0.5),
        ];
        let first = noise_dose(&exposures).unwrap();
        let second = noise_dose(&exposures).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.dose.to_bits(), second.dose.to_bits());
        assert_eq!(first.twa.to_bits(), second.twa.to_bits());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn level_time_inverse(level in 80.0_f64..=130.0) {
            let back = level_from_time(allowed_time(level).unwrap()).unwrap();
            prop_assert!((back - level).abs() < 1e-9, "{level} -> {back}");
        }

        #[test]
        fn dose_twa_inverse(dose in 0.01_f64..10_000.0) {
            let back = dose_from_twa(twa_from_dose(dose));
            prop_assert!((back - dose).abs() <= dose * 1e-9, "{dose} -> {back}");
        }

        #[test]
        fn allowed_time_decreasing(a in 80.0_f64..129.0, step in 0.01_f64..1.0) {
            prop_assert!(allowed_time(a + step).unwrap() < allowed_time(a).unwrap());
        }
    }
}
