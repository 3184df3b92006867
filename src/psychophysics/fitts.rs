//! Fitts' Law (Shannon formulation).
//!
//! ```text
//! ID = log₂(D/W + 1)         bits
//! MT = a + b · ID            milliseconds
//! TP = mean(ID) / mean(MT)   bits per second
//! ```
//!
//! The regression is fitted to the mean movement time of each difficulty
//! level rather than to raw trials, which removes most trial-to-trial
//! noise. Missed targets are excluded from timing and reported as the
//! error rate.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WorkStudyError};
use crate::random::shuffle;
use crate::stats::linear_regression;

/// Index of difficulty, `log₂(D/W + 1)` bits.
///
/// # Errors
///
/// [`WorkStudyError::OutOfRange`] if `distance < 0` or `width <= 0`.
///
/// # Examples
///
/// ```
/// use u_workstudy::psychophysics::index_of_difficulty;
///
/// assert!((index_of_difficulty(256.0, 32.0).unwrap() - 9f64.log2()).abs() < 1e-12);
/// assert_eq!(index_of_difficulty(0.0, 10.0).unwrap(), 0.0);
/// ```
pub fn index_of_difficulty(distance: f64, width: f64) -> Result<f64> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(WorkStudyError::out_of_range(
            "distance",
            distance,
            "distance >= 0",
        ));
    }
    if !width.is_finite() || width <= 0.0 {
        return Err(WorkStudyError::out_of_range("width", width, "width > 0"));
    }
    Ok((distance / width + 1.0).log2())
}

/// One pointing trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittsTrial {
    pub distance: f64,
    pub width: f64,
    pub index_of_difficulty: f64,
    /// Recorded movement time; `None` until the trial is run.
    pub movement_time_ms: Option<f64>,
    /// Whether the target was hit; `None` until the trial is run.
    pub hit: Option<bool>,
}

impl FittsTrial {
    /// Creates a pending trial.
    pub fn new(distance: f64, width: f64) -> Result<Self> {
        Ok(Self {
            distance,
            width,
            index_of_difficulty: index_of_difficulty(distance, width)?,
            movement_time_ms: None,
            hit: None,
        })
    }

    /// Records the outcome of the trial.
    pub fn record(&mut self, movement_time_ms: f64, hit: bool) {
        self.movement_time_ms = Some(movement_time_ms);
        self.hit = Some(hit);
    }

    /// Whether an outcome has been recorded.
    pub fn is_complete(&self) -> bool {
        self.movement_time_ms.is_some() && self.hit.is_some()
    }
}

/// Trial plan: every distance × width combination, repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittsPlan {
    distances: Vec<f64>,
    widths: Vec<f64>,
    repetitions: usize,
}

impl FittsPlan {
    /// Creates a plan with one repetition per combination.
    ///
    /// # Errors
    ///
    /// - [`WorkStudyError::InsufficientData`] if either list is empty
    /// - [`WorkStudyError::OutOfRange`] for a negative distance or
    ///   non-positive width
    pub fn new(distances: &[f64], widths: &[f64]) -> Result<Self> {
        for list in [distances, widths] {
            if list.is_empty() {
                return Err(WorkStudyError::InsufficientData {
                    required: 1,
                    actual: 0,
                });
            }
        }
        for &d in distances {
            for &w in widths {
                index_of_difficulty(d, w)?;
            }
        }
        Ok(Self {
            distances: distances.to_vec(),
            widths: widths.to_vec(),
            repetitions: 1,
        })
    }

    /// Sets the number of repetitions per combination (at least 1).
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions.max(1);
        self
    }

    /// Total number of trials the plan generates.
    pub fn trial_count(&self) -> usize {
        self.distances.len() * self.widths.len() * self.repetitions
    }

    /// Generates the trials in random order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<FittsTrial> {
        let mut trials = Vec::with_capacity(self.trial_count());
        for &distance in &self.distances {
            for &width in &self.widths {
                let id = (distance / width + 1.0).log2();
                for _ in 0..self.repetitions {
                    trials.push(FittsTrial {
                        distance,
                        width,
                        index_of_difficulty: id,
                        movement_time_ms: None,
                        hit: None,
                    });
                }
            }
        }
        shuffle(&mut trials, rng);
        trials
    }
}

/// Mean movement time of one difficulty level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBucket {
    pub index_of_difficulty: f64,
    pub mean_movement_time_ms: f64,
    /// Hit trials in this bucket.
    pub trials: usize,
}

/// Result of a Fitts' Law analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittsAnalysis {
    /// Regression intercept `a`, ms.
    pub intercept_ms: f64,
    /// Regression slope `b`, ms per bit.
    pub slope_ms_per_bit: f64,
    /// R² of the bucket-mean regression.
    pub r_squared: f64,
    /// Mean ID / mean MT, bits per second.
    pub throughput_bps: f64,
    /// Missed / completed trials.
    pub error_rate: f64,
    /// Mean movement time of hit trials, ms.
    pub mean_movement_time_ms: f64,
    /// Mean ID of hit trials, bits.
    pub mean_index_of_difficulty: f64,
    /// Trials with a recorded outcome.
    pub completed_trials: usize,
    /// Per-difficulty means, ascending by ID.
    pub buckets: Vec<DifficultyBucket>,
}

/// Bucket key; IDs equal to 1e-9 bits share a bucket.
fn bucket_key(id: f64) -> i64 {
    (id * 1e9).round() as i64
}

/// Analyzes a completed (or partially completed) trial sequence.
///
/// Pending trials are ignored.
///
/// # Errors
///
/// - [`WorkStudyError::InsufficientData`] if no trial is complete, or if
///   the hit trials span fewer than 2 difficulty levels
/// - [`WorkStudyError::OutOfRange`] for a non-positive or non-finite
///   recorded movement time
///
/// # Examples
///
/// ```
/// use u_workstudy::psychophysics::{analyze_fitts, FittsTrial};
///
/// let mut trials = Vec::new();
/// for (d, w) in [(64.0, 64.0), (192.0, 64.0), (448.0, 64.0)] {
///     let mut t = FittsTrial::new(d, w).unwrap();
///     // MT = 100 + 150·ID
///     t.record(100.0 + 150.0 * t.index_of_difficulty, true);
///     trials.push(t);
/// }
/// let r = analyze_fitts(&trials).unwrap();
/// assert!((r.slope_ms_per_bit - 150.0).abs() < 1e-9);
/// assert!((r.intercept_ms - 100.0).abs() < 1e-9);
/// assert_eq!(r.error_rate, 0.0);
/// ```
pub fn analyze_fitts(trials: &[FittsTrial]) -> Result<FittsAnalysis> {
    let completed: Vec<&FittsTrial> = trials.iter().filter(|t| t.is_complete()).collect();
    if completed.is_empty() {
        return Err(WorkStudyError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let mut hits = Vec::with_capacity(completed.len());
    let mut misses = 0usize;
    for t in &completed {
        let mt = t.movement_time_ms.unwrap_or(f64::NAN);
        if !mt.is_finite() || mt <= 0.0 {
            return Err(WorkStudyError::out_of_range(
                "movement_time_ms",
                mt,
                "movement time > 0",
            ));
        }
        if t.hit == Some(true) {
            hits.push((t.index_of_difficulty, mt));
        } else {
            misses += 1;
        }
    }

    let mut groups: BTreeMap<i64, (f64, f64, usize)> = BTreeMap::new();
    for &(id, mt) in &hits {
        let entry = groups.entry(bucket_key(id)).or_insert((id, 0.0, 0));
        entry.1 += mt;
        entry.2 += 1;
    }
    if groups.len() < 2 {
        return Err(WorkStudyError::InsufficientData {
            required: 2,
            actual: groups.len(),
        });
    }

    let buckets: Vec<DifficultyBucket> = groups
        .into_values()
        .map(|(id, sum, n)| DifficultyBucket {
            index_of_difficulty: id,
            mean_movement_time_ms: sum / n as f64,
            trials: n,
        })
        .collect();
    let ids: Vec<f64> = buckets.iter().map(|b| b.index_of_difficulty).collect();
    let mts: Vec<f64> = buckets.iter().map(|b| b.mean_movement_time_ms).collect();
    let fit = linear_regression(&ids, &mts)?;

    let n_hits = hits.len() as f64;
    let mean_id = hits.iter().map(|(id, _)| id).sum::<f64>() / n_hits;
    let mean_mt = hits.iter().map(|(_, mt)| mt).sum::<f64>() / n_hits;
    let throughput_bps = mean_id / (mean_mt / 1000.0);
    let error_rate = misses as f64 / completed.len() as f64;
    debug!(
        a = fit.intercept,
        b = fit.slope,
        throughput_bps,
        error_rate,
        "Fitts analysis"
    );

    Ok(FittsAnalysis {
        intercept_ms: fit.intercept,
        slope_ms_per_bit: fit.slope,
        r_squared: fit.r_squared,
        throughput_bps,
        error_rate,
        mean_movement_time_ms: mean_mt,
        mean_index_of_difficulty: mean_id,
        completed_trials: completed.len(),
        buckets,
    })
}
