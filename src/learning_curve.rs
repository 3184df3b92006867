//! Learning curves (power-law unit-time model).
//!
//! The time of the x-th unit follows a power law:
//!
//! ```text
//! y = a · x^b,     b = log₂(r),     r = learning rate
//! ```
//!
//! An 80% curve (b ≈ −0.3219) means each doubling of cumulative output
//! cuts the unit time to 80% of its previous value.
//!
//! Two fitting methods are provided:
//!
//! - [`two_point_method`]: closed form from two observations
//! - [`regression_method`]: least squares on `(ln x, ln y)`
//!
//! # References
//!
//! - Wright, T.P. (1936). "Factors Affecting the Cost of Airplanes",
//!   *Journal of the Aeronautical Sciences* 3(4), pp. 122–128.
//! - Yelle, L.E. (1979). "The Learning Curve: Historical Review and
//!   Comprehensive Survey", *Decision Sciences* 10(2), pp. 302–328.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WorkStudyError};
use crate::stats::linear_regression;

/// Units summed exactly by [`cumulative_time`] before switching to the
/// integral approximation.
pub const EXACT_SUM_CAP: u64 = 1_000;

/// A fitted power-law learning curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningCurve {
    /// Time of the first unit (`a`).
    pub first_unit_time: f64,
    /// Learning exponent (`b`), negative when times improve.
    pub exponent: f64,
    /// `2^b · 100`, rounded to two decimals.
    pub learning_rate_pct: f64,
}

impl LearningCurve {
    /// Builds a curve from `a` and `b`.
    pub fn new(first_unit_time: f64, exponent: f64) -> Self {
        Self {
            first_unit_time,
            exponent,
            learning_rate_pct: learning_rate_pct(exponent),
        }
    }

    /// Predicted time of unit `cycle`.
    ///
    /// # Errors
    ///
    /// [`WorkStudyError::NonPositiveCycle`] if `cycle <= 0`.
    pub fn predict(&self, cycle: f64) -> Result<f64> {
        predict_time_at_cycle(cycle, self.first_unit_time, self.exponent)
    }

    /// Total time of units `1..=n`.
    pub fn cumulative_time(&self, n: u64) -> Result<f64> {
        cumulative_time(n, self.first_unit_time, self.exponent)
    }
}

/// Least-squares learning curve with fit diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionCurve {
    pub curve: LearningCurve,
    /// R² of the log-log fit.
    pub r_squared: f64,
    /// Standard error of estimate in log space.
    pub standard_error: f64,
    /// Number of points.
    pub n: usize,
}

/// Learning rate in percent, `2^b · 100`, rounded to two decimals.
///
/// # Examples
///
/// ```
/// use u_workstudy::learning_curve::learning_rate_pct;
///
/// assert_eq!(learning_rate_pct(0.8_f64.log2()), 80.0);
/// assert_eq!(learning_rate_pct(0.0), 100.0);
/// ```
pub fn learning_rate_pct(exponent: f64) -> f64 {
    (2f64.powf(exponent) * 100.0 * 100.0).round() / 100.0
}

/// Exponent `b = log₂(rate / 100)` for a learning rate in percent.
///
/// # Errors
///
/// [`WorkStudyError::OutOfRange`] if `rate_pct` is not positive.
pub fn exponent_from_rate(rate_pct: f64) -> Result<f64> {
    if !rate_pct.is_finite() || rate_pct <= 0.0 {
        return Err(WorkStudyError::out_of_range(
            "rate_pct",
            rate_pct,
            "rate > 0 percent",
        ));
    }
    Ok((rate_pct / 100.0).log2())
}

/// Fits a curve through two observations `(x1, y1)` and `(x2, y2)`.
///
/// ```text
/// b = ln(y2/y1) / ln(x2/x1)
/// a = y1 / x1^b
/// ```
///
/// # Errors
///
/// Checked in this order, each with its own variant:
///
/// 1. [`WorkStudyError::NonPositiveCycle`]: `x1 <= 0` or `x2 <= 0`
/// 2. [`WorkStudyError::NonPositiveTime`]: `y1 <= 0` or `y2 <= 0`
/// 3. [`WorkStudyError::IdenticalCycles`]: `x1 == x2`
/// 4. [`WorkStudyError::CyclesOutOfOrder`]: `x2 < x1`
/// 5. [`WorkStudyError::NoImprovement`]: `y2 >= y1`
///
/// # Examples
///
/// ```
/// use u_workstudy::learning_curve::two_point_method;
///
/// let c = two_point_method(50.0, 20.0, 100.0, 16.0).unwrap();
/// assert!((c.exponent + 0.3219).abs() < 1e-4);
/// assert_eq!(c.learning_rate_pct, 80.0);
/// ```
pub fn two_point_method(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<LearningCurve> {
    if !(x1.is_finite() && x2.is_finite()) || x1 <= 0.0 || x2 <= 0.0 {
        return Err(WorkStudyError::NonPositiveCycle);
    }
    if !(y1.is_finite() && y2.is_finite()) || y1 <= 0.0 || y2 <= 0.0 {
        return Err(WorkStudyError::NonPositiveTime);
    }
    if x1 == x2 {
        return Err(WorkStudyError::IdenticalCycles);
    }
    if x2 < x1 {
        return Err(WorkStudyError::CyclesOutOfOrder);
    }
    if y2 >= y1 {
        return Err(WorkStudyError::NoImprovement);
    }

    let b = (y2 / y1).ln() / (x2 / x1).ln();
    let a = y1 / x1.powf(b);
    debug!(a, b, "two-point learning curve");
    Ok(LearningCurve::new(a, b))
}

/// Fits a curve to many observations by least squares on `(ln x, ln y)`.
///
/// # Errors
///
/// - [`WorkStudyError::LengthMismatch`] if the slices differ in length
/// - [`WorkStudyError::InsufficientData`] for fewer than 2 points
/// - [`WorkStudyError::NonPositiveCycle`] / [`WorkStudyError::NonPositiveTime`]
///   for any non-positive value
/// - [`WorkStudyError::ZeroVariance`] if every cycle number is identical
///
/// # Examples
///
/// ```
/// use u_workstudy::learning_curve::regression_method;
///
/// let cycles = [1.0, 2.0, 4.0, 8.0];
/// let times = [100.0, 80.0, 64.0, 51.2];
/// let fit = regression_method(&cycles, &times).unwrap();
/// assert_eq!(fit.curve.learning_rate_pct, 80.0);
/// assert!((fit.curve.first_unit_time - 100.0).abs() < 1e-9);
/// assert!((fit.r_squared - 1.0).abs() < 1e-12);
/// ```
pub fn regression_method(cycles: &[f64], times: &[f64]) -> Result<RegressionCurve> {
    if cycles.len() != times.len() {
        return Err(WorkStudyError::LengthMismatch {
            left: cycles.len(),
            right: times.len(),
        });
    }
    if cycles.len() < 2 {
        return Err(WorkStudyError::InsufficientData {
            required: 2,
            actual: cycles.len(),
        });
    }
    if cycles.iter().any(|&x| !x.is_finite() || x <= 0.0) {
        return Err(WorkStudyError::NonPositiveCycle);
    }
    if times.iter().any(|&y| !y.is_finite() || y <= 0.0) {
        return Err(WorkStudyError::NonPositiveTime);
    }

    let ln_x: Vec<f64> = cycles.iter().map(|x| x.ln()).collect();
    let ln_y: Vec<f64> = times.iter().map(|y| y.ln()).collect();
    let fit = linear_regression(&ln_x, &ln_y)?;

    let curve = LearningCurve::new(fit.intercept.exp(), fit.slope);
    debug!(
        a = curve.first_unit_time,
        b = curve.exponent,
        r2 = fit.r_squared,
        "regression learning curve"
    );
    Ok(RegressionCurve {
        curve,
        r_squared: fit.r_squared,
        standard_error: fit.standard_error,
        n: fit.n,
    })
}

/// Predicted time of unit `cycle`, `a · cycle^b`.
///
/// # Errors
///
/// [`WorkStudyError::NonPositiveCycle`] if `cycle <= 0`.
pub fn predict_time_at_cycle(cycle: f64, first_unit_time: f64, exponent: f64) -> Result<f64> {
    if !cycle.is_finite() || cycle <= 0.0 {
        return Err(WorkStudyError::NonPositiveCycle);
    }
    Ok(first_unit_time * cycle.powf(exponent))
}

/// Total time of units `1..=n`.
///
/// Sums exactly up to [`EXACT_SUM_CAP`] units; beyond that the remaining
/// units are approximated by the integral of `a·x^b` over
/// `[cap + ½, n + ½]`.
///
/// # Errors
///
/// [`WorkStudyError::NonPositiveCycle`] if `n == 0`.
///
/// # Examples
///
/// ```
/// use u_workstudy::learning_curve::cumulative_time;
///
/// let b = 0.8_f64.log2();
/// // 100 + 80 + 70.21 + 64
/// let total = cumulative_time(4, 100.0, b).unwrap();
/// assert!((total - 314.21).abs() < 0.01);
/// ```
pub fn cumulative_time(n: u64, first_unit_time: f64, exponent: f64) -> Result<f64> {
    if n == 0 {
        return Err(WorkStudyError::NonPositiveCycle);
    }
    let exact_units = n.min(EXACT_SUM_CAP);
    let exact: f64 = (1..=exact_units)
        .map(|i| first_unit_time * (i as f64).powf(exponent))
        .sum();
    if n <= EXACT_SUM_CAP {
        return Ok(exact);
    }

    let lo = EXACT_SUM_CAP as f64 + 0.5;
    let hi = n as f64 + 0.5;
    let tail = if (exponent + 1.0).abs() < 1e-12 {
        first_unit_time * (hi / lo).ln()
    } else {
        let p = exponent + 1.0;
        first_unit_time / p * (hi.powf(p) - lo.powf(p))
    };
    Ok(exact + tail)
}

/// Average time per unit over the first `n` units.
pub fn average_time(n: u64, first_unit_time: f64, exponent: f64) -> Result<f64> {
    Ok(cumulative_time(n, first_unit_time, exponent)? / n as f64)
}

/// Cycle number at which the unit time first falls to `target_time`.
///
/// Returns 1 when the first unit already meets the target.
///
/// # Errors
///
/// [`WorkStudyError::OutOfRange`] if `target_time` or `first_unit_time` is
/// not positive, or if the exponent is not negative (the target is never
/// reached).
pub fn cycles_to_reach(target_time: f64, first_unit_time: f64, exponent: f64) -> Result<f64> {
    if !target_time.is_finite() || target_time <= 0.0 {
        return Err(WorkStudyError::out_of_range(
            "target_time",
            target_time,
            "target > 0",
        ));
    }
    if !first_unit_time.is_finite() || first_unit_time <= 0.0 {
        return Err(WorkStudyError::out_of_range(
            "first_unit_time",
            first_unit_time,
            "first unit time > 0",
        ));
    }
    if target_time >= first_unit_time {
        return Ok(1.0);
    }
    if !exponent.is_finite() || exponent >= 0.0 {
        return Err(WorkStudyError::out_of_range(
            "exponent",
            exponent,
            "exponent < 0",
        ));
    }
    Ok((target_time / first_unit_time).powf(1.0 / exponent))
}
