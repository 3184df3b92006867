//! Simple linear regression by ordinary least squares.
//!
//! # Algorithm
//!
//! ```text
//! β₁ = Σ(xᵢ − x̄)(yᵢ − ȳ) / Σ(xᵢ − x̄)²
//! β₀ = ȳ − β₁·x̄
//! R² = 1 − SSE/SST            (0 when SST = 0)
//! Sₑ = √(SSE / (n − 2))       (0 when n = 2)
//! ```
//!
//! Reference: Draper & Smith (1998), *Applied Regression Analysis*, 3rd ed.

use serde::{Deserialize, Serialize};
use u_numflow::stats;

use crate::error::{Result, WorkStudyError};

/// Result of fitting `y = intercept + slope · x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Slope coefficient (β₁).
    pub slope: f64,
    /// Intercept (β₀).
    pub intercept: f64,
    /// Coefficient of determination. Reported as 0 when y has no variance.
    pub r_squared: f64,
    /// Standard error of estimate, √(SSE/(n−2)). 0 for exactly two points.
    pub standard_error: f64,
    /// Number of points.
    pub n: usize,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fits a least-squares line through `(x[i], y[i])`.
///
/// # Errors
///
/// - [`WorkStudyError::LengthMismatch`] if the slices differ in length
/// - [`WorkStudyError::InsufficientData`] for fewer than 2 points
/// - [`WorkStudyError::OutOfRange`] for NaN or infinite inputs
/// - [`WorkStudyError::ZeroVariance`] if every x is identical
///
/// # Examples
///
/// ```
/// use u_workstudy::stats::linear_regression;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0];
/// let fit = linear_regression(&x, &y).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-10);
/// assert!(fit.intercept.abs() < 1e-10);
/// assert!((fit.r_squared - 1.0).abs() < 1e-10);
/// ```
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(WorkStudyError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(WorkStudyError::InsufficientData {
            required: 2,
            actual: n,
        });
    }
    if let Some(&bad) = x.iter().chain(y.iter()).find(|v| !v.is_finite()) {
        return Err(WorkStudyError::out_of_range(
            "regression input",
            bad,
            "finite numbers",
        ));
    }

    let nf = n as f64;
    let insufficient = || WorkStudyError::InsufficientData {
        required: 2,
        actual: n,
    };
    let x_mean = stats::mean(x).ok_or_else(insufficient)?;
    let y_mean = stats::mean(y).ok_or_else(insufficient)?;
    let x_var = stats::variance(x).ok_or_else(insufficient)?;
    let y_var = stats::variance(y).ok_or_else(insufficient)?;
    let cov = stats::covariance(x, y).ok_or_else(insufficient)?;

    if x_var < 1e-300 {
        return Err(WorkStudyError::ZeroVariance);
    }

    let slope = cov / x_var;
    let intercept = y_mean - slope * x_mean;

    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let r = yi - (intercept + slope * xi);
            r * r
        })
        .sum();

    let ss_tot = y_var * (nf - 1.0);
    let r_squared = if ss_tot > 1e-300 {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let standard_error = if n > 2 {
        (ss_res / (nf - 2.0)).sqrt()
    } else {
        0.0
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
        standard_error,
        n,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn r_squared_bounded(
            pts in proptest::collection::vec((-1e3_f64..1e3, -1e3_f64..1e3), 3..=30)
        ) {
            let (x, y): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
            if let Ok(fit) = linear_regression(&x, &y) {
                prop_assert!((0.0..=1.0).contains(&fit.r_squared), "R² = {}", fit.r_squared);
            }
        }

        #[test]
        fn recovers_exact_line(
            slope in -50.0_f64..50.0,
            intercept in -50.0_f64..50.0,
        ) {
            let x: Vec<f64> = (0..10).map(f64::from).collect();
            let y: Vec<f64> = x.iter().map(|&xi| intercept + slope * xi).collect();
            let fit = linear_regression(&x, &y).unwrap();
            prop_assert!((fit.slope - slope).abs() < 1e-8);
            prop_assert!((fit.intercept - intercept).abs() < 1e-8);
        }
    }
}
