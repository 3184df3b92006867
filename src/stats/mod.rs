//! Statistical primitives shared by the calculators.
//!
//! - [`descriptive_stats`]: mean, sample standard deviation, coefficient of
//!   variation and range, with explicit guards for n = 1 and mean = 0
//! - [`linear_regression`]: closed-form least squares with R² and standard
//!   error of estimate
//! - [`ConfidenceLevel`], [`z_value`], [`t_value`]: fixed critical-value tables
//! - [`LookupTable`]: sorted breakpoint table with clamped linear interpolation
//!
//! # References
//!
//! - Welford (1962), "Note on a Method for Calculating Corrected Sums of
//!   Squares and Products", *Technometrics* 4(3).
//! - Draper & Smith (1998), *Applied Regression Analysis*, 3rd ed.

mod confidence;
mod descriptive;
mod regression;
mod table;

pub use confidence::{t_value, z_value, ConfidenceLevel};
pub use descriptive::{descriptive_stats, DescriptiveStats};
pub use regression::{linear_regression, LinearFit};
pub use table::LookupTable;
