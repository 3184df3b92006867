//! Stopwatch time study.
//!
//! Converts repeated cycle observations into a standard time:
//!
//! ```text
//! observed  = mean(valid observations)
//! normal    = observed × rating factor
//! standard  = normal × (1 + allowance% / 100)
//! ```
//!
//! The rating factor is usually composed from the Westinghouse
//! skill/effort/conditions/consistency system ([`WestinghouseRating`]).
//!
//! # References
//!
//! - Lowry, Maynard & Stegemerten (1940). *Time and Motion Study and
//!   Formulas for Wage Incentives*, 3rd ed.
//! - Niebel & Freivalds (2014). *Methods, Standards, and Work Design*,
//!   13th ed., Chapters 10–11.

mod study;
mod westinghouse;

pub use study::{required_sample_size, time_study, TimeStudyResult};
pub use westinghouse::{
    composite_factor, westinghouse_factor, ConditionGrade, PerformanceGrade, WestinghouseRating,
};
