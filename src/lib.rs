//! # u-workstudy
//!
//! Industrial-engineering and ergonomics calculators: work measurement,
//! occupational risk assessment, cost analysis and human-performance
//! experiments.
//!
//! Every calculation is a pure function (or a small value type with
//! builder configuration) over plain `f64` data. Randomness is injected
//! through a caller-supplied [`rand::Rng`] so that experiments and
//! observation schedules are reproducible from a seed.
//!
//! ## Modules
//!
//! - [`stats`]: Descriptive statistics, simple regression, z/t critical values
//! - [`work_sampling`]: Sample size, error limit, random observation schedules
//! - [`time_study`]: Normal/standard time, Westinghouse rating, required cycles
//! - [`niosh`]: Revised NIOSH Lifting Equation (RWL, LI, multipliers)
//! - [`noise`]: OSHA noise dose and TWA
//! - [`learning_curve`]: Wright learning curve fitting and prediction
//! - [`economics`]: Break-even and Pareto analysis
//! - [`psychophysics`]: Fitts' Law and Stroop experiments
//! - [`random`]: Seeded RNG and shuffling
//!
//! ## Conventions
//!
//! - Invalid input is reported through [`WorkStudyError`]; the few
//!   operations that always produce a verdict (break-even, NIOSH) encode
//!   problems in their result instead.
//! - Diagnostics are emitted with `tracing`; the crate never installs a
//!   subscriber.

pub mod economics;
pub mod error;
pub mod learning_curve;
pub mod niosh;
pub mod noise;
pub mod psychophysics;
pub mod random;
pub mod stats;
pub mod time_study;
pub mod work_sampling;

pub use error::{Result, WorkStudyError};
