//! Cost-volume-profit and Pareto analysis.
//!
//! - [`calculate_break_even`]: break-even and target-profit volume
//! - [`ParetoAnalysis`]: ranked cumulative contribution with vital-few split
//!
//! Neither calculator fails: a non-positive contribution margin and an
//! empty item list are ordinary outcomes reported through the result.

mod break_even;
mod pareto;

pub use break_even::{calculate_break_even, BreakEvenInput, BreakEvenResult};
pub use pareto::{
    analyze_pareto, ParetoAnalysis, ParetoItem, ParetoResult, RankedItem, DEFAULT_THRESHOLD,
};
