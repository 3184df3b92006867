//! Psychophysics experiments: Fitts' Law pointing and the Stroop task.
//!
//! Both follow the same lifecycle. A plan generates a shuffled trial
//! sequence from an injected random source. The collecting session owns
//! the sequence and records each response in place. The analyzer then
//! reads the sequence and reduces it to a single result.
//!
//! # References
//!
//! - Fitts, P.M. (1954). "The information capacity of the human motor
//!   system in controlling the amplitude of movement", *Journal of
//!   Experimental Psychology* 47(6), pp. 381–391.
//! - MacKenzie, I.S. (1992). "Fitts' law as a research and design tool in
//!   human-computer interaction", *Human-Computer Interaction* 7(1).
//! - Stroop, J.R. (1935). "Studies of interference in serial verbal
//!   reactions", *Journal of Experimental Psychology* 18(6), pp. 643–662.

mod fitts;
mod stroop;

pub use fitts::{
    analyze_fitts, index_of_difficulty, DifficultyBucket, FittsAnalysis, FittsPlan, FittsTrial,
};
pub use stroop::{
    analyze_stroop, ConditionStats, StroopAnalysis, StroopColor, StroopCondition, StroopPlan,
    StroopTrial, NEUTRAL_WORD,
};
