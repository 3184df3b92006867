//! Stroop color-word interference task.
//!
//! Each trial shows a color word printed in an ink color. The subject
//! names the ink. Three conditions are distinguished:
//!
//! - **Congruent**: word and ink match ("RED" in red)
//! - **Incongruent**: word and ink differ ("RED" in blue)
//! - **Neutral**: a non-color string ("XXXX") in some ink
//!
//! Interference is the mean reaction-time cost of incongruent trials
//! over congruent ones. Facilitation is the benefit of congruent trials
//! over neutral ones. Only correct responses enter the reaction-time
//! statistics.

use std::fmt;

use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WorkStudyError};
use crate::random::shuffle;
use crate::stats::descriptive_stats;

/// Stimulus label shown on neutral trials.
pub const NEUTRAL_WORD: &str = "XXXX";

/// Colors used for words and inks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StroopColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl StroopColor {
    /// All colors, in a fixed order.
    pub const ALL: [StroopColor; 4] = [Self::Red, Self::Green, Self::Blue, Self::Yellow];

    /// Upper-case word for the color.
    pub fn word(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Yellow => "YELLOW",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Yellow => 3,
        }
    }
}

impl fmt::Display for StroopColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Trial condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StroopCondition {
    Congruent,
    Incongruent,
    Neutral,
}

/// One Stroop trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StroopTrial {
    /// Color word shown; `None` for the neutral stimulus.
    pub word: Option<StroopColor>,
    pub ink: StroopColor,
    pub condition: StroopCondition,
    /// Ink color named by the subject; `None` until the trial is run.
    pub response: Option<StroopColor>,
    /// Reaction time; `None` until the trial is run.
    pub reaction_time_ms: Option<f64>,
}

impl StroopTrial {
    /// Creates a pending trial, deriving the condition from word and ink.
    pub fn new(word: Option<StroopColor>, ink: StroopColor) -> Self {
        let condition = match word {
            None => StroopCondition::Neutral,
            Some(w) if w == ink => StroopCondition::Congruent,
            Some(_) => StroopCondition::Incongruent,
        };
        Self {
            word,
            ink,
            condition,
            response: None,
            reaction_time_ms: None,
        }
    }

    /// Text displayed to the subject.
    pub fn stimulus_text(&self) -> &'static str {
        self.word.map_or(NEUTRAL_WORD, StroopColor::word)
    }

    /// Records the subject's response.
    pub fn record(&mut self, response: StroopColor, reaction_time_ms: f64) {
        self.response = Some(response);
        self.reaction_time_ms = Some(reaction_time_ms);
    }

    pub fn is_complete(&self) -> bool {
        self.response.is_some() && self.reaction_time_ms.is_some()
    }

    /// Whether the response names the ink. `false` for pending trials.
    pub fn is_correct(&self) -> bool {
        self.response == Some(self.ink)
    }
}

/// Trial plan: a fixed number of trials per condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StroopPlan {
    trials_per_condition: usize,
    include_neutral: bool,
}

impl StroopPlan {
    /// Creates a plan with congruent, incongruent and neutral trials.
    pub fn new(trials_per_condition: usize) -> Self {
        Self {
            trials_per_condition,
            include_neutral: true,
        }
    }

    /// Enables or disables the neutral condition.
    pub fn with_neutral(mut self, include: bool) -> Self {
        self.include_neutral = include;
        self
    }

    pub fn trial_count(&self) -> usize {
        let conditions = if self.include_neutral { 3 } else { 2 };
        self.trials_per_condition * conditions
    }

    /// Generates the trials in random order.
    ///
    /// Inks are drawn uniformly. Incongruent words are drawn uniformly
    /// from the colors other than the ink.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<StroopTrial> {
        let colors = StroopColor::ALL;
        let mut trials = Vec::with_capacity(self.trial_count());
        for _ in 0..self.trials_per_condition {
            let ink = colors[rng.random_range(0..colors.len())];
            trials.push(StroopTrial::new(Some(ink), ink));

            let ink = colors[rng.random_range(0..colors.len())];
            let mut other = rng.random_range(0..colors.len() - 1);
            if other >= ink.index() {
                other += 1;
            }
            trials.push(StroopTrial::new(Some(colors[other]), ink));

            if self.include_neutral {
                let ink = colors[rng.random_range(0..colors.len())];
                trials.push(StroopTrial::new(None, ink));
            }
        }
        shuffle(&mut trials, rng);
        trials
    }
}

/// Summary of one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionStats {
    pub condition: StroopCondition,
    /// Completed trials.
    pub trials: usize,
    /// Correct responses.
    pub correct: usize,
    /// `correct / trials`; 0 when there are no trials.
    pub accuracy: f64,
    /// Mean RT of correct trials.
    pub mean_rt_ms: Option<f64>,
    /// Sample SD of correct-trial RT (0 with a single trial).
    pub sd_rt_ms: Option<f64>,
}

/// Result of a Stroop analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StroopAnalysis {
    pub congruent: ConditionStats,
    pub incongruent: ConditionStats,
    pub neutral: ConditionStats,
    /// Incongruent − congruent mean RT.
    pub interference_ms: Option<f64>,
    /// Neutral − congruent mean RT.
    pub facilitation_ms: Option<f64>,
    pub overall_accuracy: f64,
    pub completed_trials: usize,
}

fn condition_stats(
    trials: &[&StroopTrial],
    condition: StroopCondition,
) -> Result<ConditionStats> {
    let subset: Vec<&&StroopTrial> = trials
        .iter()
        .filter(|t| t.condition == condition)
        .collect();
    let rts: Vec<f64> = subset
        .iter()
        .filter(|t| t.is_correct())
        .filter_map(|t| t.reaction_time_ms)
        .collect();
    let correct = rts.len();
    let (mean_rt_ms, sd_rt_ms) = if rts.is_empty() {
        (None, None)
    } else {
        let stats = descriptive_stats(&rts)?;
        (Some(stats.mean), Some(stats.std_dev))
    };
    let accuracy = if subset.is_empty() {
        0.0
    } else {
        correct as f64 / subset.len() as f64
    };
    Ok(ConditionStats {
        condition,
        trials: subset.len(),
        correct,
        accuracy,
        mean_rt_ms,
        sd_rt_ms,
    })
}

fn difference(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some(a? - b?)
}

/// Analyzes a Stroop session. Pending trials are ignored.
///
/// # Errors
///
/// - [`WorkStudyError::InsufficientData`] if no trial is complete
/// - [`WorkStudyError::OutOfRange`] for a non-positive or non-finite
///   reaction time
///
/// # Examples
///
/// ```
/// use u_workstudy::psychophysics::{analyze_stroop, StroopColor::*, StroopTrial};
///
/// let mut c = StroopTrial::new(Some(Red), Red);
/// c.record(Red, 600.0);
/// let mut i = StroopTrial::new(Some(Blue), Red);
/// i.record(Red, 750.0);
/// let r = analyze_stroop(&[c, i]).unwrap();
/// assert_eq!(r.interference_ms, Some(150.0));
/// assert_eq!(r.facilitation_ms, None);
/// ```
pub fn analyze_stroop(trials: &[StroopTrial]) -> Result<StroopAnalysis> {
    let completed: Vec<&StroopTrial> = trials.iter().filter(|t| t.is_complete()).collect();
    if completed.is_empty() {
        return Err(WorkStudyError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    for t in &completed {
        let rt = t.reaction_time_ms.unwrap_or(f64::NAN);
        if !rt.is_finite() || rt <= 0.0 {
            return Err(WorkStudyError::out_of_range(
                "reaction_time_ms",
                rt,
                "reaction time > 0",
            ));
        }
    }

    let congruent = condition_stats(&completed, StroopCondition::Congruent)?;
    let incongruent = condition_stats(&completed, StroopCondition::Incongruent)?;
    let neutral = condition_stats(&completed, StroopCondition::Neutral)?;
    let interference_ms = difference(incongruent.mean_rt_ms, congruent.mean_rt_ms);
    let facilitation_ms = difference(neutral.mean_rt_ms, congruent.mean_rt_ms);
    let correct = congruent.correct + incongruent.correct + neutral.correct;
    let overall_accuracy = correct as f64 / completed.len() as f64;
    debug!(
        ?interference_ms,
        ?facilitation_ms,
        overall_accuracy,
        "Stroop analysis"
    );

    Ok(StroopAnalysis {
        congruent,
        incongruent,
        neutral,
        interference_ms,
        facilitation_ms,
        overall_accuracy,
        completed_trials: completed.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use super::StroopColor::*;

    #[test]
    fn condition_is_derived() {
        let congruent = StroopTrial::new(Some(Red), Red);
        assert_eq!(congruent.condition, StroopCondition::Congruent);
        let incongruent = StroopTrial::new(Some(Red), Blue);
        assert_eq!(incongruent.condition, StroopCondition::Incongruent);
        let n = StroopTrial::new(None, Green);
        assert_eq!(n.condition, StroopCondition::Neutral);
        assert_eq!(n.stimulus_text(), "XXXX");
        assert_eq!(StroopTrial::new(Some(Yellow), Red).stimulus_text(), "YELLOW");
    }

    #[test]
    fn plan_balances_conditions() {
        let trials = StroopPlan::new(20).generate(&mut create_rng(3));
        assert_eq!(trials.len(), 60);
        for condition in [
            StroopCondition::Congruent,
            StroopCondition::Incongruent,
            StroopCondition::Neutral,
        ] {
            let count = trials.iter().filter(|t| t.condition == condition).count();
            assert_eq!(count, 20);
        }
        for t in &trials {
            match t.condition {
                StroopCondition::Congruent => assert_eq!(t.word, Some(t.ink)),
                StroopCondition::Incongruent => {
                    assert!(t.word.is_some() && t.word != Some(t.ink))
                }
                StroopCondition::Neutral => assert_eq!(t.word, None),
            }
        }
    }

    #[test]
    fn plan_without_neutral() {
        let plan = StroopPlan::new(5).with_neutral(false);
        assert_eq!(plan.trial_count(), 10);
        let trials = plan.generate(&mut create_rng(1));
        assert!(trials.iter().all(|t| t.condition != StroopCondition::Neutral));
    }

    #[test]
    fn analysis_excludes_errors_from_rt() {
        let mut trials = vec![
            StroopTrial::new(Some(Red), Red),
            StroopTrial::new(Some(Blue), Blue),
            StroopTrial::new(Some(Green), Red),
            StroopTrial::new(Some(Red), Green),
            StroopTrial::new(None, Yellow),
            StroopTrial::new(None, Red),
        ];
        trials[0].record(Red, 500.0);
        trials[1].record(Blue, 600.0);
        trials[2].record(Red, 700.0);
        // Named the word instead of the ink.
        trials[3].record(Red, 300.0);
        trials[4].record(Yellow, 620.0);
        // trials[5] left pending.

        let r = analyze_stroop(&trials).unwrap();
        assert_eq!(r.completed_trials, 5);
        assert_eq!(r.congruent.trials, 2);
        assert_eq!(r.congruent.mean_rt_ms, Some(550.0));
        assert_eq!(r.incongruent.trials, 2);
        assert_eq!(r.incongruent.correct, 1);
        assert!((r.incongruent.accuracy - 0.5).abs() < 1e-12);
        assert_eq!(r.incongruent.mean_rt_ms, Some(700.0));
        assert_eq!(r.incongruent.sd_rt_ms, Some(0.0));
        assert_eq!(r.interference_ms, Some(150.0));
        assert_eq!(r.facilitation_ms, Some(70.0));
        assert!((r.overall_accuracy - 0.8).abs() < 1e-12);
    }

    #[test]
    fn missing_condition_yields_none() {
        let mut t = StroopTrial::new(Some(Red), Blue);
        t.record(Green, 800.0);
        let r = analyze_stroop(&[t]).unwrap();
        assert_eq!(r.incongruent.mean_rt_ms, None);
        assert_eq!(r.congruent.accuracy, 0.0);
        assert_eq!(r.interference_ms, None);
        assert_eq!(r.overall_accuracy, 0.0);
    }

    #[test]
    fn errors() {
        assert!(analyze_stroop(&[]).is_err());
        assert!(analyze_stroop(&[StroopTrial::new(None, Red)]).is_err());
        let mut t = StroopTrial::new(None, Red);
        t.record(Red, 0.0);
        assert!(matches!(
            analyze_stroop(&[t]),
            Err(WorkStudyError::OutOfRange { parameter: "reaction_time_ms", .. })
        ));
    }
}
