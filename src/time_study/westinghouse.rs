//! Westinghouse (Lowry-Maynard-Stegemerten) leveling system.
//!
//! Each of the four factors is graded on a letter scale and mapped to a
//! signed adjustment. The rating factor is `1 + Σ adjustments`.
//!
//! | Grade | Skill | Effort | | Grade | Conditions | Consistency |
//! |-------|-------|--------|-|-------|------------|-------------|
//! | A1 | +0.15 | +0.13 | | A | +0.06 | +0.04 |
//! | A2 | +0.13 | +0.12 | | B | +0.04 | +0.03 |
//! | B1 | +0.11 | +0.10 | | C | +0.02 | +0.01 |
//! | B2 | +0.08 | +0.08 | | D |  0.00 |  0.00 |
//! | C1 | +0.06 | +0.05 | | E | −0.03 | −0.02 |
//! | C2 | +0.03 | +0.02 | | F | −0.07 | −0.04 |
//! | D  |  0.00 |  0.00 | | | | |
//! | E1 | −0.05 | −0.04 | | | | |
//! | E2 | −0.10 | −0.08 | | | | |
//! | F1 | −0.16 | −0.12 | | | | |
//! | F2 | −0.22 | −0.17 | | | | |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkStudyError};

/// Grade on the eleven-step skill/effort scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceGrade {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    D,
    E1,
    E2,
    F1,
    F2,
}

/// Grade on the six-step conditions/consistency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl PerformanceGrade {
    /// Skill adjustment for this grade.
    pub fn skill_adjustment(self) -> f64 {
        match self {
            Self::A1 => 0.15,
            Self::A2 => 0.13,
            Self::B1 => 0.11,
            Self::B2 => 0.08,
            Self::C1 => 0.06,
            Self::C2 => 0.03,
            Self::D => 0.0,
            Self::E1 => -0.05,
            Self::E2 => -0.10,
            Self::F1 => -0.16,
            Self::F2 => -0.22,
        }
    }

    /// Effort adjustment for this grade.
    pub fn effort_adjustment(self) -> f64 {
        match self {
            Self::A1 => 0.13,
            Self::A2 => 0.12,
            Self::B1 => 0.10,
            Self::B2 => 0.08,
            Self::C1 => 0.05,
            Self::C2 => 0.02,
            Self::D => 0.0,
            Self::E1 => -0.04,
            Self::E2 => -0.08,
            Self::F1 => -0.12,
            Self::F2 => -0.17,
        }
    }
}

impl ConditionGrade {
    /// Working-conditions adjustment for this grade.
    pub fn conditions_adjustment(self) -> f64 {
        match self {
            Self::A => 0.06,
            Self::B => 0.04,
            Self::C => 0.02,
            Self::D => 0.0,
            Self::E => -0.03,
            Self::F => -0.07,
        }
    }

    /// Consistency adjustment for this grade.
    pub fn consistency_adjustment(self) -> f64 {
        match self {
            Self::A => 0.04,
            Self::B => 0.03,
            Self::C => 0.01,
            Self::D => 0.0,
            Self::E => -0.02,
            Self::F => -0.04,
        }
    }
}

impl FromStr for PerformanceGrade {
    type Err = WorkStudyError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "A1" => Self::A1,
            "A2" => Self::A2,
            "B1" => Self::B1,
            "B2" => Self::B2,
            "C1" => Self::C1,
            "C2" => Self::C2,
            "D" => Self::D,
            "E1" => Self::E1,
            "E2" => Self::E2,
            "F1" => Self::F1,
            "F2" => Self::F2,
            _ => {
                return Err(WorkStudyError::InvalidRating {
                    factor: "performance",
                    grade: s.to_string(),
                })
            }
        })
    }
}

impl FromStr for ConditionGrade {
    type Err = WorkStudyError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            "D" => Self::D,
            "E" => Self::E,
            "F" => Self::F,
            _ => {
                return Err(WorkStudyError::InvalidRating {
                    factor: "condition",
                    grade: s.to_string(),
                })
            }
        })
    }
}

/// A complete Westinghouse rating.
///
/// # Examples
///
/// ```
/// use u_workstudy::time_study::WestinghouseRating;
///
/// let rating = WestinghouseRating::from_labels("C1", "C2", "D", "B").unwrap();
/// // 1 + 0.06 + 0.02 + 0.00 + 0.03
/// assert!((rating.factor() - 1.11).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WestinghouseRating {
    pub skill: PerformanceGrade,
    pub effort: PerformanceGrade,
    pub conditions: ConditionGrade,
    pub consistency: ConditionGrade,
}

impl WestinghouseRating {
    /// Average rating: every factor at grade D, factor 1.0.
    pub const AVERAGE: Self = Self {
        skill: PerformanceGrade::D,
        effort: PerformanceGrade::D,
        conditions: ConditionGrade::D,
        consistency: ConditionGrade::D,
    };

    /// Parses the four grade labels.
    ///
    /// # Errors
    ///
    /// [`WorkStudyError::InvalidRating`] naming the factor whose label is
    /// not on its scale.
    pub fn from_labels(
        skill: &str,
        effort: &str,
        conditions: &str,
        consistency: &str,
    ) -> Result<Self> {
        let relabel = |factor: &'static str| {
            move |err: WorkStudyError| match err {
                WorkStudyError::InvalidRating { grade, .. } => {
                    WorkStudyError::InvalidRating { factor, grade }
                }
                other => other,
            }
        };
        Ok(Self {
            skill: skill.parse().map_err(relabel("skill"))?,
            effort: effort.parse().map_err(relabel("effort"))?,
            conditions: conditions.parse().map_err(relabel("conditions"))?,
            consistency: consistency.parse().map_err(relabel("consistency"))?,
        })
    }

    /// Signed adjustments in skill, effort, conditions, consistency order.
    pub fn adjustments(&self) -> [f64; 4] {
        [
            self.skill.skill_adjustment(),
            self.effort.effort_adjustment(),
            self.conditions.conditions_adjustment(),
            self.consistency.consistency_adjustment(),
        ]
    }

    /// Composite rating factor, `1 + Σ adjustments`.
    pub fn factor(&self) -> f64 {
        composite_factor(&self.adjustments())
    }
}

/// Rating factor for a Westinghouse rating.
pub fn westinghouse_factor(rating: &WestinghouseRating) -> f64 {
    rating.factor()
}

/// `1 + Σ adjustments`, without any floor or ceiling.
///
/// Adjustments summing below −1 produce a negative factor; callers that
/// need a bound must apply it themselves.
pub fn composite_factor(adjustments: &[f64]) -> f64 {
    1.0 + adjustments.iter().sum::<f64>()
}
