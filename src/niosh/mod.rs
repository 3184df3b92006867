//! Revised NIOSH Lifting Equation (1991).
//!
//! ```text
//! RWL = LC × HM × VM × DM × AM × FM × CM
//! LI  = load / RWL
//! ```
//!
//! Every multiplier lies in `[0, 1]`. A task whose geometry falls outside
//! the equation's defined range collapses the relevant multiplier to 0,
//! which drives RWL to 0 and the Lifting Index to infinity.
//!
//! # References
//!
//! - Waters, Putz-Anderson, Garg & Fine (1993). "Revised NIOSH equation for
//!   the design and evaluation of manual lifting tasks", *Ergonomics* 36(7),
//!   pp. 749–776.
//! - NIOSH (1994). *Applications Manual for the Revised NIOSH Lifting
//!   Equation*, Publication 94-110.

mod equation;
mod frequency;
mod multipliers;

pub use equation::{
    calculate_niosh, LiftingRisk, LiftingTask, MultiplierKind, Multipliers, NioshResult,
};
pub use frequency::frequency_multiplier;
pub use multipliers::{
    asymmetric_multiplier, coupling_multiplier, distance_multiplier, horizontal_multiplier,
    vertical_multiplier,
};

use serde::{Deserialize, Serialize};

/// Measurement system of a lifting task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Centimetres and kilograms.
    #[default]
    Metric,
    /// Inches and pounds.
    Imperial,
}

/// Lifting duration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkDuration {
    /// At most 1 hour, followed by recovery of at least 1.2× work time.
    #[default]
    Short,
    /// 1 to 2 hours, followed by recovery of at least 0.3× work time.
    Moderate,
    /// 2 to 8 hours.
    Long,
}

/// Hand-to-object coupling quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coupling {
    #[default]
    Good,
    Fair,
    Poor,
}

/// Unit-dependent constants of the equation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitConstants {
    pub load_constant: f64,
    pub horizontal_min: f64,
    pub horizontal_max: f64,
    pub vertical_optimum: f64,
    pub vertical_coefficient: f64,
    pub vertical_max: f64,
    pub distance_coefficient: f64,
    pub distance_min: f64,
    pub distance_max: f64,
}

impl UnitSystem {
    pub(crate) fn constants(self) -> UnitConstants {
        match self {
            Self::Metric => UnitConstants {
                load_constant: 23.0,
                horizontal_min: 25.0,
                horizontal_max: 63.0,
                vertical_optimum: 75.0,
                vertical_coefficient: 0.003,
                vertical_max: 175.0,
                distance_coefficient: 4.5,
                distance_min: 25.0,
                distance_max: 175.0,
            },
            Self::Imperial => UnitConstants {
                load_constant: 51.0,
                horizontal_min: 10.0,
                horizontal_max: 25.0,
                vertical_optimum: 30.0,
                vertical_coefficient: 0.0075,
                vertical_max: 70.0,
                distance_coefficient: 1.8,
                distance_min: 10.0,
                distance_max: 70.0,
            },
        }
    }

    /// Load constant (23 kg or 51 lb).
    pub fn load_constant(self) -> f64 {
        self.constants().load_constant
    }

    /// Vertical height separating the two frequency and coupling table
    /// columns (75 cm or 30 in).
    pub fn vertical_threshold(self) -> f64 {
        self.constants().vertical_optimum
    }
}
