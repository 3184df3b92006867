//! Composition of the six multipliers into RWL and Lifting Index.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::frequency::frequency_multiplier;
use super::multipliers::{
    asymmetric_multiplier, coupling_multiplier, distance_multiplier, horizontal_multiplier,
    vertical_multiplier,
};
use super::{Coupling, UnitSystem, WorkDuration};

/// Description of a single lifting task.
///
/// Distances are in centimetres (metric) or inches (imperial); the load is
/// in kilograms or pounds accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftingTask {
    /// Weight of the object lifted.
    pub load_weight: f64,
    /// Horizontal distance of the hands from the midpoint between the ankles.
    pub horizontal_distance: f64,
    /// Vertical height of the hands above the floor at the origin.
    pub vertical_height: f64,
    /// Vertical travel distance between origin and destination.
    pub vertical_travel: f64,
    /// Asymmetry angle in degrees.
    pub asymmetry_angle: f64,
    /// Lifting frequency, lifts per minute.
    pub frequency: f64,
    pub duration: WorkDuration,
    pub coupling: Coupling,
    pub units: UnitSystem,
}

impl LiftingTask {
    /// Creates a metric task with short duration and good coupling.
    pub fn metric(
        load_weight: f64,
        horizontal_distance: f64,
        vertical_height: f64,
        vertical_travel: f64,
        asymmetry_angle: f64,
        frequency: f64,
    ) -> Self {
        Self {
            load_weight,
            horizontal_distance,
            vertical_height,
            vertical_travel,
            asymmetry_angle,
            frequency,
            duration: WorkDuration::Short,
            coupling: Coupling::Good,
            units: UnitSystem::Metric,
        }
    }

    /// Creates an imperial task with short duration and good coupling.
    pub fn imperial(
        load_weight: f64,
        horizontal_distance: f64,
        vertical_height: f64,
        vertical_travel: f64,
        asymmetry_angle: f64,
        frequency: f64,
    ) -> Self {
        Self {
            units: UnitSystem::Imperial,
            ..Self::metric(
                load_weight,
                horizontal_distance,
                vertical_height,
                vertical_travel,
                asymmetry_angle,
                frequency,
            )
        }
    }

    /// Sets the duration category.
    pub fn with_duration(mut self, duration: WorkDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the coupling quality.
    pub fn with_coupling(mut self, coupling: Coupling) -> Self {
        self.coupling = coupling;
        self
    }
}

/// Identifies one of the six multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierKind {
    Horizontal,
    Vertical,
    Distance,
    Asymmetric,
    Frequency,
    Coupling,
}

impl MultiplierKind {
    /// Display name of the multiplier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
            Self::Distance => "Distance",
            Self::Asymmetric => "Asymmetric",
            Self::Frequency => "Frequency",
            Self::Coupling => "Coupling",
        }
    }
}

impl fmt::Display for MultiplierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six task multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub horizontal: f64,
    pub vertical: f64,
    pub distance: f64,
    pub asymmetric: f64,
    pub frequency: f64,
    pub coupling: f64,
}

impl Multipliers {
    /// Multipliers paired with their kind, in equation order.
    pub fn entries(&self) -> [(MultiplierKind, f64); 6] {
        [
            (MultiplierKind::Horizontal, self.horizontal),
            (MultiplierKind::Vertical, self.vertical),
            (MultiplierKind::Distance, self.distance),
            (MultiplierKind::Asymmetric, self.asymmetric),
            (MultiplierKind::Frequency, self.frequency),
            (MultiplierKind::Coupling, self.coupling),
        ]
    }

    /// Product of all six multipliers.
    pub fn product(&self) -> f64 {
        self.entries().iter().map(|(_, m)| m).product()
    }

    /// The smallest multiplier; ties resolve to the earliest in equation
    /// order.
    pub fn limiting(&self) -> MultiplierKind {
        let entries = self.entries();
        let mut best = entries[0];
        for &entry in &entries[1..] {
            if entry.1 < best.1 {
                best = entry;
            }
        }
        best.0
    }
}

/// Three-way risk classification of the Lifting Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftingRisk {
    /// LI ≤ 1.0
    Acceptable,
    /// 1.0 < LI ≤ 3.0
    Increased,
    /// LI > 3.0
    High,
}

impl LiftingRisk {
    /// Classifies a Lifting Index.
    pub fn from_index(lifting_index: f64) -> Self {
        if lifting_index <= 1.0 {
            Self::Acceptable
        } else if lifting_index <= 3.0 {
            Self::Increased
        } else {
            Self::High
        }
    }
}

/// Result of the lifting equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NioshResult {
    /// Recommended Weight Limit.
    pub rwl: f64,
    /// Load / RWL; infinite when RWL is 0.
    pub lifting_index: f64,
    pub risk: LiftingRisk,
    pub multipliers: Multipliers,
    /// Multiplier with the smallest value.
    pub limiting_factor: MultiplierKind,
    /// Load constant used (23 kg or 51 lb).
    pub load_constant: f64,
    /// Frequency-independent RWL (FM omitted).
    pub firwl: f64,
    /// Load / FIRWL.
    pub fili: f64,
}

fn index(load: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        load / limit
    } else {
        f64::INFINITY
    }
}

/// Evaluates the lifting equation for a task.
///
/// Never fails: invalid geometry drives the affected multiplier to 0.
///
/// # Examples
///
/// ```
/// use u_workstudy::niosh::{calculate_niosh, LiftingRisk, LiftingTask, MultiplierKind};
///
/// // Ideal geometry: every multiplier is 1 and RWL equals the load constant.
/// let task = LiftingTask::metric(11.5, 25.0, 75.0, 25.0, 0.0, 0.2);
/// let r = calculate_niosh(&task);
/// assert!((r.rwl - 23.0).abs() < 1e-12);
/// assert!((r.lifting_index - 0.5).abs() < 1e-12);
/// assert_eq!(r.risk, LiftingRisk::Acceptable);
///
/// // Reach beyond 63 cm is infeasible.
/// let far = LiftingTask::metric(10.0, 70.0, 75.0, 25.0, 0.0, 1.0);
/// let r = calculate_niosh(&far);
/// assert_eq!(r.rwl, 0.0);
/// assert!(r.lifting_index.is_infinite());
/// assert_eq!(r.limiting_factor, MultiplierKind::Horizontal);
/// ```
pub fn calculate_niosh(task: &LiftingTask) -> NioshResult {
    let units = task.units;
    let load_constant = units.load_constant();
    let v = task.vertical_height;

    let multipliers = Multipliers {
        horizontal: horizontal_multiplier(task.horizontal_distance, units),
        vertical: vertical_multiplier(v, units),
        distance: distance_multiplier(task.vertical_travel, units),
        asymmetric: asymmetric_multiplier(task.asymmetry_angle),
        frequency: frequency_multiplier(task.frequency, task.duration, v, units),
        coupling: coupling_multiplier(task.coupling, v, units),
    };

    let load = if task.load_weight.is_finite() && task.load_weight > 0.0 {
        task.load_weight
    } else {
        warn!(load = task.load_weight, "non-positive load treated as 0");
        0.0
    };

    let rwl = load_constant * multipliers.product();
    let lifting_index = index(load, rwl);
    let frequency_free = if multipliers.frequency > 0.0 {
        multipliers.product() / multipliers.frequency
    } else {
        multipliers.horizontal
            * multipliers.vertical
            * multipliers.distance
            * multipliers.asymmetric
            * multipliers.coupling
    };
    let firwl = load_constant * frequency_free;
    let fili = index(load, firwl);

    let limiting_factor = multipliers.limiting();
    if rwl == 0.0 {
        warn!(%limiting_factor, "lifting task outside the equation's defined range");
    }
    debug!(rwl, lifting_index, %limiting_factor, "NIOSH lifting equation");

    NioshResult {
        rwl,
        lifting_index,
        risk: LiftingRisk::from_index(lifting_index),
        multipliers,
        limiting_factor,
        load_constant,
        firwl,
        fili,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applications_manual_style_example() {
        // H = 40 cm, V = 30 cm, D = 100 cm, A = 30°, F = 1/min, 2 h, fair.
        let task = LiftingTask::metric(15.0, 40.0, 30.0, 100.0, 30.0, 1.0)
            .with_duration(WorkDuration::Moderate)
            .with_coupling(Coupling::Fair);
        let r = calculate_niosh(&task);
        let m = r.multipliers;
        assert!((m.horizontal - 0.625).abs() < 1e-12);
        assert!((m.vertical - 0.865).abs() < 1e-12);
        assert!((m.distance - 0.865).abs() < 1e-12);
        assert!((m.asymmetric - 0.904).abs() < 1e-12);
        assert!((m.frequency - 0.88).abs() < 1e-12);
        assert!((m.coupling - 0.95).abs() < 1e-12);

        let expected = 23.0 * 0.625 * 0.865 * 0.865 * 0.904 * 0.88 * 0.95;
        assert!((r.rwl - expected).abs() < 1e-9, "rwl = {}", r.rwl);
        assert!((r.lifting_index - 15.0 / expected).abs() < 1e-9);
        assert_eq!(r.risk, LiftingRisk::Increased);
        assert_eq!(r.limiting_factor, MultiplierKind::Horizontal);
        assert!((r.firwl - expected / 0.88).abs() < 1e-9);
        assert!(r.fili < r.lifting_index);
    }

    #[test]
    fn risk_thresholds() {
        assert_eq!(LiftingRisk::from_index(1.0), LiftingRisk::Acceptable);
        assert_eq!(LiftingRisk::from_index(1.01), LiftingRisk::Increased);
        assert_eq!(LiftingRisk::from_index(3.0), LiftingRisk::Increased);
        assert_eq!(LiftingRisk::from_index(3.01), LiftingRisk::High);
        assert_eq!(LiftingRisk::from_index(f64::INFINITY), LiftingRisk::High);
    }

    #[test]
    fn limiting_factor_tie_prefers_equation_order() {
        let m = Multipliers {
            horizontal: 1.0,
            vertical: 0.8,
            distance: 1.0,
            asymmetric: 1.0,
            frequency: 0.8,
            coupling: 1.0,
        };
        assert_eq!(m.limiting(), MultiplierKind::Vertical);
    }

    #[test]
    fn high_frequency_keeps_frequency_independent_limit() {
        let task = LiftingTask::metric(10.0, 30.0, 75.0, 25.0, 0.0, 20.0);
        let r = calculate_niosh(&task);
        assert_eq!(r.multipliers.frequency, 0.0);
        assert_eq!(r.rwl, 0.0);
        assert!(r.lifting_index.is_infinite());
        assert_eq!(r.limiting_factor, MultiplierKind::Frequency);
        assert!(r.firwl > 0.0);
        assert!(r.fili.is_finite());
    }

    #[test]
    fn imperial_ideal_task() {
        let task = LiftingTask::imperial(25.5, 10.0, 30.0, 10.0, 0.0, 0.2);
        let r = calculate_niosh(&task);
        assert!((r.rwl - 51.0).abs() < 1e-12);
        assert!((r.lifting_index - 0.5).abs() < 1e-12);
        assert_eq!(r.load_constant, 51.0);
    }

    #[test]
    fn heavy_load_is_high_risk() {
        let task = LiftingTask::metric(40.0, 50.0, 20.0, 120.0, 60.0, 4.0)
            .with_duration(WorkDuration::Long)
            .with_coupling(Coupling::Poor);
        let r = calculate_niosh(&task);
        assert!(r.lifting_index > 3.0, "LI = {}", r.lifting_index);
        assert_eq!(r.risk, LiftingRisk::High);
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let task = LiftingTask::metric(12.0, 35.0, 60.0, 40.0, 15.0, 2.5);
        assert_eq!(calculate_niosh(&task), calculate_niosh(&task));
    }

    #[test]
    fn multiplier_names() {
        assert_eq!(MultiplierKind::Asymmetric.to_string(), "Asymmetric");
        assert_eq!(MultiplierKind::Coupling.name(), "Coupling");
    }
}
