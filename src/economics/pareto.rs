//! Pareto (80/20) analysis.
//!
//! Items are ranked by value, descending, and their cumulative share of
//! the total is accumulated in rank order. An item belongs to the
//! "vital few" while the cumulative percentage has not exceeded the
//! threshold. The top-ranked item is always vital, so the vital-few set
//! is never empty for non-empty input.
//!
//! Reference: Juran, J.M. (1951). *Quality Control Handbook*.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default vital-few threshold, percent.
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// A category and its magnitude (count, cost, downtime).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoItem {
    pub category: String,
    pub value: f64,
}

impl ParetoItem {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// An item after ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    /// 1-based rank.
    pub rank: usize,
    pub category: String,
    pub value: f64,
    /// Share of the total, percent.
    pub percentage: f64,
    /// Running share up to and including this item, percent.
    pub cumulative_percentage: f64,
    pub is_vital_few: bool,
}

/// Result of a Pareto analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParetoResult {
    pub items: Vec<RankedItem>,
    /// Sum of all values.
    pub total: f64,
    /// Threshold applied, percent.
    pub threshold: f64,
    /// Categories in the vital few, in rank order.
    pub vital_few: Vec<String>,
    /// Cumulative share of the vital few, percent.
    pub vital_few_share: f64,
}

impl ParetoResult {
    /// Number of vital-few categories.
    pub fn vital_few_count(&self) -> usize {
        self.vital_few.len()
    }
}

/// Pareto analysis with a configurable vital-few threshold.
///
/// # Examples
///
/// ```
/// use u_workstudy::economics::{ParetoAnalysis, ParetoItem};
///
/// let items = vec![
///     ParetoItem::new("Scratches", 42.0),
///     ParetoItem::new("Dents", 28.0),
///     ParetoItem::new("Misalignment", 15.0),
///     ParetoItem::new("Discoloration", 8.0),
///     ParetoItem::new("Cracks", 4.0),
///     ParetoItem::new("Burrs", 2.0),
///     ParetoItem::new("Other", 1.0),
/// ];
/// let result = ParetoAnalysis::new().analyze(&items);
/// assert_eq!(result.vital_few, vec!["Scratches", "Dents"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParetoAnalysis {
    threshold: f64,
}

impl Default for ParetoAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl ParetoAnalysis {
    /// Analysis with the default 80% threshold.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Sets the threshold, clamped to `[50, 99]` percent. A non-finite
    /// value keeps the default.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        if !threshold.is_finite() {
            warn!(threshold, "non-finite Pareto threshold ignored");
            return self;
        }
        let clamped = threshold.clamp(50.0, 99.0);
        if clamped != threshold {
            warn!(threshold, clamped, "Pareto threshold clamped");
        }
        self.threshold = clamped;
        self
    }

    /// Threshold in percent.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Ranks the items and marks the vital few.
    ///
    /// Negative or non-finite values count as 0. Ties keep their input
    /// order. When every value is 0 all percentages are 0 and only the
    /// first item is vital.
    pub fn analyze(&self, items: &[ParetoItem]) -> ParetoResult {
        if items.is_empty() {
            return ParetoResult {
                threshold: self.threshold,
                ..ParetoResult::default()
            };
        }

        let mut sorted: Vec<(&str, f64)> = items
            .iter()
            .map(|it| {
                let v = if it.value.is_finite() && it.value > 0.0 {
                    it.value
                } else {
                    0.0
                };
                (it.category.as_str(), v)
            })
            .collect();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

        let total: f64 = sorted.iter().map(|(_, v)| v).sum();
        let mut cumulative = 0.0;
        let mut vital_open = true;
        let mut ranked = Vec::with_capacity(sorted.len());
        let mut vital_few = Vec::new();
        let mut vital_few_share = 0.0;

        for (i, (category, value)) in sorted.into_iter().enumerate() {
            cumulative += value;
            let (percentage, cumulative_percentage) = if total > 0.0 {
                (value / total * 100.0, cumulative / total * 100.0)
            } else {
                (0.0, 0.0)
            };

            let is_vital_few = if i == 0 {
                true
            } else {
                vital_open && total > 0.0 && cumulative_percentage <= self.threshold
            };
            if is_vital_few {
                vital_few.push(category.to_string());
                vital_few_share = cumulative_percentage;
            } else {
                vital_open = false;
            }

            ranked.push(RankedItem {
                rank: i + 1,
                category: category.to_string(),
                value,
                percentage,
                cumulative_percentage,
                is_vital_few,
            });
        }
        debug!(total, vital = vital_few.len(), "Pareto analysis");

        ParetoResult {
            items: ranked,
            total,
            threshold: self.threshold,
            vital_few,
            vital_few_share,
        }
    }
}

/// Ranks `items` with the given threshold (clamped to `[50, 99]`).
pub fn analyze_pareto(items: &[ParetoItem], threshold: f64) -> ParetoResult {
    ParetoAnalysis::new().with_threshold(threshold).analyze(items)
}
