//! Break-even analysis.
//!
//! ```text
//! margin = price − variable cost
//! Q*     = fixed costs / margin
//! Q_t    = (fixed costs + target profit) / margin
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cost-volume-profit inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInput {
    pub fixed_costs: f64,
    pub variable_cost_per_unit: f64,
    pub selling_price_per_unit: f64,
    pub target_profit: Option<f64>,
}

impl BreakEvenInput {
    pub fn new(fixed_costs: f64, variable_cost_per_unit: f64, selling_price_per_unit: f64) -> Self {
        Self {
            fixed_costs,
            variable_cost_per_unit,
            selling_price_per_unit,
            target_profit: None,
        }
    }

    /// Sets a target profit to solve for.
    pub fn with_target_profit(mut self, target_profit: f64) -> Self {
        self.target_profit = Some(target_profit);
        self
    }

    /// Contribution margin per unit.
    pub fn contribution_margin(&self) -> f64 {
        self.selling_price_per_unit - self.variable_cost_per_unit
    }

    /// Profit (negative for a loss) at a sales volume.
    pub fn profit_at(&self, units: f64) -> f64 {
        units * self.contribution_margin() - self.fixed_costs
    }
}

/// Break-even result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Price − variable cost per unit.
    pub contribution_margin: f64,
    /// Margin / price; 0 when the price is not positive.
    pub contribution_margin_ratio: f64,
    /// Break-even volume; `None` when not viable.
    pub break_even_units: Option<f64>,
    /// Break-even volume × price.
    pub break_even_revenue: Option<f64>,
    /// Volume reaching the target profit, when one was given.
    pub target_units: Option<f64>,
    /// Target volume × price.
    pub target_revenue: Option<f64>,
    /// Whether every unit sold contributes to covering fixed costs.
    pub is_viable: bool,
    /// Explanation of the outcome.
    pub message: String,
}

impl BreakEvenResult {
    /// Units sold beyond break-even as a fraction of expected volume.
    ///
    /// `None` when not viable or `expected_units` is not positive.
    pub fn margin_of_safety(&self, expected_units: f64) -> Option<f64> {
        let q = self.break_even_units?;
        (expected_units > 0.0).then(|| (expected_units - q) / expected_units)
    }
}

fn not_viable(margin: f64, ratio: f64, message: String) -> BreakEvenResult {
    BreakEvenResult {
        contribution_margin: margin,
        contribution_margin_ratio: ratio,
        break_even_units: None,
        break_even_revenue: None,
        target_units: None,
        target_revenue: None,
        is_viable: false,
        message,
    }
}

/// Computes the break-even volume.
///
/// A non-positive contribution margin is a normal, non-viable outcome.
/// Invalid inputs (negative costs, non-positive price, non-finite values)
/// are reported the same way, with a message naming the problem.
///
/// # Examples
///
/// ```
/// use u_workstudy::economics::{calculate_break_even, BreakEvenInput};
///
/// let r = calculate_break_even(&BreakEvenInput::new(50_000.0, 25.0, 50.0));
/// assert!(r.is_viable);
/// assert_eq!(r.contribution_margin, 25.0);
/// assert_eq!(r.break_even_units, Some(2_000.0));
/// assert_eq!(r.break_even_revenue, Some(100_000.0));
/// ```
pub fn calculate_break_even(input: &BreakEvenInput) -> BreakEvenResult {
    let price = input.selling_price_per_unit;
    let margin = input.contribution_margin();
    let ratio = if price > 0.0 { margin / price } else { 0.0 };

    let values = [
        input.fixed_costs,
        input.variable_cost_per_unit,
        price,
        input.target_profit.unwrap_or(0.0),
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return not_viable(margin, ratio, "All inputs must be finite numbers.".to_string());
    }
    if input.fixed_costs < 0.0 || input.variable_cost_per_unit < 0.0 {
        return not_viable(margin, ratio, "Costs cannot be negative.".to_string());
    }
    if price <= 0.0 {
        return not_viable(margin, ratio, "Selling price must be greater than zero.".to_string());
    }
    if margin <= 0.0 {
        return not_viable(
            margin,
            ratio,
            format!(
                "Selling price ({price}) does not exceed variable cost per unit ({}); \
                 each unit sold adds to the loss, so break-even is never reached.",
                input.variable_cost_per_unit
            ),
        );
    }

    let units = input.fixed_costs / margin;
    let target_units = input
        .target_profit
        .map(|profit| (input.fixed_costs + profit) / margin);
    debug!(margin, units, ?target_units, "break-even");

    BreakEvenResult {
        contribution_margin: margin,
        contribution_margin_ratio: ratio,
        break_even_units: Some(units),
        break_even_revenue: Some(units * price),
        target_units,
        target_revenue: target_units.map(|q| q * price),
        is_viable: true,
        message: format!("Break-even at {} units.", units.ceil()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_example() {
        let input = BreakEvenInput::new(50_000.0, 25.0, 50.0);
        let r = calculate_break_even(&input);
        assert_eq!(r.contribution_margin, 25.0);
        assert!((r.contribution_margin_ratio - 0.5).abs() < 1e-12);
        assert_eq!(r.break_even_units, Some(2_000.0));
        assert!(r.message.contains("2000"));
        assert!(input.profit_at(2_000.0).abs() < 1e-9);
    }

    #[test]
    fn target_profit_volume() {
        let input = BreakEvenInput::new(50_000.0, 25.0, 50.0).with_target_profit(25_000.0);
        let r = calculate_break_even(&input);
        assert_eq!(r.target_units, Some(3_000.0));
        assert_eq!(r.target_revenue, Some(150_000.0));
    }

    #[test]
    fn zero_margin_is_not_viable() {
        let r = calculate_break_even(&BreakEvenInput::new(10_000.0, 40.0, 40.0));
        assert!(!r.is_viable);
        assert_eq!(r.break_even_units, None);
        assert_eq!(r.contribution_margin, 0.0);
        assert!(r.message.contains("never reached"));
    }

    #[test]
    fn negative_margin_is_not_viable() {
        let r = calculate_break_even(&BreakEvenInput::new(10_000.0, 45.0, 40.0));
        assert!(!r.is_viable);
        assert!(r.contribution_margin < 0.0);
    }

    #[test]
    fn invalid_inputs_are_reported() {
        let r = calculate_break_even(&BreakEvenInput::new(-1.0, 10.0, 20.0));
        assert!(!r.is_viable);
        assert!(r.message.contains("negative"));
        let r = calculate_break_even(&BreakEvenInput::new(100.0, 0.0, 0.0));
        assert!(!r.is_viable);
        assert_eq!(r.contribution_margin_ratio, 0.0);
    }

    #[test]
    fn zero_fixed_costs_break_even_immediately() {
        let r = calculate_break_even(&BreakEvenInput::new(0.0, 5.0, 8.0));
        assert!(r.is_viable);
        assert_eq!(r.break_even_units, Some(0.0));
    }

    #[test]
    fn margin_of_safety() {
        let r = calculate_break_even(&BreakEvenInput::new(50_000.0, 25.0, 50.0));
        assert!((r.margin_of_safety(2_500.0).unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(r.margin_of_safety(0.0), None);
    }

    #[test]
    fn repeated_calculation_is_identical() {
        let input = BreakEvenInput::new(12_345.0, 7.3, 19.9).with_target_profit(4_000.0);
        let first = calculate_break_even(&input);
        let second = calculate_break_even(&input);
        assert_eq!(first, second);
        assert_eq!(
            first.break_even_units.map(f64::to_bits),
            second.break_even_units.map(f64::to_bits)
        );
    }
}
