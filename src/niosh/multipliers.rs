//! Horizontal, vertical, distance, asymmetric and coupling multipliers.
//!
//! | Multiplier | Metric | Range (cm) |
//! |------------|--------|------------|
//! | HM | 25/H | H ≤ 25 → 1, H > 63 → 0 |
//! | VM | 1 − 0.003·\|V − 75\| | V > 175 → 0 |
//! | DM | 0.82 + 4.5/D | D < 25 → 1, D > 175 → 0 |
//! | AM | 1 − 0.0032·A | A > 135° → 0 |
//!
//! Imperial constants: 10/H (10–25 in), 0.0075·|V − 30| (≤ 70 in),
//! 0.82 + 1.8/D (10–70 in).

use super::{Coupling, UnitSystem};

/// Horizontal multiplier `min(1, k/H)`; 0 beyond the maximum reach or for
/// negative or non-finite distances.
///
/// # Examples
///
/// ```
/// use u_workstudy::niosh::{horizontal_multiplier, UnitSystem};
///
/// assert_eq!(horizontal_multiplier(20.0, UnitSystem::Metric), 1.0);
/// assert!((horizontal_multiplier(50.0, UnitSystem::Metric) - 0.5).abs() < 1e-12);
/// assert_eq!(horizontal_multiplier(70.0, UnitSystem::Metric), 0.0);
/// ```
pub fn horizontal_multiplier(horizontal: f64, units: UnitSystem) -> f64 {
    let c = units.constants();
    if !horizontal.is_finite() || horizontal < 0.0 || horizontal > c.horizontal_max {
        return 0.0;
    }
    if horizontal <= c.horizontal_min {
        return 1.0;
    }
    (c.horizontal_min / horizontal).clamp(0.0, 1.0)
}

/// Vertical multiplier `max(0, 1 − c·|V − V_opt|)`; 0 outside
/// `[0, V_max]`.
pub fn vertical_multiplier(vertical: f64, units: UnitSystem) -> f64 {
    let c = units.constants();
    if !vertical.is_finite() || vertical < 0.0 || vertical > c.vertical_max {
        return 0.0;
    }
    (1.0 - c.vertical_coefficient * (vertical - c.vertical_optimum).abs()).clamp(0.0, 1.0)
}

/// Distance multiplier `min(1, 0.82 + c/D)` with `D` floored at the
/// minimum travel; 0 beyond the maximum travel.
pub fn distance_multiplier(travel: f64, units: UnitSystem) -> f64 {
    let c = units.constants();
    if !travel.is_finite() || travel < 0.0 || travel > c.distance_max {
        return 0.0;
    }
    let d = travel.max(c.distance_min);
    (0.82 + c.distance_coefficient / d).clamp(0.0, 1.0)
}

/// Asymmetric multiplier `1 − 0.0032·A`; 0 beyond 135° or for negative
/// angles.
///
/// # Examples
///
/// ```
/// use u_workstudy::niosh::asymmetric_multiplier;
///
/// assert_eq!(asymmetric_multiplier(0.0), 1.0);
/// assert!((asymmetric_multiplier(90.0) - 0.712).abs() < 1e-12);
/// assert_eq!(asymmetric_multiplier(140.0), 0.0);
/// ```
pub fn asymmetric_multiplier(angle_degrees: f64) -> f64 {
    if !angle_degrees.is_finite() || !(0.0..=135.0).contains(&angle_degrees) {
        return 0.0;
    }
    (1.0 - 0.0032 * angle_degrees).clamp(0.0, 1.0)
}

/// Coupling multiplier.
///
/// | Coupling | V < threshold | V ≥ threshold |
/// |----------|---------------|---------------|
/// | Good | 1.00 | 1.00 |
/// | Fair | 0.95 | 1.00 |
/// | Poor | 0.90 | 0.90 |
pub fn coupling_multiplier(coupling: Coupling, vertical: f64, units: UnitSystem) -> f64 {
    let below = vertical < units.vertical_threshold();
    match (coupling, below) {
        (Coupling::Good, _) => 1.0,
        (Coupling::Fair, true) => 0.95,
        (Coupling::Fair, false) => 1.0,
        (Coupling::Poor, _) => 0.90,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_metric_and_imperial() {
        assert_eq!(horizontal_multiplier(25.0, UnitSystem::Metric), 1.0);
        assert!((horizontal_multiplier(63.0, UnitSystem::Metric) - 25.0 / 63.0).abs() < 1e-12);
        assert_eq!(horizontal_multiplier(63.1, UnitSystem::Metric), 0.0);
        assert!((horizontal_multiplier(20.0, UnitSystem::Imperial) - 0.5).abs() < 1e-12);
        assert_eq!(horizontal_multiplier(26.0, UnitSystem::Imperial), 0.0);
        assert_eq!(horizontal_multiplier(-1.0, UnitSystem::Metric), 0.0);
        assert_eq!(horizontal_multiplier(f64::NAN, UnitSystem::Metric), 0.0);
    }

    #[test]
    fn vertical_peaks_at_knuckle_height() {
        assert_eq!(vertical_multiplier(75.0, UnitSystem::Metric), 1.0);
        assert!((vertical_multiplier(0.0, UnitSystem::Metric) - 0.775).abs() < 1e-12);
        assert!((vertical_multiplier(175.0, UnitSystem::Metric) - 0.7).abs() < 1e-12);
        assert_eq!(vertical_multiplier(176.0, UnitSystem::Metric), 0.0);
        assert!((vertical_multiplier(0.0, UnitSystem::Imperial) - 0.775).abs() < 1e-12);
        assert_eq!(vertical_multiplier(-5.0, UnitSystem::Imperial), 0.0);
    }

    #[test]
    fn distance_floors_short_travel() {
        assert_eq!(distance_multiplier(10.0, UnitSystem::Metric), 1.0);
        assert!((distance_multiplier(25.0, UnitSystem::Metric) - 1.0).abs() < 1e-12);
        assert!((distance_multiplier(45.0, UnitSystem::Metric) - 0.92).abs() < 1e-12);
        let d_max = distance_multiplier(175.0, UnitSystem::Metric);
        assert!((d_max - (0.82 + 4.5 / 175.0)).abs() < 1e-12);
        assert_eq!(distance_multiplier(180.0, UnitSystem::Metric), 0.0);
        assert!((distance_multiplier(20.0, UnitSystem::Imperial) - 0.91).abs() < 1e-12);
    }

    #[test]
    fn asymmetry_limits() {
        assert!((asymmetric_multiplier(135.0) - 0.568).abs() < 1e-12);
        assert_eq!(asymmetric_multiplier(-10.0), 0.0);
    }

    #[test]
    fn coupling_table() {
        let m = UnitSystem::Metric;
        assert_eq!(coupling_multiplier(Coupling::Good, 30.0, m), 1.0);
        assert_eq!(coupling_multiplier(Coupling::Fair, 30.0, m), 0.95);
        assert_eq!(coupling_multiplier(Coupling::Fair, 75.0, m), 1.0);
        assert_eq!(coupling_multiplier(Coupling::Poor, 100.0, m), 0.90);
        assert_eq!(coupling_multiplier(Coupling::Fair, 29.0, UnitSystem::Imperial), 0.95);
    }

    #[test]
    fn all_multipliers_bounded() {
        for units in [UnitSystem::Metric, UnitSystem::Imperial] {
            for i in -10..400 {
                let x = f64::from(i) * 0.5;
                for m in [
                    horizontal_multiplier(x, units),
                    vertical_multiplier(x, units),
                    distance_multiplier(x, units),
                    asymmetric_multiplier(x),
                ] {
                    assert!((0.0..=1.0).contains(&m), "x = {x}, m = {m}");
                }
            }
        }
    }
}
