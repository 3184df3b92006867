//! Frequency multiplier (NIOSH Applications Manual, Table 5).
//!
//! Rows are lifting frequencies in lifts/minute; the table column is
//! selected by duration category and by whether the origin height is below
//! the vertical threshold (75 cm / 30 in). Frequencies below 0.2 lifts/min
//! use the 0.2 row, frequencies between rows are linearly interpolated,
//! and frequencies above 15 lifts/min have no defined value (FM = 0).

use crate::stats::LookupTable;

use super::{UnitSystem, WorkDuration};

/// Highest tabulated frequency, lifts/minute.
const MAX_FREQUENCY: f64 = 15.0;

const SHORT_BELOW: &[(f64, f64)] = &[
    (0.2, 1.00),
    (0.5, 0.97),
    (1.0, 0.94),
    (2.0, 0.91),
    (3.0, 0.88),
    (4.0, 0.84),
    (5.0, 0.80),
    (6.0, 0.75),
    (7.0, 0.70),
    (8.0, 0.60),
    (9.0, 0.52),
    (10.0, 0.45),
    (11.0, 0.41),
    (12.0, 0.37),
    (13.0, 0.00),
    (14.0, 0.00),
    (15.0, 0.00),
];

const SHORT_ABOVE: &[(f64, f64)] = &[
    (0.2, 1.00),
    (0.5, 0.97),
    (1.0, 0.94),
    (2.0, 0.91),
    (3.0, 0.88),
    (4.0, 0.84),
    (5.0, 0.80),
    (6.0, 0.75),
    (7.0, 0.70),
    (8.0, 0.60),
    (9.0, 0.52),
    (10.0, 0.45),
    (11.0, 0.41),
    (12.0, 0.37),
    (13.0, 0.34),
    (14.0, 0.31),
    (15.0, 0.28),
];

const MODERATE_BELOW: &[(f64, f64)] = &[
    (0.2, 0.95),
    (0.5, 0.92),
    (1.0, 0.88),
    (2.0, 0.84),
    (3.0, 0.79),
    (4.0, 0.72),
    (5.0, 0.60),
    (6.0, 0.50),
    (7.0, 0.42),
    (8.0, 0.35),
    (9.0, 0.30),
    (10.0, 0.26),
    (11.0, 0.00),
    (12.0, 0.00),
    (13.0, 0.00),
    (14.0, 0.00),
    (15.0, 0.00),
];

const MODERATE_ABOVE: &[(f64, f64)] = &[
    (0.2, 0.95),
    (0.5, 0.92),
    (1.0, 0.88),
    (2.0, 0.84),
    (3.0, 0.79),
    (4.0, 0.72),
    (5.0, 0.60),
    (6.0, 0.50),
    (7.0, 0.42),
    (8.0, 0.35),
    (9.0, 0.30),
    (10.0, 0.26),
    (11.0, 0.23),
    (12.0, 0.21),
    (13.0, 0.00),
    (14.0, 0.00),
    (15.0, 0.00),
];

const LONG_BELOW: &[(f64, f64)] = &[
    (0.2, 0.85),
    (0.5, 0.81),
    (1.0, 0.75),
    (2.0, 0.65),
    (3.0, 0.55),
    (4.0, 0.45),
    (5.0, 0.35),
    (6.0, 0.27),
    (7.0, 0.22),
    (8.0, 0.18),
    (9.0, 0.00),
    (10.0, 0.00),
    (11.0, 0.00),
    (12.0, 0.00),
    (13.0, 0.00),
    (14.0, 0.00),
    (15.0, 0.00),
];

const LONG_ABOVE: &[(f64, f64)] = &[
    (0.2, 0.85),
    (0.5, 0.81),
    (1.0, 0.75),
    (2.0, 0.65),
    (3.0, 0.55),
    (4.0, 0.45),
    (5.0, 0.35),
    (6.0, 0.27),
    (7.0, 0.22),
    (8.0, 0.18),
    (9.0, 0.15),
    (10.0, 0.13),
    (11.0, 0.00),
    (12.0, 0.00),
    (13.0, 0.00),
    (14.0, 0.00),
    (15.0, 0.00),
];

fn table(duration: WorkDuration, below_threshold: bool) -> LookupTable<'static> {
    let points = match (duration, below_threshold) {
        (WorkDuration::Short, true) => SHORT_BELOW,
        (WorkDuration::Short, false) => SHORT_ABOVE,
        (WorkDuration::Moderate, true) => MODERATE_BELOW,
        (WorkDuration::Moderate, false) => MODERATE_ABOVE,
        (WorkDuration::Long, true) => LONG_BELOW,
        (WorkDuration::Long, false) => LONG_ABOVE,
    };
    LookupTable::new(points)
}

/// Frequency multiplier for `frequency` lifts/minute.
///
/// # Examples
///
/// ```
/// use u_workstudy::niosh::{frequency_multiplier, UnitSystem, WorkDuration};
///
/// let fm = frequency_multiplier(1.0, WorkDuration::Short, 60.0, UnitSystem::Metric);
/// assert!((fm - 0.94).abs() < 1e-12);
/// // Halfway between 4 (0.45) and 5 (0.35) lifts/min for an 8-hour shift.
/// let fm = frequency_multiplier(4.5, WorkDuration::Long, 60.0, UnitSystem::Metric);
/// assert!((fm - 0.40).abs() < 1e-12);
/// ```
pub fn frequency_multiplier(
    frequency: f64,
    duration: WorkDuration,
    vertical: f64,
    units: UnitSystem,
) -> f64 {
    if !frequency.is_finite() || frequency < 0.0 || frequency > MAX_FREQUENCY {
        return 0.0;
    }
    let below = vertical < units.vertical_threshold();
    table(duration, below)
        .interpolate(frequency)
        .map_or(0.0, |fm| fm.clamp(0.0, 1.0))
}
