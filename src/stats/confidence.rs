//! Critical values for the three supported confidence levels.
//!
//! z values are exact table entries. Two-sided Student t values are read
//! from a degrees-of-freedom table per level, interpolated between
//! tabulated df and converging to z for large samples.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::table::LookupTable;
use crate::error::{Result, WorkStudyError};

/// Supported two-sided confidence levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// 90%
    Ninety,
    /// 95%
    NinetyFive,
    /// 99%
    NinetyNine,
}

impl ConfidenceLevel {
    /// Standard normal critical value.
    pub fn z(self) -> f64 {
        match self {
            Self::Ninety => 1.645,
            Self::NinetyFive => 1.96,
            Self::NinetyNine => 2.576,
        }
    }

    /// Confidence as a percentage.
    pub fn percent(self) -> f64 {
        match self {
            Self::Ninety => 90.0,
            Self::NinetyFive => 95.0,
            Self::NinetyNine => 99.0,
        }
    }

    fn t_table(self) -> LookupTable<'static> {
        match self {
            Self::Ninety => LookupTable::new(T_90),
            Self::NinetyFive => LookupTable::new(T_95),
            Self::NinetyNine => LookupTable::new(T_99),
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = WorkStudyError;

    fn from_str(label: &str) -> Result<Self> {
        match label {
            "90%" => Ok(Self::Ninety),
            "95%" => Ok(Self::NinetyFive),
            "99%" => Ok(Self::NinetyNine),
            other => Err(WorkStudyError::InvalidConfidenceLevel(other.to_string())),
        }
    }
}

/// Looks up the z value for a confidence label (`"90%"`, `"95%"`, `"99%"`).
///
/// # Errors
///
/// [`WorkStudyError::InvalidConfidenceLevel`] for any other label.
///
/// # Examples
///
/// ```
/// use u_workstudy::stats::z_value;
///
/// assert_eq!(z_value("95%").unwrap(), 1.96);
/// assert!(z_value("97%").is_err());
/// ```
pub fn z_value(label: &str) -> Result<f64> {
    label.parse::<ConfidenceLevel>().map(ConfidenceLevel::z)
}

/// Two-sided Student t critical value for `df` degrees of freedom.
///
/// `df` below 1 is treated as 1. Beyond the last tabulated df the value
/// is the normal z.
///
/// # Examples
///
/// ```
/// use u_workstudy::stats::{t_value, ConfidenceLevel};
///
/// assert!((t_value(ConfidenceLevel::NinetyFive, 9) - 2.262).abs() < 1e-9);
/// assert!((t_value(ConfidenceLevel::NinetyFive, 100_000) - 1.96).abs() < 1e-9);
/// ```
pub fn t_value(level: ConfidenceLevel, df: usize) -> f64 {
    level
        .t_table()
        .interpolate(df.max(1) as f64)
        .unwrap_or_else(|| level.z())
}

const T_90: &[(f64, f64)] = &[
    (1.0, 6.314),
    (2.0, 2.920),
    (3.0, 2.353),
    (4.0, 2.132),
    (5.0, 2.015),
    (6.0, 1.943),
    (7.0, 1.895),
    (8.0, 1.860),
    (9.0, 1.833),
    (10.0, 1.812),
    (12.0, 1.782),
    (15.0, 1.753),
    (20.0, 1.725),
    (25.0, 1.708),
    (30.0, 1.697),
    (40.0, 1.684),
    (60.0, 1.671),
    (120.0, 1.658),
    (1000.0, 1.645),
];

const T_95: &[(f64, f64)] = &[
    (1.0, 12.706),
    (2.0, 4.303),
    (3.0, 3.182),
    (4.0, 2.776),
    (5.0, 2.571),
    (6.0, 2.447),
    (7.0, 2.365),
    (8.0, 2.306),
    (9.0, 2.262),
    (10.0, 2.228),
    (12.0, 2.179),
    (15.0, 2.131),
    (20.0, 2.086),
    (25.0, 2.060),
    (30.0, 2.042),
    (40.0, 2.021),
    (60.0, 2.000),
    (120.0, 1.980),
    (1000.0, 1.960),
];

const T_99: &[(f64, f64)] = &[
    (1.0, 63.657),
    (2.0, 9.925),
    (3.0, 5.841),
    (4.0, 4.604),
    (5.0, 4.032),
    (6.0, 3.707),
    (7.0, 3.499),
    (8.0, 3.355),
    (9.0, 3.250),
    (10.0, 3.169),
    (12.0, 3.055),
    (15.0, 2.947),
    (20.0, 2.845),
    (25.0, 2.787),
    (30.0, 2.750),
    (40.0, 2.704),
    (60.0, 2.660),
    (120.0, 2.617),
    (1000.0, 2.576),
];
