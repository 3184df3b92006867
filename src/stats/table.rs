//! Breakpoint tables with clamped linear interpolation.
//!
//! A table is a slice of `(key, value)` pairs sorted ascending by key.
//! Lookups below the first key return the first value, lookups above the
//! last key return the last value, and lookups between two keys are
//! linearly interpolated. The bracketing pair is found by binary search.

/// A sorted `(key, value)` table.
///
/// # Examples
///
/// ```
/// use u_workstudy::stats::LookupTable;
///
/// const TABLE: &[(f64, f64)] = &[(0.0, 1.0), (10.0, 0.0)];
/// let table = LookupTable::new(TABLE);
/// assert!((table.interpolate(5.0).unwrap() - 0.5).abs() < 1e-12);
/// assert_eq!(table.interpolate(-3.0), Some(1.0));
/// assert_eq!(table.interpolate(42.0), Some(0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LookupTable<'a> {
    points: &'a [(f64, f64)],
}

impl<'a> LookupTable<'a> {
    /// Wraps a breakpoint slice. Keys must be sorted ascending.
    pub const fn new(points: &'a [(f64, f64)]) -> Self {
        Self { points }
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table has no breakpoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Looks up `x`, clamping at the table ends.
    ///
    /// # Returns
    ///
    /// `None` if the table is empty or `x` is NaN.
    pub fn interpolate(&self, x: f64) -> Option<f64> {
        let (first, last) = (self.points.first()?, self.points.last()?);
        if x.is_nan() {
            return None;
        }
        if x <= first.0 {
            return Some(first.1);
        }
        if x >= last.0 {
            return Some(last.1);
        }

        // First index whose key is strictly greater than x; 1 <= hi < len here.
        let hi = self.points.partition_point(|&(k, _)| k <= x);
        let (x0, y0) = self.points[hi - 1];
        let (x1, y1) = self.points[hi];
        if x1 - x0 <= f64::EPSILON {
            return Some(y0);
        }
        Some(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    }
}
