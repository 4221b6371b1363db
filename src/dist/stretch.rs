use alloc::vec::Vec;

use crate::traits::Real;

/// Affine remap of `points` from their own `[min, max]` span onto `[a, b]`.
///
/// Order is preserved and the extremes land on `a` and `a + (b - a)`
/// exactly. A zero-width span (one point, or all points equal) maps every
/// point to the midpoint `(a + b) / 2`.
///
/// # Example
///
/// ```
/// use golden_interp::dist::stretch;
///
/// assert_eq!(stretch(&[3.0_f64, 3.0], -2.0, 4.0), vec![1.0, 1.0]);
/// assert_eq!(stretch(&[-1.0_f64, 0.0, 1.0], 10.0, 20.0), vec![10.0, 15.0, 20.0]);
/// ```
pub fn stretch<T: Real>(points: &[T], a: T, b: T) -> Vec<T> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let (lo, hi) = points
        .iter()
        .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));

    if lo == hi {
        let mid = (a + b) / T::two();
        return alloc::vec![mid; points.len()];
    }

    let span = hi - lo;
    let width = b - a;
    points.iter().map(|&p| a + (p - lo) / span * width).collect()
}
