use alloc::vec::Vec;

use crate::traits::Real;

use super::{find_interval, validate, InterpError, SegmentCursor};

/// Piecewise linear spline.
///
/// Segment `i` stores `(slope_i, intercept_i)` with
/// `slope_i = (y[i+1] - y[i]) / (x[i+1] - x[i])` and `intercept_i = y[i]`,
/// evaluated as `slope_i·(x - x[i]) + intercept_i`. Requires at least 2 points.
/// Queries outside the knots extrapolate the nearest boundary segment.
///
/// # Example
///
/// ```
/// use golden_interp::interp::LinearSpline;
///
/// let spline = LinearSpline::new(&[0.0_f64, 1.0, 3.0], &[0.0, 2.0, 2.0]).unwrap();
/// assert_eq!(spline.flat_coefficients(), vec![2.0, 0.0, 0.0, 2.0]);
/// assert_eq!(spline.eval(-1.0), -2.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearSpline<T> {
    xs: Vec<T>,
    coeffs: Vec<[T; 2]>,
}

impl<T: Real> LinearSpline<T> {
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpError> {
        validate(xs, ys, 2)?;
        let coeffs = xs
            .windows(2)
            .zip(ys.windows(2))
            .map(|(x, y)| [(y[1] - y[0]) / (x[1] - x[0]), y[0]])
            .collect();
        Ok(Self { xs: xs.to_vec(), coeffs })
    }

    /// Evaluate the spline at `x`.
    pub fn eval(&self, x: T) -> T {
        self.eval_segment(find_interval(&self.xs, x), x)
    }

    /// Evaluate an ascending batch of queries with a forward-only cursor.
    pub fn eval_sorted(&self, xx: &[T]) -> Vec<T> {
        let mut cursor = SegmentCursor::default();
        xx.iter()
            .map(|&x| self.eval_segment(cursor.advance(&self.xs, x), x))
            .collect()
    }

    fn eval_segment(&self, i: usize, x: T) -> T {
        let [slope, intercept] = self.coeffs[i];
        slope * (x - self.xs[i]) + intercept
    }

    /// Per-segment `[slope, intercept]`.
    pub fn segments(&self) -> &[[T; 2]] {
        &self.coeffs
    }

    /// `[slope_0, intercept_0, slope_1, intercept_1, ...]`
    pub fn flat_coefficients(&self) -> Vec<T> {
        self.coeffs.iter().flatten().copied().collect()
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }
}
