use alloc::vec;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::traits::Real;

use super::{find_interval, validate, InterpError, SegmentCursor};

/// End condition for [`QuadraticSpline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadraticBoundary {
    /// First (last) two segments share one quadratic: the end segment's
    /// leading coefficient is the second divided difference over the first
    /// (last) three nodes. Requires at least 3 points.
    SemiNotAKnot,
    /// End segment is a straight line through its two nodes.
    SemiNatural,
}

impl QuadraticBoundary {
    pub fn name(self) -> &'static str {
        match self {
            QuadraticBoundary::SemiNotAKnot => "semi-not-a-knot",
            QuadraticBoundary::SemiNatural => "semi-natural",
        }
    }
}

impl FromStr for QuadraticBoundary {
    type Err = InterpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semi-not-a-knot" => Ok(QuadraticBoundary::SemiNotAKnot),
            "semi-natural" => Ok(QuadraticBoundary::SemiNatural),
            _ => Err(InterpError::UnknownVariant),
        }
    }
}

/// C¹ piecewise quadratic spline.
///
/// Two sweeps are run: one forward from the start boundary and one backward
/// from the end boundary. Each enforces value and first-derivative continuity
/// at every knot via `b[i+1] = 2·s_i − b[i]` (`s_i` the secant slope). Each
/// sweep alone depends on only one end condition; the stored coefficients are
/// the componentwise mean of both, which is still interpolating and C¹.
///
/// Segment `i` stores `[a, b, c]` for `S_i(x) = a·dx² + b·dx + c`,
/// `dx = x − x_i`.
///
/// # Example
///
/// ```
/// use golden_interp::interp::{QuadraticBoundary, QuadraticSpline};
///
/// // data on a single parabola y = x² is reproduced by semi-not-a-knot
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
/// let spline = QuadraticSpline::new(&xs, &ys, QuadraticBoundary::SemiNotAKnot).unwrap();
/// assert!((spline.eval(1.5) - 2.25).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct QuadraticSpline<T> {
    xs: Vec<T>,
    coeffs: Vec<[T; 3]>,
    boundary: QuadraticBoundary,
}

impl<T: Real> QuadraticSpline<T> {
    pub fn new(xs: &[T], ys: &[T], boundary: QuadraticBoundary) -> Result<Self, InterpError> {
        let min_points = match boundary {
            QuadraticBoundary::SemiNotAKnot => 3,
            QuadraticBoundary::SemiNatural => 2,
        };
        validate(xs, ys, min_points)?;

        let m = xs.len() - 1;
        let two = T::two();
        let dx: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let dy: Vec<T> = ys.windows(2).map(|w| w[1] - w[0]).collect();
        let slope = |i: usize| dy[i] / dx[i];

        let zero = [T::zero(); 3];
        let mut fwd = vec![zero; m];
        let mut bwd = vec![zero; m];

        match boundary {
            QuadraticBoundary::SemiNotAKnot => {
                let c = (slope(1) - slope(0)) / (dx[0] + dx[1]);
                fwd[0] = [c, slope(0) - c * dx[0], ys[0]];
                let c = (slope(m - 1) - slope(m - 2)) / (dx[m - 2] + dx[m - 1]);
                bwd[m - 1] = [c, slope(m - 1) - c * dx[m - 1], ys[m - 1]];
            }
            QuadraticBoundary::SemiNatural => {
                fwd[0] = [T::zero(), slope(0), ys[0]];
                bwd[m - 1] = [T::zero(), slope(m - 1), ys[m - 1]];
            }
        }

        for i in 1..m {
            let b = two * dy[i - 1] / dx[i - 1] - fwd[i - 1][1];
            fwd[i] = [(slope(i) - b) / dx[i], b, ys[i]];

            let j = m - 1 - i;
            let next_b = bwd[j + 1][1];
            let b = two * dy[j] / dx[j] - next_b;
            bwd[j] = [(next_b - slope(j)) / dx[j], b, ys[j]];
        }

        let coeffs: Vec<[T; 3]> = fwd
            .iter()
            .zip(&bwd)
            .map(|(f, b)| core::array::from_fn(|k| (f[k] + b[k]) / two))
            .collect();

        Ok(Self { xs: xs.to_vec(), coeffs, boundary })
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
        let dx = x - self.xs[i];
        let [a, b, c] = self.coeffs[i];
        (a * dx + b) * dx + c
    }

    /// Per-segment `[a, b, c]`.
    pub fn segments(&self) -> &[[T; 3]] {
        &self.coeffs
    }

    /// `[a_0, b_0, c_0, a_1, ...]`
    pub fn flat_coefficients(&self) -> Vec<T> {
        self.coeffs.iter().flatten().copied().collect()
    }

    pub fn boundary(&self) -> QuadraticBoundary {
        self.boundary
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }
}
