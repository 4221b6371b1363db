//! Interpolants: barycentric rational, global polynomial, and piecewise
//! splines of degree 0 (step), 1 (linear) and 2 (quadratic).
//!
//! Every interpolant is built once from nodes `X` and values `Y` and is
//! immutable afterwards. Splines offer two evaluation paths:
//!
//! - `eval(x)` locates the segment with a fresh binary search;
//! - `eval_sorted(&xx)` walks a forward-only cursor across the nodes and never
//!   moves back, which is only meaningful when `xx` is ascending. Fixture
//!   generation uses this path.
//!
//! Both pick the segment `i` with `X[i] <= x`, clamped to `0..=n-2`, so for
//! ascending queries they agree exactly.
//!
//! # Example
//!
//! ```
//! use golden_interp::interp::{LinearSpline, StepKind, StepSpline};
//!
//! let spline = LinearSpline::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
//! assert_eq!(spline.eval(0.5), 0.5);
//! assert_eq!(spline.eval_sorted(&[0.5, 1.5]), vec![0.5, 0.5]);
//!
//! let step = StepSpline::new(&[0.0_f64, 1.0, 2.0], &[10.0, 20.0, 30.0], StepKind::Middle).unwrap();
//! assert_eq!(step.eval(0.9, f64::EPSILON), 15.0);
//! ```

mod barycentric;
mod linear;
mod polynomial;
mod quadratic;
mod step;

#[cfg(test)]
mod tests;

pub use barycentric::{barycentric_weights, Barycentric};
pub use linear::LinearSpline;
pub use polynomial::Polynomial;
pub use quadratic::{QuadraticBoundary, QuadraticSpline};
pub use step::{StepKind, StepSpline};

use core::fmt;

use crate::traits::Real;

/// Errors from interpolant construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpError {
    /// Not enough data points for the interpolation method.
    TooFewPoints,
    /// `xs` and `ys` have different lengths.
    LengthMismatch,
    /// No barycentric weight formula exists for the distribution family.
    UnsupportedFamily,
    /// A boundary condition or step policy name was not recognized.
    UnknownVariant,
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpError::TooFewPoints => write!(f, "not enough data points for interpolation"),
            InterpError::LengthMismatch => write!(f, "xs and ys must have the same length"),
            InterpError::UnsupportedFamily => {
                write!(f, "no barycentric weights for this distribution family")
            }
            InterpError::UnknownVariant => write!(f, "unknown boundary condition or step type"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}

/// Validate lengths shared by every constructor.
fn validate<T>(xs: &[T], ys: &[T], min_points: usize) -> Result<(), InterpError> {
    if xs.len() != ys.len() {
        return Err(InterpError::LengthMismatch);
    }
    if xs.len() < min_points {
        return Err(InterpError::TooFewPoints);
    }
    Ok(())
}

/// Binary search for the interval containing `x` in a sorted slice.
///
/// Returns index `i` such that `xs[i] <= x < xs[i+1]`, clamped to
/// `[0, xs.len() - 2]` for extrapolation beyond boundaries.
fn find_interval<T: Real>(xs: &[T], x: T) -> usize {
    debug_assert!(xs.len() >= 2);
    let n = xs.len();
    if x < xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if x < xs[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}

/// Forward-only segment lookup for ascending query batches.
///
/// Advances while the next knot is `<= x` and never resets.
#[derive(Debug, Clone, Copy, Default)]
struct SegmentCursor {
    segment: usize,
}

impl SegmentCursor {
    fn advance<T: Real>(&mut self, xs: &[T], x: T) -> usize {
        while self.segment + 2 < xs.len() && xs[self.segment + 1] <= x {
            self.segment += 1;
        }
        self.segment
    }
}
