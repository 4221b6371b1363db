use alloc::vec::Vec;

use crate::dist::Family;
use crate::traits::Real;

use super::{validate, InterpError};

/// Closed-form barycentric weights for nodes drawn from `family`.
///
/// | Family | `w_k` |
/// |--------|-------|
/// | uniform | `(-1)^k · C(n-1, k)` |
/// | chebyshev | `(-1)^k · sin((2k+1)π / 2n)` |
/// | chebyshev_2 | `(-1)^k`, halved at both ends |
///
/// Any other family has no closed form here and yields
/// [`InterpError::UnsupportedFamily`].
pub fn barycentric_weights<T: Real>(family: &Family<T>, n: usize) -> Result<Vec<T>, InterpError> {
    let alternate = |k: usize, w: T| if k % 2 == 0 { w } else { -w };

    match family {
        Family::Uniform => {
            let mut binom = T::one();
            let mut ws = Vec::with_capacity(n);
            for k in 0..n {
                if k > 0 {
                    // C(n-1, k) = C(n-1, k-1) · (n-k) / k, exact while it fits the mantissa
                    binom = binom * T::from_usize(n - k) / T::from_usize(k);
                }
                ws.push(alternate(k, binom));
            }
            Ok(ws)
        }
        Family::Chebyshev => {
            let denom = T::from_usize(2 * n);
            Ok((0..n)
                .map(|k| alternate(k, (T::from_usize(2 * k + 1) * T::pi() / denom).sin()))
                .collect())
        }
        Family::Chebyshev2 => Ok((0..n)
            .map(|k| {
                let w = if k == 0 || k + 1 == n { T::half() } else { T::one() };
                alternate(k, w)
            })
            .collect()),
        _ => Err(InterpError::UnsupportedFamily),
    }
}

/// Barycentric rational interpolant with caller-supplied weights.
///
/// Evaluates `(Σ w_k·y_k/(x-x_k)) / (Σ w_k/(x-x_k))` in O(N). A query within
/// `epsilon` of a node returns that node's value exactly, avoiding 0/0.
///
/// # Example
///
/// ```
/// use golden_interp::dist::Family;
/// use golden_interp::interp::Barycentric;
///
/// let xs = vec![-1.0_f64, 0.0, 1.0];
/// let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
/// let interp = Barycentric::for_family(&Family::Uniform, xs, ys).unwrap();
/// assert!((interp.eval(0.5, 1e-20) - 0.25).abs() < 1e-15);
/// assert_eq!(interp.eval(1.0, 1e-20), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Barycentric<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    ws: Vec<T>,
}

impl<T: Real> Barycentric<T> {
    pub fn new(xs: Vec<T>, ys: Vec<T>, ws: Vec<T>) -> Result<Self, InterpError> {
        validate(&xs, &ys, 1)?;
        if ws.len() != xs.len() {
            return Err(InterpError::LengthMismatch);
        }
        Ok(Self { xs, ys, ws })
    }

    /// Weights from [`barycentric_weights`] for the family the nodes came from.
    pub fn for_family(family: &Family<T>, xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpError> {
        let ws = barycentric_weights(family, xs.len())?;
        Self::new(xs, ys, ws)
    }

    /// Evaluate the interpolant at `x`.
    pub fn eval(&self, x: T, epsilon: T) -> T {
        let mut numer = T::zero();
        let mut denom = T::zero();

        for j in 0..self.xs.len() {
            let diff = x - self.xs[j];
            if diff.abs() < epsilon {
                return self.ys[j];
            }
            let term = self.ws[j] / diff;
            numer = numer + term * self.ys[j];
            denom = denom + term;
        }
        numer / denom
    }

    /// Evaluate a batch of queries. Each is independent, so any order works.
    pub fn eval_sorted(&self, xx: &[T], epsilon: T) -> Vec<T> {
        xx.iter().map(|&x| self.eval(x, epsilon)).collect()
    }

    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    pub fn weights(&self) -> &[T] {
        &self.ws
    }
}
