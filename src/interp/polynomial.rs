use alloc::vec::Vec;

use crate::traits::Real;

use super::{validate, InterpError};

/// Interpolating polynomial in monomial form.
///
/// The unique polynomial of degree `n - 1` through `n` distinct nodes, stored
/// highest degree first. Built from Newton divided differences, then expanded
/// by nested multiplication with `(x - x_i)`. Evaluated with Horner's method.
///
/// # Example
///
/// ```
/// use golden_interp::interp::Polynomial;
///
/// // y = 2x² - 1
/// let p = Polynomial::interpolate(&[-1.0_f64, 0.0, 2.0], &[1.0, -1.0, 7.0]).unwrap();
/// let c = p.coefficients();
/// assert!((c[0] - 2.0).abs() < 1e-14 && c[1].abs() < 1e-14 && (c[2] + 1.0).abs() < 1e-14);
/// assert!((p.eval(3.0) - 17.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T: Real> Polynomial<T> {
    /// Interpolate through `(xs[i], ys[i])`. The nodes must be distinct.
    pub fn interpolate(xs: &[T], ys: &[T]) -> Result<Self, InterpError> {
        validate(xs, ys, 1)?;
        let n = xs.len();

        // Newton coefficients: P(x) = d0 + (x-x0)(d1 + (x-x1)(d2 + ...))
        let mut dd = ys.to_vec();
        for j in 1..n {
            for i in (j..n).rev() {
                dd[i] = (dd[i] - dd[i - 1]) / (xs[i] - xs[i - j]);
            }
        }

        // Expand innermost first; `acc` holds ascending-power coefficients.
        let mut acc = Vec::with_capacity(n);
        acc.push(dd[n - 1]);
        for i in (0..n - 1).rev() {
            acc.push(T::zero());
            for p in (1..acc.len()).rev() {
                acc[p] = acc[p - 1] - xs[i] * acc[p];
            }
            acc[0] = dd[i] - xs[i] * acc[0];
        }

        acc.reverse();
        Ok(Self { coeffs: acc })
    }

    /// Wrap coefficients given highest degree first.
    pub fn from_coefficients(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Horner evaluation.
    pub fn eval(&self, x: T) -> T {
        self.coeffs.iter().fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Evaluate a batch of queries. Each is independent, so any order works.
    pub fn eval_sorted(&self, xx: &[T]) -> Vec<T> {
        xx.iter().map(|&x| self.eval(x)).collect()
    }
}
