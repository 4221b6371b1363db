//! Numeric settings threaded through formatting and the interpolators.

use crate::traits::Real;

/// Precision and tolerance settings for one fixture suite.
///
/// `working_digits` is the decimal precision arithmetic runs at when the
/// element type has a configurable precision (see
/// [`with_digits`](crate::bigfloat::with_digits)); `f64` ignores it.
/// `zero_threshold` collapses tiny results to a literal `0` when formatting.
/// `epsilon` is the distance under which a query point counts as sitting on
/// a node (barycentric pass-through, step-spline exact match).
///
/// # Example
///
/// ```
/// use golden_interp::{NumericConfig, Real};
///
/// let config = NumericConfig::<f64>::default()
///     .with_working_digits(30)
///     .with_zero_threshold(<f64 as Real>::exp10(-20))
///     .with_epsilon(1e-20);
/// assert_eq!(config.precision, 17);
/// assert_eq!(config.working_digits, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericConfig<T> {
    /// Significant digits emitted by the formatter.
    pub precision: usize,
    /// Decimal digits of working precision.
    pub working_digits: usize,
    /// Magnitudes strictly below this format as `0`.
    pub zero_threshold: T,
    /// Query/node coincidence tolerance.
    pub epsilon: T,
}

impl<T: Real> Default for NumericConfig<T> {
    fn default() -> Self {
        Self {
            precision: 17,
            working_digits: 20,
            zero_threshold: T::exp10(-18),
            epsilon: T::epsilon(),
        }
    }
}

impl<T: Real> NumericConfig<T> {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.max(1);
        self
    }

    pub fn with_working_digits(mut self, working_digits: usize) -> Self {
        self.working_digits = working_digits.max(1);
        self
    }

    pub fn with_zero_threshold(mut self, zero_threshold: T) -> Self {
        self.zero_threshold = zero_threshold;
        self
    }

    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }
}
