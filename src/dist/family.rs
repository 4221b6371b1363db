use alloc::vec::Vec;

use crate::special::erf;
use crate::traits::{int_sign, Real};

use super::Family;

/// Nodes for `n >= 2`; the `n < 2` cases are handled by the caller.
pub(super) fn points<T: Real>(family: &Family<T>, n: usize) -> Vec<T> {
    debug_assert!(n >= 2);
    let ni = n as i64;
    match *family {
        Family::Uniform => uniform::<T>(n).collect(),
        Family::Quadratic => uniform::<T>(n).map(quadratic).collect(),
        Family::Cubic => uniform::<T>(n).map(cubic).collect(),

        // cos(θ) is evaluated as sin(π/2 − θ) with an exact integer numerator,
        // so symmetric nodes are exact negatives and a centre node is 0.
        Family::Chebyshev => (1..=ni)
            .map(|k| -sin_pi_frac::<T>(ni + 1 - 2 * k, 2 * ni))
            .collect(),
        Family::Chebyshev2 | Family::CircleProj => {
            uniform::<T>(n).map(|u| (T::pi() * T::half() * u).sin()).collect()
        }
        Family::Chebyshev3 => (0..ni)
            .map(|k| sin_pi_frac::<T>(4 * k + 1 - 2 * ni, 4 * ni - 2))
            .collect(),
        Family::Chebyshev4 => (0..ni)
            .map(|k| sin_pi_frac::<T>(4 * k + 3 - 2 * ni, 4 * ni - 2))
            .collect(),

        Family::ChebyshevEllipse { ratio } => (0..ni)
            .map(|k| ellipse(2 * k + 1 - ni, angle(2 * k + 1, 2 * ni), ratio))
            .collect(),
        Family::ChebyshevEllipse2 { ratio } | Family::EllipseProj { ratio } => (0..ni)
            .map(|k| ellipse(2 * k + 1 - ni, angle(k, ni - 1), ratio))
            .collect(),
        Family::ChebyshevEllipse3 { ratio } => (0..ni)
            .map(|k| ellipse(4 * k + 1 - 2 * ni, angle(2 * k, 2 * ni - 1), ratio))
            .collect(),
        Family::ChebyshevEllipse4 { ratio } => (0..ni)
            .map(|k| ellipse(4 * k + 3 - 2 * ni, angle(2 * k + 1, 2 * ni - 1), ratio))
            .collect(),

        Family::Sigmoid { steepness } => uniform::<T>(n).map(|u| sigmoid(steepness * u)).collect(),
        Family::Logistic { steepness } => {
            uniform::<T>(n).map(|u| sigmoid(steepness * cubic(u))).collect()
        }
        Family::Erf { steepness } => uniform::<T>(n).map(|u| erf(steepness * u)).collect(),
    }
}

/// `2k/(n-1) - 1` for k = 0..n-1.
fn uniform<T: Real>(n: usize) -> impl Iterator<Item = T> {
    let denom = T::from_usize(n - 1);
    (0..n).map(move |k| T::two() * T::from_usize(k) / denom - T::one())
}

fn quadratic<T: Real>(x: T) -> T {
    let one = T::one();
    if x <= T::zero() {
        (x + one) * (x + one) - one
    } else {
        -((x - one) * (x - one)) + one
    }
}

fn cubic<T: Real>(x: T) -> T {
    -T::half() * x * x * x + T::from_f64(1.5) * x
}

/// Logistic curve rescaled to (-1, 1).
fn sigmoid<T: Real>(t: T) -> T {
    T::two() / (T::one() + (-t).exp()) - T::one()
}

/// sin(π·num/den)
fn sin_pi_frac<T: Real>(num: i64, den: i64) -> T {
    angle::<T>(num, den).sin()
}

/// π·num/den
fn angle<T: Real>(num: i64, den: i64) -> T {
    T::pi() * T::from_f64(num as f64) / T::from_f64(den as f64)
}

/// Projection of the ray at `theta` onto the major axis of an ellipse with
/// the given aspect ratio. The sign comes from index arithmetic so the node
/// at θ = π/2 is exactly 0.
fn ellipse<T: Real>(sign: i64, theta: T, ratio: T) -> T {
    let t = theta.tan() / ratio;
    int_sign::<T>(sign) / (T::one() + t * t).sqrt()
}
