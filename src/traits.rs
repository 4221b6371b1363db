use alloc::format;
use alloc::string::String;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{Float, One, Zero};

/// Trait for the real-valued elements every numeric routine works over.
///
/// Covers arithmetic, ordering, the transcendental functions the
/// distributions need, exact literal constructors, and decimal digit
/// extraction for the number formatter.
///
/// Implemented for `f32` and `f64` through [`num_traits::Float`] and, with
/// the `std` feature, for the arbitrary-precision
/// [`BigFloat`](crate::bigfloat::BigFloat). Every implementor is `Copy`, so
/// generic code reads the same for all of them.
pub trait Real:
    Copy
    + PartialOrd
    + Debug
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Nearest representable value to an `f64` literal.
    fn from_f64(v: f64) -> Self;

    /// Exact for every count the fixtures use.
    fn from_usize(n: usize) -> Self;

    /// `num / den`, rounded once.
    fn from_ratio(num: i64, den: i64) -> Self;

    /// `10^e`, rounded once.
    fn exp10(e: i32) -> Self;

    fn pi() -> Self;

    /// Gap between 1 and the next representable value.
    fn epsilon() -> Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;

    /// Nearest `f64`.
    fn to_f64(self) -> f64;

    /// The first `count` significant decimal digits of `|self|` and the
    /// decimal exponent of the first one. Zero yields `("0", 0)`.
    fn decimal_digits(self, count: usize) -> (String, i32);

    #[inline]
    fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Shorthand for `Self::one() / (Self::one() + Self::one())`.
    #[inline]
    fn half() -> Self {
        Self::from_ratio(1, 2)
    }

    /// Shorthand for `Self::one() + Self::one()`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

macro_rules! impl_real {
    ($($t:ident),*) => {
        $(
            impl Real for $t {
                #[inline] fn from_f64(v: f64) -> $t { v as $t }
                #[inline] fn from_usize(n: usize) -> $t { n as $t }
                #[inline] fn from_ratio(num: i64, den: i64) -> $t { num as $t / den as $t }

                // powers of ten up to 10^22 are exact, so negative
                // exponents in that range round once
                fn exp10(e: i32) -> $t {
                    let p = <$t as Float>::powi(10.0, e.abs());
                    if e < 0 { 1.0 / p } else { p }
                }

                #[inline] fn pi() -> $t { core::$t::consts::PI }
                #[inline] fn epsilon() -> $t { $t::EPSILON }
                #[inline] fn abs(self) -> $t { <$t as Float>::abs(self) }
                #[inline] fn sqrt(self) -> $t { <$t as Float>::sqrt(self) }
                #[inline] fn exp(self) -> $t { <$t as Float>::exp(self) }
                #[inline] fn sin(self) -> $t { <$t as Float>::sin(self) }
                #[inline] fn cos(self) -> $t { <$t as Float>::cos(self) }
                #[inline] fn tan(self) -> $t { <$t as Float>::tan(self) }
                #[inline] fn is_nan(self) -> bool { <$t as Float>::is_nan(self) }
                #[inline] fn is_infinite(self) -> bool { <$t as Float>::is_infinite(self) }
                #[inline] fn to_f64(self) -> f64 { self as f64 }

                fn decimal_digits(self, count: usize) -> (String, i32) {
                    let ax = <$t as Float>::abs(self);
                    if ax == 0.0 {
                        return (String::from("0"), 0);
                    }
                    let s = format!("{:.*e}", count.max(1) - 1, ax);
                    let (mantissa, exp) = s.split_once('e').unwrap_or((&s, "0"));
                    let digits = mantissa.chars().filter(char::is_ascii_digit).collect();
                    (digits, exp.parse().unwrap_or(0))
                }
            }
        )*
    };
}

impl_real!(f32, f64);

/// Sign of a signed integer as a float: -1, 0 or 1.
///
/// The ellipse projections take their sign from integer index arithmetic
/// rather than from a float, so the centre node is exactly zero.
#[inline]
pub(crate) fn int_sign<T: Real>(v: i64) -> T {
    match v.signum() {
        1 => T::one(),
        -1 => -T::one(),
        _ => T::zero(),
    }
}
