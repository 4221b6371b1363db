//! Arbitrary-precision binary floating point for fixture generation.
//!
//! A [`BigFloat`] is `±m · 2^e` with an odd (or zero) mantissa `m` of at most
//! `LIMBS · 64` bits. Every arithmetic result is rounded half to even to the
//! *working precision* of the current thread, which [`with_digits`] sets in
//! decimal digits and converts to bits as `round((digits + 1) · log2 10)`.
//! Literal constructors ([`Real::from_ratio`], [`Real::exp10`]) round once,
//! so `from_ratio(1, 10)` is the working-precision value nearest to 0.1
//! rather than the nearest `f64`.
//!
//! Transcendental functions evaluate in fixed point on [`num_bigint`]
//! integers with guard bits and round once at the end.
//!
//! The type is `Copy`, so every generic routine over [`Real`] runs on it
//! unchanged.
//!
//! # Example
//!
//! ```
//! use golden_interp::bigfloat::{with_digits, BigFloat};
//! use golden_interp::{format_number, NumericConfig, Real};
//!
//! let text = with_digits(30, || {
//!     let config = NumericConfig::<BigFloat>::default();
//!     format_number(BigFloat::from_ratio(-2, 3), &config)
//! });
//! assert_eq!(text, "-0.66666666666666667");
//! ```

mod kernels;

#[cfg(test)]
mod tests;

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Float, One, ToPrimitive, Zero};

use crate::traits::Real;

const LIMBS: usize = 8;

/// Largest working precision [`with_digits`] accepts.
pub const MAX_DIGITS: usize = 130;

/// Working precision of a thread that never called [`with_digits`].
pub const DEFAULT_DIGITS: usize = 20;

/// Extra bits carried by the fixed-point kernels.
const GUARD_BITS: u64 = 64;

thread_local! {
    static WORKING_DIGITS: Cell<usize> = const { Cell::new(DEFAULT_DIGITS) };
}

/// `round((digits + 1) · log2 10)`
const fn digits_to_bits(digits: usize) -> u64 {
    ((digits as u64 + 1) * 3_321_928_095 + 500_000_000) / 1_000_000_000
}

/// Decimal digits of the current thread's working precision.
pub fn working_digits() -> usize {
    WORKING_DIGITS.with(Cell::get)
}

fn working_bits() -> u64 {
    digits_to_bits(working_digits())
}

/// Run `f` with the thread's working precision set to `digits` (clamped to
/// `1..=MAX_DIGITS`), restoring the previous precision afterwards.
pub fn with_digits<R>(digits: usize, f: impl FnOnce() -> R) -> R {
    struct Restore(usize);

    impl Drop for Restore {
        fn drop(&mut self) {
            WORKING_DIGITS.with(|d| d.set(self.0));
        }
    }

    let previous = WORKING_DIGITS.with(|d| d.replace(digits.clamp(1, MAX_DIGITS)));
    let _restore = Restore(previous);
    f()
}

/// Arbitrary-precision real. See the module docs.
#[derive(Clone, Copy)]
pub struct BigFloat {
    nan: bool,
    negative: bool,
    exponent: i64,
    /// Little-endian limbs of the odd mantissa.
    mantissa: [u64; LIMBS],
}

impl BigFloat {
    pub const ZERO: Self = Self { nan: false, negative: false, exponent: 0, mantissa: [0; LIMBS] };
    pub const NAN: Self = Self { nan: true, ..Self::ZERO };

    fn magnitude(&self) -> BigUint {
        self.mantissa
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &limb| (acc << 64u32) + limb)
    }

    fn signed(&self) -> BigInt {
        let m = BigInt::from_biguint(Sign::Plus, self.magnitude());
        if self.negative {
            -m
        } else {
            m
        }
    }

    /// `|self| < 2^top`, tight for non-zero values.
    fn top(&self) -> i64 {
        self.exponent + self.magnitude().bits() as i64
    }

    /// `m · 2^exponent` rounded to the working precision.
    fn round(m: BigInt, exponent: i64) -> Self {
        Self::round_bits(m, exponent, working_bits())
    }

    fn round_bits(m: BigInt, mut exponent: i64, bits: u64) -> Self {
        let (sign, mut mag) = m.into_parts();
        if mag.is_zero() {
            return Self::ZERO;
        }
        let len = mag.bits();
        if len > bits {
            let shift = len - bits;
            mag = round_shift(&mag, shift);
            exponent += shift as i64;
        }
        if let Some(tz) = mag.trailing_zeros() {
            mag >>= tz;
            exponent += tz as i64;
        }
        let mut mantissa = [0u64; LIMBS];
        for (slot, limb) in mantissa.iter_mut().zip(mag.iter_u64_digits()) {
            *slot = limb;
        }
        Self { nan: false, negative: sign == Sign::Minus, exponent, mantissa }
    }

    /// `num / den · 2^exponent`, rounded once.
    fn quotient(num: &BigInt, den: &BigInt, exponent: i64) -> Self {
        if den.is_zero() {
            return Self::NAN;
        }
        if num.is_zero() {
            return Self::ZERO;
        }
        // at least bits + 2 quotient bits, then a sticky bit for the remainder
        let shift = (working_bits() + 2 + den.bits()).saturating_sub(num.bits());
        let n = num.magnitude() << shift;
        let d = den.magnitude();
        let q = &n / d;
        let sticky = !(n - &q * d).is_zero();
        let mut q = q << 1u32;
        if sticky {
            q += 1u32;
        }
        let sign = if (num.sign() == Sign::Minus) != (den.sign() == Sign::Minus) {
            Sign::Minus
        } else {
            Sign::Plus
        };
        Self::round(BigInt::from_biguint(sign, q), exponent - shift as i64 - 1)
    }

    fn sign_rank(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match self.top().cmp(&other.top()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let e = self.exponent.min(other.exponent);
        let a = self.magnitude() << (self.exponent - e) as u64;
        let b = other.magnitude() << (other.exponent - e) as u64;
        a.cmp(&b)
    }
}

/// `mag / 2^shift` rounded half to even. `shift >= 1`.
fn round_shift(mag: &BigUint, shift: u64) -> BigUint {
    let q = mag >> shift;
    let rem = mag - (&q << shift);
    let half = BigUint::one() << (shift - 1);
    match rem.cmp(&half) {
        Ordering::Greater => q + 1u32,
        Ordering::Equal if q.bit(0) => q + 1u32,
        _ => q,
    }
}

/// `v · 2^e` without overflowing the intermediate power.
fn scale_f64(mut v: f64, mut e: i64) -> f64 {
    while e != 0 {
        let step = e.clamp(-1000, 1000);
        v *= 2f64.powi(step as i32);
        e -= step;
    }
    v
}

impl Zero for BigFloat {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        !self.nan && self.mantissa.iter().all(|&limb| limb == 0)
    }
}

impl One for BigFloat {
    fn one() -> Self {
        Self::round(BigInt::one(), 0)
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        !self.nan
            && !other.nan
            && self.negative == other.negative
            && self.exponent == other.exponent
            && self.mantissa == other.mantissa
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.nan || other.nan {
            return None;
        }
        let (a, b) = (self.sign_rank(), other.sign_rank());
        if a != b || a == 0 {
            return Some(a.cmp(&b));
        }
        let mag = self.cmp_magnitude(other);
        Some(if self.negative { mag.reverse() } else { mag })
    }
}

impl Add for BigFloat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.nan || rhs.nan {
            return Self::NAN;
        }
        if rhs.is_zero() {
            return self;
        }
        if self.is_zero() {
            return rhs;
        }
        let (big, small) = if self.top() >= rhs.top() { (self, rhs) } else { (rhs, self) };
        // the smaller operand is below half an ulp of the larger
        if big.top() - small.top() > working_bits() as i64 + 2 {
            return Self::round(big.signed(), big.exponent);
        }
        let e = big.exponent.min(small.exponent);
        let m = (big.signed() << (big.exponent - e) as u64)
            + (small.signed() << (small.exponent - e) as u64);
        Self::round(m, e)
    }
}

impl Sub for BigFloat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Mul for BigFloat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self.nan || rhs.nan {
            return Self::NAN;
        }
        Self::round(self.signed() * rhs.signed(), self.exponent + rhs.exponent)
    }
}

impl Div for BigFloat {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        if self.nan || rhs.nan {
            return Self::NAN;
        }
        Self::quotient(&self.signed(), &rhs.signed(), self.exponent - rhs.exponent)
    }
}

impl Neg for BigFloat {
    type Output = Self;

    fn neg(mut self) -> Self {
        if !self.nan && !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Real for BigFloat {
    fn from_f64(v: f64) -> Self {
        if !v.is_finite() {
            return Self::NAN;
        }
        let (mantissa, exponent, sign) = Float::integer_decode(v);
        let m = BigInt::from(mantissa);
        Self::round(if sign < 0 { -m } else { m }, exponent as i64)
    }

    fn from_usize(n: usize) -> Self {
        Self::round(BigInt::from(n), 0)
    }

    fn from_ratio(num: i64, den: i64) -> Self {
        Self::quotient(&BigInt::from(num), &BigInt::from(den), 0)
    }

    fn exp10(e: i32) -> Self {
        let power = BigInt::from(10u32).pow(e.unsigned_abs());
        if e >= 0 {
            Self::round(power, 0)
        } else {
            Self::quotient(&BigInt::one(), &power, 0)
        }
    }

    fn pi() -> Self {
        let w = working_bits() + GUARD_BITS;
        kernels::from_fixed(kernels::pi_fixed(w), w)
    }

    fn epsilon() -> Self {
        Self::round(BigInt::one(), 1 - working_bits() as i64)
    }

    fn abs(mut self) -> Self {
        self.negative = false;
        self
    }

    fn sqrt(self) -> Self {
        if self.nan || self.negative {
            return Self::NAN;
        }
        if self.is_zero() {
            return self;
        }
        // 2·bits + 4 mantissa bits and an even exponent give an integer
        // root with bits + 2 bits, then a sticky bit
        let mut m = self.magnitude();
        let mut shift = (2 * working_bits() + 4).saturating_sub(m.bits());
        if (self.exponent - shift as i64).rem_euclid(2) != 0 {
            shift += 1;
        }
        m <<= shift;
        let e = self.exponent - shift as i64;
        let root = m.sqrt();
        let sticky = &root * &root != m;
        let mut q = root << 1u32;
        if sticky {
            q += 1u32;
        }
        Self::round(BigInt::from_biguint(Sign::Plus, q), e / 2 - 1)
    }

    fn exp(self) -> Self {
        if self.nan {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::one();
        }
        let w = working_bits() + GUARD_BITS;
        let e = kernels::exp_fixed(&kernels::to_fixed(&self.abs(), w), w);
        if self.negative {
            Self::quotient(&(BigInt::one() << w), &e, 0)
        } else {
            kernels::from_fixed(e, w)
        }
    }

    fn sin(self) -> Self {
        if self.nan || self.is_zero() {
            return self;
        }
        let w = working_bits() + GUARD_BITS;
        let (s, _) = kernels::sin_cos_fixed(&self, w);
        kernels::from_fixed(s, w)
    }

    fn cos(self) -> Self {
        if self.nan {
            return self;
        }
        if self.is_zero() {
            return Self::one();
        }
        let w = working_bits() + GUARD_BITS;
        let (_, c) = kernels::sin_cos_fixed(&self, w);
        kernels::from_fixed(c, w)
    }

    fn tan(self) -> Self {
        if self.nan || self.is_zero() {
            return self;
        }
        let w = working_bits() + GUARD_BITS;
        let (s, c) = kernels::sin_cos_fixed(&self, w);
        Self::quotient(&s, &c, 0)
    }

    fn is_nan(self) -> bool {
        self.nan
    }

    fn is_infinite(self) -> bool {
        false
    }

    fn to_f64(self) -> f64 {
        if self.nan {
            return f64::NAN;
        }
        let mag = self.magnitude();
        let len = mag.bits();
        let (m, e) = if len > 53 {
            (round_shift(&mag, len - 53), self.exponent + (len - 53) as i64)
        } else {
            (mag, self.exponent)
        };
        let v = scale_f64(m.to_f64().unwrap_or(0.0), e);
        if self.negative {
            -v
        } else {
            v
        }
    }

    fn decimal_digits(self, count: usize) -> (String, i32) {
        let mag = self.magnitude();
        if self.nan || mag.is_zero() {
            return (String::from("0"), 0);
        }
        // scale by 10^k so the integer part has at least count + 1 digits
        let top = self.exponent + mag.bits() as i64;
        let estimate = ((top - 1) as f64 * core::f64::consts::LOG10_2).floor() as i64;
        let k = count as i64 + 1 - estimate;

        let (mut num, mut den) = (mag, BigUint::one());
        if self.exponent >= 0 {
            num <<= self.exponent as u64;
        } else {
            den <<= self.exponent.unsigned_abs();
        }
        let power = BigUint::from(10u32).pow(k.unsigned_abs() as u32);
        if k >= 0 {
            num *= power;
        } else {
            den *= power;
        }

        let mut digits = (num / den).to_string();
        let exponent = digits.len() as i64 - 1 - k;
        digits.truncate(count.max(1));
        (digits, exponent as i32)
    }
}

impl fmt::Debug for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nan {
            return f.write_str("NaN");
        }
        let (digits, exponent) = self.decimal_digits(24);
        let sign = if self.negative { "-" } else { "" };
        let (lead, rest) = digits.split_at(1);
        write!(f, "{sign}{lead}.{rest}e{exponent}")
    }
}
