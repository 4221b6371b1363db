//! Fixed-point series on `BigInt`: a value `v` at `w` bits is `v / 2^w`.

use std::cell::RefCell;

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

use super::BigFloat;

thread_local! {
    /// π at the widest fixed-point scale computed so far on this thread.
    static PI: RefCell<Option<(u64, BigInt)>> = const { RefCell::new(None) };
}

pub(super) fn to_fixed(x: &BigFloat, w: u64) -> BigInt {
    let shift = x.exponent + w as i64;
    if shift >= 0 {
        x.signed() << shift as u64
    } else {
        x.signed() >> shift.unsigned_abs()
    }
}

pub(super) fn from_fixed(v: BigInt, w: u64) -> BigFloat {
    BigFloat::round(v, -(w as i64))
}

pub(super) fn pi_fixed(w: u64) -> BigInt {
    PI.with(|cache| {
        let mut cache = cache.borrow_mut();
        if let Some((cached_w, pi)) = cache.as_ref() {
            if *cached_w >= w {
                return pi >> (cached_w - w);
            }
        }
        let pi = machin(w);
        *cache = Some((w, pi.clone()));
        pi
    })
}

/// π = 16·atan(1/5) − 4·atan(1/239)
fn machin(w: u64) -> BigInt {
    let wp = w + 16;
    let pi = atan_inv(5, wp) * 16u32 - atan_inv(239, wp) * 4u32;
    pi >> 16u32
}

/// atan(1/k) by its alternating series.
fn atan_inv(k: u32, w: u64) -> BigInt {
    let k2 = BigInt::from(k) * k;
    let mut power = (BigInt::one() << w) / k;
    let mut sum = power.clone();
    let mut n = 1u32;
    loop {
        power /= &k2;
        if power.is_zero() {
            return sum;
        }
        let term = &power / (2 * n + 1);
        if n % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        n += 1;
    }
}

/// e^x for fixed-point `x >= 0`.
///
/// Halves the argument until it is below 2^-8, sums the Taylor series and
/// squares back, carrying one extra bit per squaring.
pub(super) fn exp_fixed(x: &BigInt, w: u64) -> BigInt {
    let halvings = x.bits().saturating_sub(w) + 8;
    let wp = w + halvings + 16;
    // x / 2^halvings at wp bits
    let r = x << (wp - w - halvings);

    let mut sum = BigInt::one() << wp;
    let mut term = sum.clone();
    let mut k = 1u32;
    loop {
        term = ((&term * &r) >> wp) / k;
        if term.is_zero() {
            break;
        }
        sum += &term;
        k += 1;
    }
    for _ in 0..halvings {
        sum = (&sum * &sum) >> wp;
    }
    sum >> (wp - w)
}

/// `(sin x, cos x)` at `w` bits.
///
/// Reduces by the nearest multiple of π/2 with enough extra bits to cover the
/// integer part of `x` (or its leading zeros, for tiny `x`).
pub(super) fn sin_cos_fixed(x: &BigFloat, w: u64) -> (BigInt, BigInt) {
    let wp = w + x.top().unsigned_abs() + 8;
    let xf = to_fixed(x, wp);
    let half_pi = pi_fixed(wp + 1) >> 2u32;
    let quarter_pi = &half_pi >> 1u32;

    let k = floor_div(&(&xf + &quarter_pi), &half_pi);
    let r = xf - &k * &half_pi;
    let (s, c) = taylor_sin_cos(&r, wp);

    let quadrant = (&k % 4u32).to_i64().unwrap_or(0).rem_euclid(4);
    let (s, c) = match quadrant {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };
    (s >> (wp - w), c >> (wp - w))
}

fn floor_div(n: &BigInt, d: &BigInt) -> BigInt {
    let q = n / d;
    if n.sign() == num_bigint::Sign::Minus && !(n - &q * d).is_zero() {
        q - 1
    } else {
        q
    }
}

/// Taylor series for `|r| <= π/4`.
fn taylor_sin_cos(r: &BigInt, wp: u64) -> (BigInt, BigInt) {
    let r2 = (r * r) >> wp;
    let series = |first: BigInt, start: u64| {
        let mut sum = first.clone();
        let mut term = first;
        let mut k = start;
        loop {
            term = -((&term * &r2) >> wp) / ((k + 1) * (k + 2));
            if term.is_zero() {
                return sum;
            }
            sum += &term;
            k += 2;
        }
    };
    (series(r.clone(), 1), series(BigInt::one() << wp, 0))
}
