//! Decimal rendering of fixture values.
//!
//! Values are rounded to `precision` significant digits: the first
//! `precision + 3` digits of the exact value are taken and the digit after
//! position `precision` rounds half up. Trailing zeros are then stripped.
//! The layout follows the conventions the committed fixtures were written
//! with: fixed notation for moderate exponents, `d.ddde±E` otherwise, a bare
//! `0` for anything below the zero threshold, and no trailing `.0` on
//! integers.
//!
//! # Example
//!
//! ```
//! use golden_interp::{format_number, NumericConfig};
//!
//! let config = NumericConfig::<f64>::default();
//! assert_eq!(format_number(-0.5, &config), "-0.5");
//! assert_eq!(format_number(2.0, &config), "2");
//! assert_eq!(format_number(0.1, &config), "0.10000000000000001");
//! assert_eq!(format_number(1e-19, &config), "0");
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::config::NumericConfig;
use crate::traits::Real;

/// Render a single value.
pub fn format_number<T: Real>(x: T, config: &NumericConfig<T>) -> String {
    if x.is_nan() {
        return String::from("nan");
    }
    if x.is_infinite() {
        return String::from(if x > T::zero() { "+inf" } else { "-inf" });
    }
    if x.abs() < config.zero_threshold {
        return String::from("0");
    }

    let precision = config.precision.max(1);
    let (digits, exponent) = significant_digits(x.abs(), precision);
    let body = layout(&digits, exponent, precision);
    if x < T::zero() {
        format!("-{body}")
    } else {
        body
    }
}

/// Render a slice as `[v0, v1, ...]`.
pub fn format_array<T: Real>(values: &[T], config: &NumericConfig<T>) -> String {
    let mut out = String::with_capacity(values.len() * 24 + 2);
    out.push('[');
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format_number(v, config));
    }
    out.push(']');
    out
}

/// Digit string (no trailing zeros, at least one digit) and the decimal
/// exponent of its first digit, rounded to `precision` significant digits.
fn significant_digits<T: Real>(ax: T, precision: usize) -> (String, i32) {
    let (raw, mut exponent) = ax.decimal_digits(precision + 3);
    let raw = raw.as_bytes();
    let mut digits: Vec<u8> = raw.iter().copied().take(precision).collect();
    digits.resize(precision, b'0');

    if raw.get(precision).is_some_and(|&d| d >= b'5') {
        match digits.iter().rposition(|&d| d != b'9') {
            Some(i) => {
                digits[i] += 1;
                digits[i + 1..].fill(b'0');
            }
            None => {
                // 99..9 carries into a new leading digit
                digits.fill(b'0');
                digits[0] = b'1';
                exponent += 1;
            }
        }
    }

    let len = digits.iter().rposition(|&d| d != b'0').map_or(1, |i| i + 1);
    (digits[..len].iter().map(|&d| char::from(d)).collect(), exponent)
}

fn layout(digits: &str, exponent: i32, precision: usize) -> String {
    let max_fixed = precision as i32;
    let min_fixed = (-(max_fixed / 3)).min(-5);

    if min_fixed < exponent && exponent < max_fixed {
        if exponent < 0 {
            let zeros = "0".repeat((-exponent - 1) as usize);
            return format!("0.{zeros}{digits}");
        }
        let split = exponent as usize + 1;
        if digits.len() <= split {
            let pad = "0".repeat(split - digits.len());
            return format!("{digits}{pad}");
        }
        return format!("{}.{}", &digits[..split], &digits[split..]);
    }

    let (lead, rest) = digits.split_at(1);
    let rest = if rest.is_empty() { "0" } else { rest };
    if exponent >= 0 {
        format!("{lead}.{rest}e+{exponent}")
    } else {
        format!("{lead}.{rest}e{exponent}")
    }
}
