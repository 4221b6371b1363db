use super::*;
use crate::config::NumericConfig;
use crate::format::format_number;

/// 30 significant digits at 50-digit working precision.
fn show(f: impl FnOnce() -> BigFloat) -> String {
    with_digits(50, || {
        let config = NumericConfig::<BigFloat>::default()
            .with_precision(30)
            .with_zero_threshold(BigFloat::exp10(-80));
        format_number(f(), &config)
    })
}

fn big(v: f64) -> BigFloat {
    BigFloat::from_f64(v)
}

// ======================== Working precision ========================

#[test]
fn digits_map_to_bits() {
    assert_eq!(digits_to_bits(15), 53);
    assert_eq!(digits_to_bits(20), 70);
    assert_eq!(digits_to_bits(30), 103);
    assert_eq!(digits_to_bits(50), 169);
    assert_eq!(digits_to_bits(100), 336);
}

#[test]
fn with_digits_restores_previous() {
    assert_eq!(working_digits(), DEFAULT_DIGITS);
    with_digits(100, || {
        assert_eq!(working_digits(), 100);
        with_digits(30, || assert_eq!(working_digits(), 30));
        assert_eq!(working_digits(), 100);
    });
    assert_eq!(working_digits(), DEFAULT_DIGITS);
    with_digits(10_000, || assert_eq!(working_digits(), MAX_DIGITS));
}

#[test]
fn epsilon_tracks_precision() {
    let eps20 = with_digits(20, BigFloat::epsilon);
    let eps100 = with_digits(100, BigFloat::epsilon);
    assert_eq!(eps20.to_f64(), 2f64.powi(-69));
    assert!(eps100 < eps20);
    with_digits(100, || {
        let one = BigFloat::one();
        assert!(one + eps100 > one);
        assert_eq!(one + eps100 / BigFloat::from_usize(4), one);
    });
}

// ======================== Arithmetic ========================

#[test]
fn f64_values_convert_exactly() {
    for &v in &[0.0, 1.0, -0.5, 0.1, 1e-300, -123.456, 2f64.powi(60)] {
        assert_eq!(big(v).to_f64(), v);
    }
    assert!(big(f64::NAN).is_nan());
    assert_eq!(big(-0.0), BigFloat::ZERO);
}

#[test]
fn ratios_round_once() {
    assert_eq!(show(|| BigFloat::from_ratio(1, 3)), "0.333333333333333333333333333333");
    assert_eq!(show(|| BigFloat::from_ratio(-2, 3)), "-0.666666666666666666666666666667");
    // 0.1 at working precision, not the nearest f64
    assert_eq!(show(|| BigFloat::from_ratio(1, 10)), "0.1");
    assert_eq!(show(|| big(0.1)), "0.100000000000000005551115123126");
    assert_eq!(show(|| BigFloat::exp10(-22)), "1.0e-22");
    assert_eq!(show(|| BigFloat::exp10(3)), "1000");
}

#[test]
fn arithmetic_identities() {
    with_digits(40, || {
        let third = BigFloat::from_ratio(1, 3);
        let three = BigFloat::from_usize(3);
        let one = BigFloat::one();
        assert!((third * three - one).abs() <= BigFloat::epsilon());
        assert_eq!(third + third - third, third);
        assert_eq!(-(-third), third);
        assert_eq!(third - third, BigFloat::ZERO);
        assert_eq!(big(2.5) * big(-4.0), big(-10.0));
        assert_eq!(big(1.0) / big(8.0), big(0.125));
        assert!((one / BigFloat::ZERO).is_nan());
    });
}

#[test]
fn far_apart_sums_keep_the_larger() {
    with_digits(20, || {
        let one = BigFloat::one();
        let tiny = BigFloat::exp10(-60);
        assert_eq!(one + tiny, one);
        assert_eq!(one - tiny, one);
        assert_eq!(tiny + one, one);
    });
}

#[test]
fn ordering() {
    let values = [big(-3.0), big(-0.25), BigFloat::ZERO, big(1e-40), big(0.5), big(7.0)];
    for pair in values.windows(2) {
        assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
        assert!(pair[1] > pair[0]);
    }
    assert!(BigFloat::NAN.partial_cmp(&BigFloat::ZERO).is_none());
    assert!(BigFloat::NAN != BigFloat::NAN);
    assert_eq!(big(-2.0).abs(), big(2.0));
    assert_eq!(big(-2.0).max(big(1.0)), big(1.0));
}

// ======================== Functions ========================

#[test]
fn constants_and_roots() {
    assert_eq!(show(BigFloat::pi), "3.14159265358979323846264338328");
    assert_eq!(show(|| big(2.0).sqrt()), "1.41421356237309504880168872421");
    assert_eq!(show(|| big(6.25).sqrt()), "2.5");
    assert!(big(-1.0).sqrt().is_nan());
}

#[test]
fn exponential() {
    assert_eq!(show(|| big(1.0).exp()), "2.71828182845904523536028747135");
    assert_eq!(show(|| big(-50.0).exp()), "1.92874984796391778301734281653e-22");
    assert_eq!(show(|| big(225.0).exp()), "5.20305513788485459230202053581e+97");
    assert_eq!(BigFloat::ZERO.exp(), BigFloat::one());
}

#[test]
fn trigonometry() {
    assert_eq!(show(|| big(100.0).sin()), "-0.50636564110975879365655761046");
    assert_eq!(show(|| big(100.0).cos()), "0.862318872287683934101938513951");
    assert_eq!(show(|| big(-7.0).sin()), "-0.656986598718789090396999091594");
    assert_eq!(show(|| big(1.5).cos()), "0.0707372016677029100881898514343");
    assert_eq!(show(|| big(1.0).tan()), "1.55740772465490223050697480746");
    assert_eq!(show(|| BigFloat::exp10(-30).sin()), "1.0e-30");
    assert_eq!(BigFloat::ZERO.sin(), BigFloat::ZERO);
}

#[test]
fn decimal_digits_truncate() {
    with_digits(30, || {
        let (digits, exponent) = BigFloat::from_ratio(2, 3).decimal_digits(5);
        assert_eq!((digits.as_str(), exponent), ("66666", -1));
        let (digits, exponent) = big(-1234.5).decimal_digits(8);
        assert_eq!((digits.as_str(), exponent), ("12345000", 3));
        assert_eq!(BigFloat::ZERO.decimal_digits(4), (String::from("0"), 0));
    });
}

#[test]
fn debug_shows_digits() {
    let text = with_digits(30, || format!("{:?}", big(-0.375)));
    assert!(text.starts_with("-3.75000"), "{text}");
    assert!(text.ends_with("e-1"), "{text}");
}
