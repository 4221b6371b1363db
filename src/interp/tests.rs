use super::*;
use crate::dist::{stretch, Family};
use alloc::vec;
use crate::traits::Real;
use alloc::vec::Vec;

fn f2<T: Real>(x: T) -> T {
    let three = T::from_usize(3);
    let ten = T::from_usize(10);
    -three * (ten * x).sin() + ten * (x.abs() + x * T::half()).sin()
}

fn nodes(family: Family<f64>, n: usize, a: f64, b: f64) -> Vec<f64> {
    stretch(&family.points(n), a, b)
}

fn queries(nn: usize, a: f64, b: f64) -> Vec<f64> {
    nodes(Family::Uniform, nn, a, b)
}

// ======================== Barycentric ========================

#[test]
fn weights_uniform_binomial() {
    let ws = barycentric_weights(&Family::<f64>::Uniform, 5).unwrap();
    assert_eq!(ws, vec![1.0, -4.0, 6.0, -4.0, 1.0]);
    let ws9 = barycentric_weights(&Family::<f64>::Uniform, 9).unwrap();
    assert_eq!(ws9[4], 70.0);
    assert_eq!(ws9[3], -56.0);
}

#[test]
fn weights_chebyshev() {
    let n = 4;
    let ws = barycentric_weights(&Family::<f64>::Chebyshev, n).unwrap();
    for (k, w) in ws.iter().enumerate() {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        let expected = sign * ((2 * k + 1) as f64 * core::f64::consts::PI / 8.0).sin();
        assert!((w - expected).abs() < 1e-15);
    }
}

#[test]
fn weights_chebyshev_2() {
    let ws = barycentric_weights(&Family::<f64>::Chebyshev2, 5).unwrap();
    assert_eq!(ws, vec![0.5, -1.0, 1.0, -1.0, 0.5]);
    let ws2 = barycentric_weights(&Family::<f64>::Chebyshev2, 2).unwrap();
    assert_eq!(ws2, vec![0.5, -0.5]);
}

#[test]
fn weights_unsupported_family() {
    let r = barycentric_weights(&Family::Erf { steepness: 1.0_f64 }, 5);
    assert_eq!(r.unwrap_err(), InterpError::UnsupportedFamily);
    let r = Barycentric::for_family(&Family::<f64>::Cubic, vec![0.0, 1.0], vec![0.0, 1.0]);
    assert_eq!(r.unwrap_err(), InterpError::UnsupportedFamily);
}

#[test]
fn barycentric_exact_at_nodes() {
    for family in [Family::Uniform, Family::Chebyshev, Family::Chebyshev2] {
        let xs = nodes(family, 9, -10.0, 10.0);
        let ys: Vec<f64> = xs.iter().map(|&x| f2(x)).collect();
        let interp = Barycentric::for_family(&family, xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            assert_eq!(interp.eval(*x, 1e-20), *y);
        }
    }
}

#[test]
fn barycentric_reproduces_polynomials() {
    // degree ≤ n-1 polynomials are reproduced by every weight family
    let p = |x: f64| 0.5 * x * x * x - x + 2.0;
    for family in [Family::Uniform, Family::Chebyshev, Family::Chebyshev2] {
        let xs = nodes(family, 6, -2.0, 2.0);
        let ys: Vec<f64> = xs.iter().map(|&x| p(x)).collect();
        let interp = Barycentric::for_family(&family, xs, ys).unwrap();
        for &x in &queries(23, -2.0, 2.0) {
            let err = (interp.eval(x, 1e-20) - p(x)).abs();
            assert!(err < 1e-12, "{family:?} at {x}: {err}");
        }
    }
}

#[test]
fn barycentric_epsilon_snaps() {
    let interp = Barycentric::for_family(
        &Family::<f64>::Uniform,
        vec![-1.0, 0.0, 1.0],
        vec![5.0, 7.0, 11.0],
    )
    .unwrap();
    assert_eq!(interp.eval(1e-12, 1e-9), 7.0);
    assert_ne!(interp.eval(1e-12, 1e-20), 7.0);
}

#[test]
fn barycentric_single_node() {
    let interp = Barycentric::for_family(&Family::<f64>::Uniform, vec![0.0], vec![3.0]).unwrap();
    assert_eq!(interp.eval(0.7, 1e-20), 3.0);
}

#[test]
fn barycentric_length_errors() {
    assert_eq!(
        Barycentric::<f64>::new(vec![0.0, 1.0], vec![0.0], vec![1.0, -1.0]).unwrap_err(),
        InterpError::LengthMismatch
    );
    assert_eq!(
        Barycentric::<f64>::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![1.0]).unwrap_err(),
        InterpError::LengthMismatch
    );
    assert_eq!(
        Barycentric::<f64>::new(vec![], vec![], vec![]).unwrap_err(),
        InterpError::TooFewPoints
    );
}

// ======================== Polynomial ========================

#[test]
fn polynomial_recovers_coefficients() {
    // 2x³ - x + 3
    let xs = [-2.0_f64, -0.5, 1.0, 2.0];
    let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x * x * x - x + 3.0).collect();
    let p = Polynomial::interpolate(&xs, &ys).unwrap();
    assert_eq!(p.degree(), 3);
    let expected = [2.0, 0.0, -1.0, 3.0];
    for (c, e) in p.coefficients().iter().zip(&expected) {
        assert!((c - e).abs() < 1e-13, "{:?}", p.coefficients());
    }
}

#[test]
fn polynomial_passes_through_nodes() {
    for family in [Family::Uniform, Family::Chebyshev, Family::Chebyshev2] {
        let xs = nodes(family, 7, -2.0, 2.0);
        let ys: Vec<f64> = xs.iter().map(|&x| x.exp()).collect();
        let p = Polynomial::interpolate(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            let err = (p.eval(*x) - y).abs();
            assert!(err < 1e-12 * y.abs().max(1.0), "{family:?}: {err}");
        }
    }
}

#[test]
fn polynomial_agrees_with_barycentric() {
    let xs = nodes(Family::Chebyshev, 7, -2.0, 2.0);
    let ys: Vec<f64> = xs.iter().map(|&x| x.sin()).collect();
    let p = Polynomial::interpolate(&xs, &ys).unwrap();
    let b = Barycentric::for_family(&Family::Chebyshev, xs, ys).unwrap();
    let xx = queries(23, -2.0, 2.0);
    for (pv, bv) in p.eval_sorted(&xx).iter().zip(b.eval_sorted(&xx, 1e-20)) {
        assert!((pv - bv).abs() < 1e-12);
    }
}

#[cfg(feature = "std")]
#[test]
fn polynomial_degree_24_reproduces_nodes() {
    use crate::bigfloat::{with_digits, BigFloat};

    with_digits(50, || {
        let ten = BigFloat::from_usize(10);
        for family in [Family::Uniform, Family::Chebyshev, Family::Chebyshev2] {
            let xs = stretch(&family.points(25), -ten, ten);
            let ys: Vec<BigFloat> = xs.iter().map(|&x| f2(x)).collect();
            let p = Polynomial::interpolate(&xs, &ys).unwrap();
            assert_eq!(p.degree(), 24);

            let scale = ys.iter().fold(BigFloat::ZERO, |m, y| m.max(y.abs()));
            let worst = xs
                .iter()
                .zip(&ys)
                .fold(BigFloat::ZERO, |m, (&x, &y)| m.max((p.eval(x) - y).abs()));
            assert!(worst / scale < BigFloat::exp10(-30), "{family:?}: {worst:?}");
        }
    });
}

#[test]
fn polynomial_constant_and_horner() {
    let p = Polynomial::interpolate(&[4.0_f64], &[-2.5]).unwrap();
    assert_eq!(p.coefficients(), &[-2.5]);
    assert_eq!(p.eval(100.0), -2.5);

    let q = Polynomial::from_coefficients(vec![1.0_f64, -3.0, 0.0, 2.0]);
    assert_eq!(q.eval(2.0), 8.0 - 12.0 + 2.0);
}

#[test]
fn polynomial_errors() {
    assert_eq!(
        Polynomial::<f64>::interpolate(&[], &[]).unwrap_err(),
        InterpError::TooFewPoints
    );
    assert_eq!(
        Polynomial::interpolate(&[0.0_f64, 1.0], &[1.0]).unwrap_err(),
        InterpError::LengthMismatch
    );
}

// ======================== Segment lookup ========================

#[test]
fn cursor_matches_binary_search_for_sorted_queries() {
    let xs = nodes(Family::Chebyshev2, 11, -10.0, 10.0);
    let mut cursor = SegmentCursor::default();
    for &x in &queries(23, -10.0, 10.0) {
        assert_eq!(cursor.advance(&xs, x), find_interval(&xs, x), "x = {x}");
    }
}

#[test]
fn cursor_never_moves_back() {
    let xs = [0.0_f64, 1.0, 2.0, 3.0];
    let mut cursor = SegmentCursor::default();
    assert_eq!(cursor.advance(&xs, 2.5), 2);
    // unsorted follow-up query stays on the later segment
    assert_eq!(cursor.advance(&xs, 0.5), 2);
    assert_eq!(find_interval(&xs, 0.5), 0);
}

#[test]
fn lookup_clamps() {
    let xs = [0.0_f64, 1.0, 2.0];
    assert_eq!(find_interval(&xs, -5.0), 0);
    assert_eq!(find_interval(&xs, 2.0), 1);
    assert_eq!(find_interval(&xs, 9.0), 1);
    assert_eq!(find_interval(&xs, 1.0), 1);
    let mut cursor = SegmentCursor::default();
    assert_eq!(cursor.advance(&xs, 9.0), 1);
}

// ======================== Linear ========================

#[test]
fn linear_scenario() {
    let spline = LinearSpline::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
    assert_eq!(spline.eval(0.5), 0.5);
    assert_eq!(spline.eval(1.5), 0.5);
    assert_eq!(spline.eval_sorted(&[0.5, 1.5]), vec![0.5, 0.5]);
    assert_eq!(spline.flat_coefficients(), vec![1.0, 0.0, -1.0, 1.0]);
}

#[test]
fn linear_passes_through_nodes() {
    let xs = nodes(Family::Chebyshev, 11, -10.0, 10.0);
    let ys: Vec<f64> = xs.iter().map(|&x| f2(x)).collect();
    let spline = LinearSpline::new(&xs, &ys).unwrap();
    let at_nodes = spline.eval_sorted(&xs);
    for (k, (v, y)) in at_nodes.iter().zip(&ys).enumerate() {
        let err = (v - y).abs();
        assert!(err < 1e-13, "node {k}: {v} vs {y}");
    }
}

#[test]
fn linear_extrapolates_boundary_segments() {
    let spline = LinearSpline::new(&[1.0_f64, 2.0, 3.0], &[1.0, 3.0, 2.0]).unwrap();
    assert_eq!(spline.eval(0.0), -1.0);
    assert_eq!(spline.eval(4.0), 1.0);
    assert_eq!(spline.segments().len(), 2);
}

#[test]
fn linear_too_few_points() {
    assert_eq!(
        LinearSpline::new(&[1.0_f64], &[2.0]).unwrap_err(),
        InterpError::TooFewPoints
    );
}

// ======================== Quadratic ========================

fn assert_c1(spline: &QuadraticSpline<f64>, xs: &[f64], ys: &[f64]) {
    let segs = spline.segments();
    for i in 0..segs.len() {
        let h = xs[i + 1] - xs[i];
        let [a, b, c] = segs[i];
        assert!((c - ys[i]).abs() < 1e-12, "value at left of segment {i}");
        let right = (a * h + b) * h + c;
        assert!((right - ys[i + 1]).abs() < 1e-10, "value at right of segment {i}");
        if i + 1 < segs.len() {
            let slope_out = 2.0 * a * h + b;
            let slope_in = segs[i + 1][1];
            assert!(
                (slope_out - slope_in).abs() < 1e-10 * slope_in.abs().max(1.0),
                "derivative jump at knot {}: {slope_out} vs {slope_in}",
                i + 1
            );
        }
    }
}

#[test]
fn quadratic_c1_both_boundaries() {
    for family in [Family::Uniform, Family::Chebyshev, Family::Chebyshev2] {
        let xs = nodes(family, 11, -10.0, 10.0);
        let ys: Vec<f64> = xs.iter().map(|&x| f2(x)).collect();
        for boundary in [QuadraticBoundary::SemiNatural, QuadraticBoundary::SemiNotAKnot] {
            let spline = QuadraticSpline::new(&xs, &ys, boundary).unwrap();
            assert_eq!(spline.segments().len(), 10);
            assert_c1(&spline, &xs, &ys);
        }
    }
}

#[test]
fn quadratic_semi_natural_on_line() {
    let xs = [0.0_f64, 1.0, 3.0, 4.0];
    let ys = [1.0, 3.0, 7.0, 9.0]; // y = 2x + 1
    let spline = QuadraticSpline::new(&xs, &ys, QuadraticBoundary::SemiNatural).unwrap();
    for seg in spline.segments() {
        assert!(seg[0].abs() < 1e-14);
        assert!((seg[1] - 2.0).abs() < 1e-14);
    }
    assert!((spline.eval(2.0) - 5.0).abs() < 1e-14);
}

#[test]
fn quadratic_semi_not_a_knot_reproduces_parabola() {
    let xs = nodes(Family::Chebyshev, 8, -3.0, 5.0);
    let p = |x: f64| 0.75 * x * x - 2.0 * x + 0.5;
    let ys: Vec<f64> = xs.iter().map(|&x| p(x)).collect();
    let spline = QuadraticSpline::new(&xs, &ys, QuadraticBoundary::SemiNotAKnot).unwrap();
    let xx = queries(23, -3.0, 5.0);
    for (x, v) in xx.iter().zip(spline.eval_sorted(&xx)) {
        assert!((v - p(*x)).abs() < 1e-11, "at {x}: {v}");
    }
}

#[test]
fn quadratic_is_mean_of_sweeps() {
    // unit spacing, secant slopes s0 = 1, s1 = -1
    let xs = [0.0_f64, 1.0, 2.0];
    let ys = [0.0, 1.0, 0.0];
    let spline = QuadraticSpline::new(&xs, &ys, QuadraticBoundary::SemiNatural).unwrap();
    let (s0, s1) = (1.0, -1.0);
    let fwd = [[0.0, s0, 0.0], [(s1 - s0) / 1.0, s0, 1.0]];
    let bwd = [[(s1 - s0) / 1.0, 2.0 * s0 - s1, 0.0], [0.0, s1, 1.0]];
    for i in 0..2 {
        for k in 0..3 {
            assert_eq!(spline.segments()[i][k], (fwd[i][k] + bwd[i][k]) / 2.0);
        }
    }
    assert_eq!(
        spline.flat_coefficients(),
        vec![-1.0, 2.0, 0.0, -1.0, 0.0, 1.0]
    );
}

#[test]
fn quadratic_boundary_names() {
    assert_eq!(
        "semi-not-a-knot".parse::<QuadraticBoundary>(),
        Ok(QuadraticBoundary::SemiNotAKnot)
    );
    assert_eq!(
        "semi-natural".parse::<QuadraticBoundary>(),
        Ok(QuadraticBoundary::SemiNatural)
    );
    assert_eq!(
        "natural".parse::<QuadraticBoundary>(),
        Err(InterpError::UnknownVariant)
    );
    assert_eq!(QuadraticBoundary::SemiNotAKnot.name(), "semi-not-a-knot");
}

#[test]
fn quadratic_too_few_points() {
    let r = QuadraticSpline::new(&[0.0_f64, 1.0], &[0.0, 1.0], QuadraticBoundary::SemiNotAKnot);
    assert_eq!(r.unwrap_err(), InterpError::TooFewPoints);
    let ok = QuadraticSpline::new(&[0.0_f64, 1.0], &[0.0, 1.0], QuadraticBoundary::SemiNatural);
    assert!((ok.unwrap().eval(0.25) - 0.25).abs() < 1e-15);
}

// ======================== Step ========================

#[test]
fn step_scenario() {
    let xs = [0.0_f64, 1.0, 2.0];
    let ys = [10.0, 20.0, 30.0];
    let eps = f64::EPSILON;
    let left = StepSpline::new(&xs, &ys, StepKind::Left).unwrap();
    let middle = StepSpline::new(&xs, &ys, StepKind::Middle).unwrap();
    let right = StepSpline::new(&xs, &ys, StepKind::Right).unwrap();
    assert_eq!(left.eval(0.9, eps), 10.0);
    assert_eq!(middle.eval(0.9, eps), 15.0);
    assert_eq!(right.eval(0.9, eps), 20.0);
}

#[test]
fn step_exact_match_overrides_kind() {
    let xs = [0.0_f64, 1.0, 2.0];
    let ys = [10.0, 20.0, 30.0];
    for kind in [StepKind::Left, StepKind::Middle, StepKind::Right] {
        let spline = StepSpline::new(&xs, &ys, kind).unwrap();
        assert_eq!(
            spline.eval_sorted(&[0.0, 1.0, 2.0], f64::EPSILON),
            vec![10.0, 20.0, 30.0],
            "{kind:?}"
        );
        // within epsilon of the right node of segment 0
        assert_eq!(spline.eval(1.0 - 1e-13, 1e-12), 20.0);
    }
}

#[test]
fn step_sorted_batch() {
    let xs = [0.0_f64, 1.0, 2.0, 4.0];
    let ys = [1.0, 2.0, 3.0, 5.0];
    let spline = StepSpline::new(&xs, &ys, StepKind::Right).unwrap();
    let out = spline.eval_sorted(&[0.5, 1.5, 3.0, 3.9], f64::EPSILON);
    assert_eq!(out, vec![2.0, 3.0, 5.0, 5.0]);
    assert_eq!(spline.kind(), StepKind::Right);
}

#[test]
fn step_kind_names() {
    for kind in [StepKind::Left, StepKind::Middle, StepKind::Right] {
        assert_eq!(kind.name().parse::<StepKind>(), Ok(kind));
    }
    assert_eq!("center".parse::<StepKind>(), Err(InterpError::UnknownVariant));
}
