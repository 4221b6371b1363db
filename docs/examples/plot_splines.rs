// Spline comparison: sin(x) on 7 Chebyshev-Lobatto knots over [0, 2π].
// Prints JSON with knot points and 200 evaluation points for five methods:
//   {"kx":[...], "ky":[...], "x":[...], "y_true":[...], "y_linear":[...],
//    "y_quadratic":[...], "y_step":[...], "y_barycentric":[...], "y_poly":[...]}

use golden_interp::dist::{stretch, Family};
use golden_interp::interp::{
    Barycentric, LinearSpline, Polynomial, QuadraticBoundary, QuadraticSpline, StepKind,
    StepSpline,
};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tau = 2.0 * std::f64::consts::PI;
    let family = Family::Chebyshev2;
    let kx = stretch(&family.points(7), 0.0, tau);
    let ky: Vec<f64> = kx.iter().map(|x| x.sin()).collect();

    let linear = LinearSpline::new(&kx, &ky)?;
    let quadratic = QuadraticSpline::new(&kx, &ky, QuadraticBoundary::SemiNotAKnot)?;
    let step = StepSpline::new(&kx, &ky, StepKind::Middle)?;
    let barycentric = Barycentric::for_family(&family, kx.clone(), ky.clone())?;
    let poly = Polynomial::interpolate(&kx, &ky)?;

    // ascending, so the forward-scan evaluation applies
    let x = stretch(&Family::Uniform.points(200), 0.0, tau);
    let y_true: Vec<f64> = x.iter().map(|x| x.sin()).collect();

    println!(
        "{{\"kx\":{},\"ky\":{},\"x\":{},\"y_true\":{},\"y_linear\":{},\"y_quadratic\":{},\"y_step\":{},\"y_barycentric\":{},\"y_poly\":{}}}",
        fmt_arr(&kx),
        fmt_arr(&ky),
        fmt_arr(&x),
        fmt_arr(&y_true),
        fmt_arr(&linear.eval_sorted(&x)),
        fmt_arr(&quadratic.eval_sorted(&x)),
        fmt_arr(&step.eval_sorted(&x, f64::EPSILON)),
        fmt_arr(&barycentric.eval_sorted(&x, 1e-20)),
        fmt_arr(&poly.eval_sorted(&x)),
    );
    Ok(())
}
