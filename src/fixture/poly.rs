//! `poly/poly.toml`: global interpolating polynomials and their coefficients.

use crate::bigfloat::BigFloat;
use crate::config::NumericConfig;
use crate::dist::Family;
use crate::interp::Polynomial;

use super::{run_cases, CaseTable, FixtureError, GridCase, Suite, TestFunction};

const COUNTS: [usize; 3] = [7, 15, 25];
const INTERVALS: [(f64, f64); 2] = [(-2.0, 2.0), (-10.0, 10.0)];
const QUERIES: usize = 23;

fn grid() -> Vec<GridCase> {
    GridCase::grid(
        &TestFunction::ALL,
        &[Family::Uniform, Family::Chebyshev, Family::Chebyshev2],
        &[()],
        &COUNTS,
        &INTERVALS,
    )
}

pub(super) fn generate(config: &NumericConfig<BigFloat>) -> Result<Vec<String>, FixtureError> {
    run_cases(&grid(), config.working_digits, |case| render(case, config))
}

fn render(case: &GridCase, config: &NumericConfig<BigFloat>) -> Result<String, FixtureError> {
    case.log(Suite::Poly, None);
    let (xs, ys) = case.sample();
    let poly = Polynomial::interpolate(&xs, &ys)?;
    let xx = case.queries(QUERIES);
    let yy = poly.eval_sorted(&xx);

    Ok(CaseTable::new(config)
        .text("func", case.func.name())
        .text("dist", case.family.name())
        .array("X", &xs)
        .array("Y", &ys)
        .array("coeffs", poly.coefficients())
        .array("xx", &xx)
        .array("yy", &yy)
        .finish())
}
