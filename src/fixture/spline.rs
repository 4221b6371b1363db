//! `spline/{linear,quadratic,step}.toml`: `f2` sampled on 11 nodes of each
//! distribution over `(-10, 10)`, queried at 23 ascending points.

use crate::bigfloat::BigFloat;
use crate::config::NumericConfig;
use crate::dist::Family;
use crate::interp::{LinearSpline, QuadraticBoundary, QuadraticSpline, StepKind, StepSpline};

use super::{run_cases, CaseTable, FixtureError, GridCase, Suite, TestFunction};

const FAMILIES: [Family<BigFloat>; 3] = [Family::Uniform, Family::Chebyshev, Family::Chebyshev2];
const COUNT: usize = 11;
const INTERVAL: (f64, f64) = (-10.0, 10.0);
const QUERIES: usize = 23;

fn grid<K: Copy>(kinds: &[K]) -> Vec<GridCase<K>> {
    GridCase::grid(&[TestFunction::F2], &FAMILIES, kinds, &[COUNT], &[INTERVAL])
}

pub(super) fn generate_linear(config: &NumericConfig<BigFloat>) -> Result<Vec<String>, FixtureError> {
    run_cases(&grid(&[()]), config.working_digits, |case| {
        case.log(Suite::Linear, None);
        let (xs, ys) = case.sample();
        let spline = LinearSpline::new(&xs, &ys)?;
        let xx = case.queries(QUERIES);
        let yy = spline.eval_sorted(&xx);

        Ok(CaseTable::new(config)
            .text("func", case.func.name())
            .text("dist", case.family.name())
            .array("X", &xs)
            .array("Y", &ys)
            .array("coeffs", &spline.flat_coefficients())
            .array("xx", &xx)
            .array("yy", &yy)
            .finish())
    })
}

pub(super) fn generate_quadratic(
    config: &NumericConfig<BigFloat>,
) -> Result<Vec<String>, FixtureError> {
    let boundaries = [QuadraticBoundary::SemiNotAKnot, QuadraticBoundary::SemiNatural];
    run_cases(&grid(&boundaries), config.working_digits, |case| {
        case.log(Suite::Quadratic, Some(case.kind.name()));
        let (xs, ys) = case.sample();
        let spline = QuadraticSpline::new(&xs, &ys, case.kind)?;
        let xx = case.queries(QUERIES);
        let yy = spline.eval_sorted(&xx);

        Ok(CaseTable::new(config)
            .text("func", case.func.name())
            .text("dist", case.family.name())
            .text("type", case.kind.name())
            .array("X", &xs)
            .array("Y", &ys)
            .array("coeffs", &spline.flat_coefficients())
            .array("xx", &xx)
            .array("yy", &yy)
            .finish())
    })
}

pub(super) fn generate_step(config: &NumericConfig<BigFloat>) -> Result<Vec<String>, FixtureError> {
    let kinds = [StepKind::Left, StepKind::Middle, StepKind::Right];
    run_cases(&grid(&kinds), config.working_digits, |case| {
        case.log(Suite::Step, Some(case.kind.name()));
        let (xs, ys) = case.sample();
        let spline = StepSpline::new(&xs, &ys, case.kind)?;
        let xx = case.queries(QUERIES);
        let yy = spline.eval_sorted(&xx, config.epsilon);

        Ok(CaseTable::new(config)
            .text("func", case.func.name())
            .text("dist", case.family.name())
            .text("type", case.kind.name())
            .array("X", &xs)
            .array("Y", &ys)
            .array("xx", &xx)
            .array("yy", &yy)
            .finish())
    })
}
