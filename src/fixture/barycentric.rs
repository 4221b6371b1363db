//! `misc/barycentric.toml`: barycentric interpolation of `f2` on `(-10, 10)`.

use crate::bigfloat::BigFloat;
use crate::config::NumericConfig;
use crate::dist::Family;
use crate::interp::Barycentric;

use super::{run_cases, CaseTable, FixtureError, GridCase, Suite, TestFunction};

const INTERVAL: (f64, f64) = (-10.0, 10.0);
const QUERIES: usize = 101;

/// Uniform nodes at n = 9, both Chebyshev kinds at higher counts.
fn grid() -> Vec<GridCase> {
    let mut cases = GridCase::grid(&[TestFunction::F2], &[Family::Uniform], &[()], &[9], &[INTERVAL]);
    cases.extend(GridCase::grid(
        &[TestFunction::F2],
        &[Family::Chebyshev, Family::Chebyshev2],
        &[()],
        &[49, 99, 199],
        &[INTERVAL],
    ));
    cases
}

pub(super) fn generate(config: &NumericConfig<BigFloat>) -> Result<Vec<String>, FixtureError> {
    run_cases(&grid(), config.working_digits, |case| render(case, config))
}

fn render(case: &GridCase, config: &NumericConfig<BigFloat>) -> Result<String, FixtureError> {
    case.log(Suite::Barycentric, None);
    let (xs, ys) = case.sample();
    let xx = case.queries(QUERIES);
    let interp = Barycentric::for_family(&case.family, xs, ys)?;
    let yy = interp.eval_sorted(&xx, config.epsilon);

    Ok(CaseTable::new(config)
        .text("func", case.func.name())
        .text("dist", case.family.name())
        .array("X", interp.xs())
        .array("Y", interp.ys())
        .array("xx", &xx)
        .array("yy", &yy)
        .finish())
}
