//! `dist/dist.toml`: raw node sets of every family on `[-1, 1]`.

use crate::bigfloat::BigFloat;
use crate::config::NumericConfig;
use crate::dist::{Distribution, ShapeKind};
use crate::format::{format_array, format_number};
use crate::traits::Real;

use super::{run_cases, FixtureError, Suite};

const MAX_N: usize = 6;
const A: i64 = -1;
const B: i64 = 1;

/// Values used for both `ratio` and `steepness`, as exact fractions so 0.1
/// is the working-precision tenth.
const SHAPES: [(i64, i64); 7] = [(1, 10), (1, 4), (1, 2), (1, 1), (2, 1), (4, 1), (10, 1)];

/// Intervals consumers map the unit sets onto; emitted as a header only.
const MAPPING_INTERVALS: [(i32, i32); 5] =
    [(0, 1), (-2, 2), (-1000, -900), (1000, 2000), (-9999, 9999)];

/// Sections in file order, with the shape parameter each one takes.
const SECTIONS: [(&str, ShapeKind); 11] = [
    ("uniform", ShapeKind::None),
    ("chebyshev", ShapeKind::None),
    ("chebyshev_stretched", ShapeKind::None),
    ("chebyshev_ellipse", ShapeKind::Ratio),
    ("chebyshev_ellipse_stretched", ShapeKind::Ratio),
    ("circle_proj", ShapeKind::None),
    ("ellipse_proj", ShapeKind::Ratio),
    ("sigmoid", ShapeKind::Steepness),
    ("sigmoid_stretched", ShapeKind::Steepness),
    ("erf", ShapeKind::Steepness),
    ("erf_stretched", ShapeKind::Steepness),
];

pub(super) fn generate(config: &NumericConfig<BigFloat>) -> Result<String, FixtureError> {
    let sections = run_cases(&SECTIONS, config.working_digits, |&(name, kind)| {
        section(name, kind, config)
    })?;
    Ok(format!("{}\n\n{}", header(), sections.join("\n\n")))
}

pub(super) fn header() -> String {
    let rows: Vec<String> = MAPPING_INTERVALS
        .iter()
        .map(|(a, b)| format!("\t[{a}, {b}],"))
        .collect();
    format!("mapping_intervals = [\n{}\n]", rows.join("\n"))
}

/// `[name]` followed by one row per `n` (and per shape value).
fn section(
    name: &str,
    kind: ShapeKind,
    config: &NumericConfig<BigFloat>,
) -> Result<String, FixtureError> {
    log::debug!("{}: section [{name}]", Suite::Dist.name());
    let shapes: Vec<Option<BigFloat>> = match kind {
        ShapeKind::None => vec![None],
        ShapeKind::Ratio | ShapeKind::Steepness => SHAPES
            .iter()
            .map(|&(num, den)| Some(BigFloat::from_ratio(num, den)))
            .collect(),
    };

    let mut rows = Vec::with_capacity((MAX_N + 1) * shapes.len());
    for n in 0..=MAX_N {
        for &shape in &shapes {
            let dist = Distribution::parse(name, shape)?;
            rows.push(row(n, &dist, config));
        }
    }
    Ok(format!("[{name}]\ntest_cases = [\n{}\n]", rows.join("\n")))
}

/// `\t{ n = N, a = A, b = B[, key=V], expected = [...] },`
pub(super) fn row(
    n: usize,
    dist: &Distribution<BigFloat>,
    config: &NumericConfig<BigFloat>,
) -> String {
    let shape = match (dist.family.shape_kind().key(), dist.family.shape()) {
        (Some(key), Some(value)) => format!(", {key}={}", format_number(value, config)),
        _ => String::new(),
    };
    format!(
        "\t{{ n = {n}, a = {}, b = {}{shape}, expected = {} }},",
        format_number(BigFloat::from_ratio(A, 1), config),
        format_number(BigFloat::from_ratio(B, 1), config),
        format_array(&dist.points(n), config),
    )
}
