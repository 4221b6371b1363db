//! Fixture suites: parameter grids, case rendering and verification.
//!
//! Each [`Suite`] owns one committed fixture file. Generation walks the
//! suite's grid in a fixed order, renders every case independently (in
//! parallel with the `parallel` feature; grid order is preserved either way)
//! and joins the cases with blank lines. The text carries no trailing newline.
//!
//! All values are computed in [`BigFloat`] at the suite's working precision
//! (100 digits for `dist`, 30 for `barycentric`, 50 for `poly`, 20 for the
//! splines) and rounded to 17 significant digits only when rendered.
//!
//! # Example
//!
//! ```
//! use golden_interp::fixture::{verify, Suite};
//!
//! let suite: Suite = "linear".parse().unwrap();
//! assert_eq!(suite.default_path(), "spline/linear.toml");
//!
//! let text = suite.generate().unwrap();
//! assert!(text.starts_with("[[test_cases]]\nfunc = \"f2\"\ndist = \"uniform\"\n"));
//! assert!(verify(suite, &text).is_ok());
//! ```

mod barycentric;
mod dist;
mod poly;
mod spline;
mod verify;


pub use verify::{line_diff, verify};

use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::bigfloat::{with_digits, BigFloat};
use crate::config::NumericConfig;
use crate::dist::{stretch, DistError, Family};
use crate::format::format_array;
use crate::interp::InterpError;
use crate::traits::Real;

/// Errors from generating or verifying a suite.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureError {
    /// A distribution name or shape in the grid did not resolve.
    Dist(DistError),
    /// An interpolant could not be built for a grid case.
    Interp(InterpError),
    /// Regenerated text differs from the committed copy.
    Mismatch { suite: &'static str, diff: String },
    /// No suite has this name.
    UnknownSuite(String),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Dist(e) => write!(f, "distribution: {e}"),
            FixtureError::Interp(e) => write!(f, "interpolation: {e}"),
            FixtureError::Mismatch { suite, diff } => {
                write!(f, "suite '{suite}' differs from the committed fixture:\n{diff}")
            }
            FixtureError::UnknownSuite(name) => write!(f, "unknown suite '{name}'"),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Dist(e) => Some(e),
            FixtureError::Interp(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DistError> for FixtureError {
    fn from(e: DistError) -> Self {
        FixtureError::Dist(e)
    }
}

impl From<InterpError> for FixtureError {
    fn from(e: InterpError) -> Self {
        FixtureError::Interp(e)
    }
}

/// One fixture file and the grid that produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suite {
    /// Every distribution family on `[-1, 1]` for `n = 0..=6`.
    Dist,
    Barycentric,
    Poly,
    Linear,
    Quadratic,
    Step,
}

impl Suite {
    /// All suites in verification order.
    pub const ALL: [Suite; 6] = [
        Suite::Dist,
        Suite::Barycentric,
        Suite::Poly,
        Suite::Linear,
        Suite::Quadratic,
        Suite::Step,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Suite::Dist => "dist",
            Suite::Barycentric => "barycentric",
            Suite::Poly => "poly",
            Suite::Linear => "linear",
            Suite::Quadratic => "quadratic",
            Suite::Step => "step",
        }
    }

    /// Location of the committed fixture relative to the fixture root.
    pub fn default_path(self) -> &'static str {
        match self {
            Suite::Dist => "dist/dist.toml",
            Suite::Barycentric => "misc/barycentric.toml",
            Suite::Poly => "poly/poly.toml",
            Suite::Linear => "spline/linear.toml",
            Suite::Quadratic => "spline/quadratic.toml",
            Suite::Step => "spline/step.toml",
        }
    }

    /// Decimal digits the suite computes with.
    pub fn working_digits(self) -> usize {
        match self {
            Suite::Dist => 100,
            Suite::Barycentric => 30,
            Suite::Poly => 50,
            Suite::Linear | Suite::Quadratic | Suite::Step => 20,
        }
    }

    /// Formatting and tolerance preset the fixture was written with.
    ///
    /// Thresholds are built at the suite's working precision, so `1e-80` is
    /// the 100-digit value, not the nearest `f64`.
    pub fn config(self) -> NumericConfig<BigFloat> {
        let digits = self.working_digits();
        with_digits(digits, || {
            let config = NumericConfig::default().with_working_digits(digits);
            match self {
                Suite::Dist => config.with_zero_threshold(BigFloat::exp10(-80)),
                Suite::Barycentric => config
                    .with_zero_threshold(BigFloat::exp10(-20))
                    .with_epsilon(BigFloat::exp10(-20)),
                Suite::Poly => config.with_zero_threshold(BigFloat::exp10(-40)),
                Suite::Linear | Suite::Quadratic => config.with_zero_threshold(BigFloat::exp10(-18)),
                Suite::Step => config
                    .with_zero_threshold(BigFloat::exp10(-18))
                    .with_epsilon(BigFloat::from_f64(f64::EPSILON)),
            }
        })
    }

    /// Render the whole fixture.
    pub fn generate(self) -> Result<String, FixtureError> {
        let config = self.config();
        info!(
            "generating suite '{}' -> {} at {} digits",
            self.name(),
            self.default_path(),
            config.working_digits
        );
        let cases = match self {
            Suite::Dist => return dist::generate(&config),
            Suite::Barycentric => barycentric::generate(&config)?,
            Suite::Poly => poly::generate(&config)?,
            Suite::Linear => spline::generate_linear(&config)?,
            Suite::Quadratic => spline::generate_quadratic(&config)?,
            Suite::Step => spline::generate_step(&config)?,
        };
        info!("suite '{}': {} cases", self.name(), cases.len());
        Ok(cases.join("\n\n"))
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suite {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suite::ALL
            .into_iter()
            .find(|suite| suite.name() == s)
            .ok_or_else(|| FixtureError::UnknownSuite(s.to_string()))
    }
}

/// Functions sampled at the nodes to produce `Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFunction {
    Exp,
    Sin,
    Cos,
    /// `|x| + x/2 - x²`
    F1,
    /// `-3 sin(10x) + 10 sin(|x| + x/2)`
    F2,
}

impl TestFunction {
    pub const ALL: [TestFunction; 5] = [
        TestFunction::Exp,
        TestFunction::Sin,
        TestFunction::Cos,
        TestFunction::F1,
        TestFunction::F2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TestFunction::Exp => "exp",
            TestFunction::Sin => "sin",
            TestFunction::Cos => "cos",
            TestFunction::F1 => "f1",
            TestFunction::F2 => "f2",
        }
    }

    pub fn eval<T: Real>(self, x: T) -> T {
        match self {
            TestFunction::Exp => x.exp(),
            TestFunction::Sin => x.sin(),
            TestFunction::Cos => x.cos(),
            TestFunction::F1 => x.abs() + x / T::two() - x * x,
            TestFunction::F2 => {
                T::from_f64(-3.0) * (T::from_f64(10.0) * x).sin()
                    + T::from_f64(10.0) * (x.abs() + x / T::two()).sin()
            }
        }
    }
}

/// One point of an interpolation grid. `K` is the spline variant, if any.
#[derive(Debug, Clone, Copy)]
struct GridCase<K = ()> {
    func: TestFunction,
    family: Family<BigFloat>,
    kind: K,
    n: usize,
    a: f64,
    b: f64,
}

impl<K: Copy> GridCase<K> {
    /// Cartesian product in the nesting order func, family, kind, n, interval.
    fn grid(
        funcs: &[TestFunction],
        families: &[Family<BigFloat>],
        kinds: &[K],
        counts: &[usize],
        intervals: &[(f64, f64)],
    ) -> Vec<Self> {
        let mut cases = Vec::new();
        for &func in funcs {
            for &family in families {
                for &kind in kinds {
                    for &n in counts {
                        for &(a, b) in intervals {
                            cases.push(GridCase { func, family, kind, n, a, b });
                        }
                    }
                }
            }
        }
        cases
    }

    /// Stretched nodes `X` and sampled values `Y`.
    fn sample(&self) -> (Vec<BigFloat>, Vec<BigFloat>) {
        let xs = stretch(&self.family.points(self.n), self.lower(), self.upper());
        let ys = xs.iter().map(|&x| self.func.eval(x)).collect();
        (xs, ys)
    }

    /// `nn` uniform query points over the case interval.
    fn queries(&self, nn: usize) -> Vec<BigFloat> {
        stretch(&Family::Uniform.points(nn), self.lower(), self.upper())
    }

    fn lower(&self) -> BigFloat {
        BigFloat::from_f64(self.a)
    }

    fn upper(&self) -> BigFloat {
        BigFloat::from_f64(self.b)
    }

    fn log(&self, suite: Suite, kind: Option<&str>) {
        debug!(
            "{}: {} on {}{} n={} [{}, {}]",
            suite.name(),
            self.func.name(),
            self.family.name(),
            kind.map(|k| format!(" ({k})")).unwrap_or_default(),
            self.n,
            self.a,
            self.b
        );
    }
}

/// Builder for one `[[test_cases]]` table.
struct CaseTable<'a> {
    config: &'a NumericConfig<BigFloat>,
    lines: Vec<String>,
}

impl<'a> CaseTable<'a> {
    fn new(config: &'a NumericConfig<BigFloat>) -> Self {
        Self { config, lines: vec![String::from("[[test_cases]]")] }
    }

    /// `key = "value"`
    fn text(mut self, key: &str, value: &str) -> Self {
        self.lines.push(format!("{key} = \"{value}\""));
        self
    }

    /// `key = [v0, v1, ...]`
    fn array(mut self, key: &str, values: &[BigFloat]) -> Self {
        self.lines.push(format!("{key} = {}", format_array(values, self.config)));
        self
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Render every case at `digits` of working precision, keeping grid order.
/// Stops at the first error.
///
/// The precision is set on whichever thread renders the case.
fn run_cases<P, F>(cases: &[P], digits: usize, render: F) -> Result<Vec<String>, FixtureError>
where
    P: Sync,
    F: Fn(&P) -> Result<String, FixtureError> + Sync + Send,
{
    let render = |case: &P| with_digits(digits, || render(case));

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        cases.par_iter().map(render).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        cases.iter().map(render).collect()
    }
}
