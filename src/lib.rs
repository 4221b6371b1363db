//! # golden-interp
//!
//! Golden reference fixtures for numeric interpolation. The crate computes
//! point distributions on `[-1, 1]`, barycentric and global polynomial
//! interpolants, and piecewise splines of degree 0, 1 and 2, then renders the
//! results as TOML-like fixture text with a fixed number formatter. The
//! `golden` binary writes each suite to disk and verifies committed copies
//! against a fresh regeneration.
//!
//! ## Quick start
//!
//! ```
//! use golden_interp::dist::{stretch, Family};
//! use golden_interp::interp::Barycentric;
//! use golden_interp::{format_array, NumericConfig};
//!
//! let xs = stretch(&Family::Chebyshev2.points(5), -2.0_f64, 2.0);
//! let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
//! let interp = Barycentric::for_family(&Family::Chebyshev2, xs, ys).unwrap();
//!
//! let config = NumericConfig::default().with_zero_threshold(1e-20);
//! let yy = interp.eval_sorted(&[-2.0, 0.0, 2.0], config.epsilon);
//! assert_eq!(format_array(&yy, &config), "[4, 0, 4]");
//! ```
//!
//! ## Modules
//!
//! - [`dist`]: distribution families (`uniform`, `chebyshev*`,
//!   `chebyshev_ellipse*`, projections, `sigmoid`, `logistic`, `erf`), their
//!   stretched and augmented forms, and the affine [`dist::stretch`].
//!
//! - [`interp`]: [`Barycentric`](interp::Barycentric) with closed-form
//!   weights, [`Polynomial`](interp::Polynomial) in monomial form, and the
//!   [`LinearSpline`](interp::LinearSpline),
//!   [`QuadraticSpline`](interp::QuadraticSpline) and
//!   [`StepSpline`](interp::StepSpline) builders.
//!
//! - [`format`]: [`format_number`] / [`format_array`].
//!
//! - [`special`]: the error function used by the `erf` family.
//!
//! - [`fixture`]: the suites (`dist`, `barycentric`, `poly`, `linear`,
//!   `quadratic`, `step`), their grids and test functions, and verification.
//!   Requires `std`.
//!
//! - [`bigfloat`]: [`BigFloat`](bigfloat::BigFloat), an arbitrary-precision
//!   [`Real`] whose working precision is set per thread in decimal digits.
//!   The suites compute on it. Requires `std`.
//!
//! - [`traits`]: the [`Real`] element trait, implemented for `f32`, `f64` and
//!   `BigFloat`.
//!
//! ## Cargo features
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `std`      | yes     | Hardware FPU via system libm, `BigFloat`, fixture suites |
//! | `libm`     | no      | Pure-Rust float functions for `no_std` builds |
//! | `parallel` | yes     | Fan suite cases out over `rayon` |
//! | `cli`      | yes     | The `golden` binary (`clap`, `anyhow`, `env_logger`) |
//! | `all`      | no      | Everything above |
//!
//! A `no_std` build needs `libm` for the `f32`/`f64` transcendental functions.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("enable either the `std` or the `libm` feature");

#[cfg(feature = "std")]
pub mod bigfloat;
pub mod config;
pub mod dist;
#[cfg(feature = "std")]
pub mod fixture;
pub mod format;
pub mod interp;
pub mod special;
pub mod traits;

pub use config::NumericConfig;
pub use dist::{DistError, Distribution, Family};
pub use format::{format_array, format_number};
pub use interp::InterpError;
pub use traits::Real;

#[cfg(feature = "std")]
pub use bigfloat::BigFloat;
#[cfg(feature = "std")]
pub use fixture::{FixtureError, Suite};
