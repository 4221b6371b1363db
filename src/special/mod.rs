//! Special functions used by the point distributions.
//!
//! Only the error function is needed: the `erf` family maps uniform samples
//! through `erf(s·u)`. Generic over [`Real`], no-std compatible.
//!
//! # Example
//!
//! ```
//! use golden_interp::special::erf;
//!
//! assert!(erf(0.0_f64).abs() < 1e-16);
//! assert!((erf(1.0_f64) - 0.8427007929497149).abs() < 1e-13);
//! ```

mod erf_fn;


pub use erf_fn::erf;
