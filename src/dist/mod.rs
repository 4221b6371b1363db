//! Point distributions on `[-1, 1]` and the affine interval stretch.
//!
//! A [`Family`] is one closed-form node formula, carrying the shape parameter
//! it needs (ellipse `ratio` or sigmoid/erf `steepness`). A [`Distribution`]
//! pairs a family with a [`Shaping`]: the raw formula, the formula stretched
//! back onto `[-1, 1]`, or the formula on `n - 2` points augmented with the
//! endpoints `-1` and `1`.
//!
//! Every family returns `[]` for `n == 0` and `[0]` for `n == 1`.
//!
//! # Example
//!
//! ```
//! use golden_interp::dist::{stretch, Distribution};
//!
//! let uniform = Distribution::<f64>::parse("uniform", None).unwrap();
//! assert_eq!(uniform.points(5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
//!
//! let unit = stretch(&uniform.points(5), 0.0, 1.0);
//! assert_eq!(unit, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//!
//! let ellipse = Distribution::parse("chebyshev_ellipse_stretched", Some(2.0_f64)).unwrap();
//! assert_eq!(ellipse.name(), "chebyshev_ellipse_stretched");
//! ```

mod family;
mod stretch;


pub use stretch::stretch;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::traits::Real;

/// Errors from resolving a distribution name and shape parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistError {
    /// The name matches no family.
    UnknownFamily,
    /// The family needs a ratio or steepness and none was given.
    MissingShape,
    /// The family takes no shape parameter but one was given.
    UnexpectedShape,
    /// The shape parameter is not a finite positive number.
    InvalidShape,
}

impl fmt::Display for DistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFamily => write!(f, "unknown distribution family"),
            Self::MissingShape => write!(f, "distribution requires a shape parameter"),
            Self::UnexpectedShape => write!(f, "distribution takes no shape parameter"),
            Self::InvalidShape => write!(f, "shape parameter must be finite and positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DistError {}

/// Which shape parameter a family takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    None,
    /// Ellipse aspect ratio.
    Ratio,
    /// Sigmoid / erf sharpening factor.
    Steepness,
}

impl ShapeKind {
    /// Key used for the parameter in fixture tables.
    pub fn key(self) -> Option<&'static str> {
        match self {
            ShapeKind::None => None,
            ShapeKind::Ratio => Some("ratio"),
            ShapeKind::Steepness => Some("steepness"),
        }
    }
}

/// A node formula. See the module docs for the table of formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Family<T> {
    Uniform,
    Quadratic,
    Cubic,
    Chebyshev,
    Chebyshev2,
    Chebyshev3,
    Chebyshev4,
    ChebyshevEllipse { ratio: T },
    ChebyshevEllipse2 { ratio: T },
    ChebyshevEllipse3 { ratio: T },
    ChebyshevEllipse4 { ratio: T },
    CircleProj,
    EllipseProj { ratio: T },
    Sigmoid { steepness: T },
    Logistic { steepness: T },
    Erf { steepness: T },
}

impl<T: Real> Family<T> {
    /// Resolve a family by name, validating the shape parameter against it.
    pub fn from_name(name: &str, shape: Option<T>) -> Result<Self, DistError> {
        let family = match name {
            "uniform" => Family::Uniform,
            "quadratic" => Family::Quadratic,
            "cubic" => Family::Cubic,
            "chebyshev" => Family::Chebyshev,
            "chebyshev_2" => Family::Chebyshev2,
            "chebyshev_3" => Family::Chebyshev3,
            "chebyshev_4" => Family::Chebyshev4,
            "circle_proj" => Family::CircleProj,
            "chebyshev_ellipse" => Family::ChebyshevEllipse { ratio: positive(shape)? },
            "chebyshev_ellipse_2" => Family::ChebyshevEllipse2 { ratio: positive(shape)? },
            "chebyshev_ellipse_3" => Family::ChebyshevEllipse3 { ratio: positive(shape)? },
            "chebyshev_ellipse_4" => Family::ChebyshevEllipse4 { ratio: positive(shape)? },
            "ellipse_proj" => Family::EllipseProj { ratio: positive(shape)? },
            "sigmoid" => Family::Sigmoid { steepness: positive(shape)? },
            "logistic" => Family::Logistic { steepness: positive(shape)? },
            "erf" => Family::Erf { steepness: positive(shape)? },
            _ => return Err(DistError::UnknownFamily),
        };
        if family.shape_kind() == ShapeKind::None && shape.is_some() {
            return Err(DistError::UnexpectedShape);
        }
        Ok(family)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Family::Uniform => "uniform",
            Family::Quadratic => "quadratic",
            Family::Cubic => "cubic",
            Family::Chebyshev => "chebyshev",
            Family::Chebyshev2 => "chebyshev_2",
            Family::Chebyshev3 => "chebyshev_3",
            Family::Chebyshev4 => "chebyshev_4",
            Family::ChebyshevEllipse { .. } => "chebyshev_ellipse",
            Family::ChebyshevEllipse2 { .. } => "chebyshev_ellipse_2",
            Family::ChebyshevEllipse3 { .. } => "chebyshev_ellipse_3",
            Family::ChebyshevEllipse4 { .. } => "chebyshev_ellipse_4",
            Family::CircleProj => "circle_proj",
            Family::EllipseProj { .. } => "ellipse_proj",
            Family::Sigmoid { .. } => "sigmoid",
            Family::Logistic { .. } => "logistic",
            Family::Erf { .. } => "erf",
        }
    }

    pub fn shape_kind(&self) -> ShapeKind {
        match self {
            Family::ChebyshevEllipse { .. }
            | Family::ChebyshevEllipse2 { .. }
            | Family::ChebyshevEllipse3 { .. }
            | Family::ChebyshevEllipse4 { .. }
            | Family::EllipseProj { .. } => ShapeKind::Ratio,
            Family::Sigmoid { .. } | Family::Logistic { .. } | Family::Erf { .. } => {
                ShapeKind::Steepness
            }
            _ => ShapeKind::None,
        }
    }

    /// The ratio or steepness carried by the variant, if any.
    pub fn shape(&self) -> Option<T> {
        match *self {
            Family::ChebyshevEllipse { ratio }
            | Family::ChebyshevEllipse2 { ratio }
            | Family::ChebyshevEllipse3 { ratio }
            | Family::ChebyshevEllipse4 { ratio }
            | Family::EllipseProj { ratio } => Some(ratio),
            Family::Sigmoid { steepness }
            | Family::Logistic { steepness }
            | Family::Erf { steepness } => Some(steepness),
            _ => None,
        }
    }

    /// The `n` raw nodes of this family.
    pub fn points(&self, n: usize) -> Vec<T> {
        match n {
            0 => Vec::new(),
            1 => alloc::vec![T::zero()],
            _ => family::points(self, n),
        }
    }
}

fn positive<T: Real>(shape: Option<T>) -> Result<T, DistError> {
    let s = shape.ok_or(DistError::MissingShape)?;
    if s.is_finite() && s > T::zero() {
        Ok(s)
    } else {
        Err(DistError::InvalidShape)
    }
}

/// Post-processing applied on top of a family's raw nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shaping {
    Raw,
    /// Raw nodes stretched onto `[-1, 1]`.
    Stretched,
    /// `[-1] + family(n - 2) + [1]`.
    Augmented,
}

impl Shaping {
    fn suffix(self) -> &'static str {
        match self {
            Shaping::Raw => "",
            Shaping::Stretched => "_stretched",
            Shaping::Augmented => "_augmented",
        }
    }
}

/// A family together with its shaping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution<T> {
    pub family: Family<T>,
    pub shaping: Shaping,
}

impl<T: Real> From<Family<T>> for Distribution<T> {
    fn from(family: Family<T>) -> Self {
        Self::new(family, Shaping::Raw)
    }
}

impl<T: Real> Distribution<T> {
    pub fn new(family: Family<T>, shaping: Shaping) -> Self {
        Self { family, shaping }
    }

    /// Resolve names such as `"erf"`, `"sigmoid_stretched"` or
    /// `"chebyshev_augmented"`.
    pub fn parse(name: &str, shape: Option<T>) -> Result<Self, DistError> {
        let (base, shaping) = if let Some(base) = name.strip_suffix("_stretched") {
            (base, Shaping::Stretched)
        } else if let Some(base) = name.strip_suffix("_augmented") {
            (base, Shaping::Augmented)
        } else {
            (name, Shaping::Raw)
        };
        Ok(Self::new(Family::from_name(base, shape)?, shaping))
    }

    /// Canonical name, the inverse of [`parse`](Self::parse).
    pub fn name(&self) -> String {
        let mut name = String::from(self.family.name());
        name.push_str(self.shaping.suffix());
        name
    }

    /// The `n` nodes of this distribution.
    pub fn points(&self, n: usize) -> Vec<T> {
        match self.shaping {
            Shaping::Raw => self.family.points(n),
            Shaping::Stretched => stretch(&self.family.points(n), -T::one(), T::one()),
            Shaping::Augmented => match n {
                0 => Vec::new(),
                1 => alloc::vec![T::zero()],
                _ => {
                    let mut points = Vec::with_capacity(n);
                    points.push(-T::one());
                    points.extend(self.family.points(n - 2));
                    points.push(T::one());
                    points
                }
            },
        }
    }
}
