use alloc::vec::Vec;
use core::str::FromStr;

use crate::traits::Real;

use super::{find_interval, validate, InterpError, SegmentCursor};

/// Which node value a step segment takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Left,
    /// Mean of both node values.
    Middle,
    Right,
}

impl StepKind {
    pub fn name(self) -> &'static str {
        match self {
            StepKind::Left => "left",
            StepKind::Middle => "middle",
            StepKind::Right => "right",
        }
    }
}

impl FromStr for StepKind {
    type Err = InterpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(StepKind::Left),
            "middle" => Ok(StepKind::Middle),
            "right" => Ok(StepKind::Right),
            _ => Err(InterpError::UnknownVariant),
        }
    }
}

/// Piecewise constant spline.
///
/// A query within `epsilon` of either end of its segment returns that node's
/// value whatever the kind; elsewhere the [`StepKind`] picks the value.
/// Requires at least 2 points.
#[derive(Debug, Clone)]
pub struct StepSpline<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    kind: StepKind,
}

impl<T: Real> StepSpline<T> {
    pub fn new(xs: &[T], ys: &[T], kind: StepKind) -> Result<Self, InterpError> {
        validate(xs, ys, 2)?;
        Ok(Self { xs: xs.to_vec(), ys: ys.to_vec(), kind })
    }

    /// Evaluate the spline at `x`.
    pub fn eval(&self, x: T, epsilon: T) -> T {
        self.eval_segment(find_interval(&self.xs, x), x, epsilon)
    }

    /// Evaluate an ascending batch of queries with a forward-only cursor.
    pub fn eval_sorted(&self, xx: &[T], epsilon: T) -> Vec<T> {
        let mut cursor = SegmentCursor::default();
        xx.iter()
            .map(|&x| self.eval_segment(cursor.advance(&self.xs, x), x, epsilon))
            .collect()
    }

    fn eval_segment(&self, i: usize, x: T, epsilon: T) -> T {
        let (left, right) = (self.ys[i], self.ys[i + 1]);
        if (x - self.xs[i]).abs() < epsilon {
            return left;
        }
        if (x - self.xs[i + 1]).abs() < epsilon {
            return right;
        }
        match self.kind {
            StepKind::Left => left,
            StepKind::Middle => (left + right) / T::two(),
            StepKind::Right => right,
        }
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }
}
