//! Table-free evaluator that root-solves on every call.

use std::fmt;

use crate::bezier::ControlPoints;
use crate::evaluator::{Evaluator, Strategy};
use crate::sample::Sample;

/// Exact evaluator: each [`Evaluator::eval`] runs a full bisection.
///
/// Too slow for high-volume queries; it is the accuracy reference the table
/// strategies are measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Precise {
    points: ControlPoints,
}

impl Precise {
    /// Wrap the control points; nothing is precomputed.
    pub fn new(points: ControlPoints) -> Self {
        tracing::debug!(strategy = %Strategy::Precise, ?points, "built evaluator");
        Self { points }
    }

    /// The curve being evaluated.
    pub fn control_points(&self) -> ControlPoints {
        self.points
    }
}

impl Evaluator for Precise {
    #[inline]
    fn eval(&self, x: u16) -> u16 {
        self.points.solve_y_for_x(x)
    }

    fn samples(&self) -> Vec<Sample> {
        vec![Sample::START, Sample::END]
    }

    fn strategy(&self) -> Strategy {
        Strategy::Precise
    }

    fn footprint(&self) -> usize {
        0
    }
}

impl fmt::Display for Precise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ControlPoints { x0, y0, x1, y1 } = self.points;
        write!(f, "Precise{{({x0}, {y0}), ({x1}, {y1})}}")
    }
}
