//! Explicit (x, y) knots sampled uniformly in t.
//!
//! Each knot is an exact point of the curve, so no root solve is needed to
//! place it; evaluation finds the bracketing pair with a binary search on x.

use std::fmt;

use crate::bezier::ControlPoints;
use crate::evaluator::{Evaluator, Strategy, normalize_steps};
use crate::fixed::FIXED_MAX;
use crate::sample::{Sample, write_samples};

/// Interior knots at `t = i / (steps - 1)`, `i = 1..=steps-2`.
///
/// Knots that do not strictly advance in x after quantization, or that land on
/// the end anchor, are skipped so the list stays strictly increasing.
fn interior_knots(points: &ControlPoints, steps: u16) -> Vec<Sample> {
    let divisions = f64::from(steps - 1);
    let mut knots: Vec<Sample> = Vec::with_capacity(usize::from(steps));
    let mut last_x = 0;
    for i in 1..=steps - 2 {
        let knot = Sample::quantize(points.point_at(f64::from(i) / divisions));
        if knot.x <= last_x || knot.x == FIXED_MAX {
            tracing::trace!(
                index = i,
                x = knot.x,
                "skipping knot that does not advance in x"
            );
            continue;
        }
        last_x = knot.x;
        knots.push(knot);
    }
    knots
}

/// Knots stored without the anchors.
///
/// # Example
///
/// ```
/// use ease_curves::{ControlPoints, Evaluator, PointsTrimmed};
///
/// let points = PointsTrimmed::new(ControlPoints::ease_out(), 6);
/// assert_eq!(points.len(), 4);
/// assert_eq!(points.eval(1000), 1633);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointsTrimmed {
    points: Vec<Sample>,
}

impl PointsTrimmed {
    /// Sample the curve; `steps` below 3 uses the default.
    pub fn new(points: ControlPoints, steps: u16) -> Self {
        let steps = normalize_steps(steps);
        let points = interior_knots(&points, steps);

        tracing::debug!(
            strategy = %Strategy::PointsTrimmed,
            steps,
            entries = points.len(),
            "built evaluator"
        );
        Self { points }
    }

    /// Number of stored knots.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when every interior knot was skipped.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Stored knots, anchors excluded.
    pub fn points(&self) -> &[Sample] {
        &self.points
    }
}

impl Evaluator for PointsTrimmed {
    #[inline]
    fn eval(&self, x: u16) -> u16 {
        let i = self.points.partition_point(|p| p.x <= x);
        let lo = i
            .checked_sub(1)
            .and_then(|j| self.points.get(j))
            .copied()
            .unwrap_or(Sample::START);
        let hi = self.points.get(i).copied().unwrap_or(Sample::END);
        lo.lerp(hi, x)
    }

    fn samples(&self) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(self.points.len() + 2);
        samples.push(Sample::START);
        samples.extend_from_slice(&self.points);
        samples.push(Sample::END);
        samples
    }

    fn strategy(&self) -> Strategy {
        Strategy::PointsTrimmed
    }

    fn footprint(&self) -> usize {
        std::mem::size_of_val(self.points.as_slice())
    }
}

impl fmt::Display for PointsTrimmed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_samples(f, "PointsTrimmed", self.samples())
    }
}

/// Knots stored with both anchors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointsFull {
    points: Vec<Sample>,
}

impl PointsFull {
    /// Sample the curve; `steps` below 3 uses the default.
    pub fn new(points: ControlPoints, steps: u16) -> Self {
        let steps = normalize_steps(steps);
        let mut knots = Vec::with_capacity(usize::from(steps));
        knots.push(Sample::START);
        knots.extend(interior_knots(&points, steps));
        knots.push(Sample::END);

        tracing::debug!(
            strategy = %Strategy::PointsFull,
            steps,
            entries = knots.len(),
            "built evaluator"
        );
        Self { points: knots }
    }

    /// Number of stored knots, anchors included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Stored knots, anchors included.
    pub fn points(&self) -> &[Sample] {
        &self.points
    }
}

impl Evaluator for PointsFull {
    #[inline]
    fn eval(&self, x: u16) -> u16 {
        // The start anchor has x = 0, so `i >= 1`.
        let i = self.points.partition_point(|p| p.x <= x);
        let lo = i.checked_sub(1).and_then(|j| self.points.get(j));
        match (lo, self.points.get(i)) {
            (Some(lo), Some(hi)) => lo.lerp(*hi, x),
            (Some(lo), None) => lo.y,
            (None, _) => 0,
        }
    }

    fn samples(&self) -> Vec<Sample> {
        self.points.clone()
    }

    fn strategy(&self) -> Strategy {
        Strategy::PointsFull
    }

    fn footprint(&self) -> usize {
        std::mem::size_of_val(self.points.as_slice())
    }
}

impl fmt::Display for PointsFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_samples(f, "PointsFull", self.points.iter().copied())
    }
}
