//! y-only tables solved at uniform x positions.
//!
//! Unlike the points family, the x of every knot is implied by its index, so
//! only y is stored. `TableFull` keeps the anchors in the table, `TableTrimmed`
//! drops them and recreates them during evaluation.

use std::fmt;
use std::ops::RangeInclusive;

use crate::bezier::ControlPoints;
use crate::evaluator::{Evaluator, Strategy, normalize_steps};
use crate::fixed::{FIXED_MAX, interpolate, to_fixed16};
use crate::sample::{Sample, write_samples};

const DOMAIN: u64 = FIXED_MAX as u64;

/// Quantized curve y at `x = k / divisions` for every `k` in `knots`.
pub(crate) fn solve_on_grid(
    points: &ControlPoints,
    divisions: u16,
    knots: RangeInclusive<u16>,
) -> impl Iterator<Item = u16> + '_ {
    let divisions = f64::from(divisions);
    knots.map(move |k| to_fixed16(points.y_for_x(f64::from(k) / divisions)))
}

/// Table of `steps` y values at `x = i / (steps - 1)`, anchors included.
///
/// Same knots as [`UniformLut`](crate::UniformLut) without the trailing
/// sentinel; `eval(65535)` takes an explicit branch instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableFull {
    table: Vec<u16>,
}

impl TableFull {
    /// Solve the table for `points`; `steps` below 3 uses the default.
    pub fn new(points: ControlPoints, steps: u16) -> Self {
        let steps = normalize_steps(steps);
        let mut table = Vec::with_capacity(usize::from(steps));
        table.push(0);
        table.extend(solve_on_grid(&points, steps - 1, 1..=steps - 2));
        table.push(FIXED_MAX);

        tracing::debug!(
            strategy = %Strategy::TableFull,
            steps,
            entries = table.len(),
            "built evaluator"
        );
        Self { table }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Raw table.
    pub fn table(&self) -> &[u16] {
        &self.table
    }

    fn cells(&self) -> u64 {
        self.table.len().saturating_sub(1) as u64
    }
}

impl Evaluator for TableFull {
    #[inline]
    fn eval(&self, x: u16) -> u16 {
        let cells = self.cells();
        let x = u64::from(x);
        let k = x * cells / DOMAIN;
        if k >= cells {
            return FIXED_MAX;
        }

        let i = k as usize;
        let lo_x = k * DOMAIN / cells;
        let hi_x = (k + 1) * DOMAIN / cells;
        match self.table.get(i..=i + 1) {
            Some(&[lo, hi]) => interpolate(lo_x, lo, hi_x, hi, x),
            _ => FIXED_MAX,
        }
    }

    fn samples(&self) -> Vec<Sample> {
        let cells = self.cells();
        self.table
            .iter()
            .enumerate()
            .map(|(i, &y)| Sample::new((i as u64 * DOMAIN / cells) as u16, y))
            .collect()
    }

    fn strategy(&self) -> Strategy {
        Strategy::TableFull
    }

    fn footprint(&self) -> usize {
        std::mem::size_of_val(self.table.as_slice())
    }
}

impl fmt::Display for TableFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_samples(f, "TableFull", self.samples())
    }
}

/// Table of `steps - 2` y values at `x = k / steps`, `k = 1..=steps-2`.
///
/// The anchors are implied. The grid has `steps` cells but only `steps - 2`
/// interior knots are stored, so the last interval runs from the last knot
/// straight to `(65535, 65535)` and spans two cells.
///
/// # Example
///
/// ```
/// use ease_curves::{ControlPoints, Evaluator, TableTrimmed};
///
/// let table = TableTrimmed::new(ControlPoints::ease_out(), 6);
/// assert_eq!(table.table(), &[17061, 32004, 44868, 55301]);
/// assert_eq!(table.eval(1000), 1562);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableTrimmed {
    table: Vec<u16>,
}

impl TableTrimmed {
    /// Solve the table for `points`; `steps` below 3 uses the default.
    pub fn new(points: ControlPoints, steps: u16) -> Self {
        let steps = normalize_steps(steps);
        let table: Vec<u16> = solve_on_grid(&points, steps, 1..=steps - 2).collect();

        tracing::debug!(
            strategy = %Strategy::TableTrimmed,
            steps,
            entries = table.len(),
            "built evaluator"
        );
        Self { table }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false; at least one interior knot is stored.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Raw table, anchors excluded.
    pub fn table(&self) -> &[u16] {
        &self.table
    }

    fn cells(&self) -> u64 {
        self.table.len() as u64 + 2
    }

    /// y of grid knot `k`; knot 0 is the start anchor.
    fn knot(&self, k: u64) -> u16 {
        match k.checked_sub(1) {
            None => 0,
            Some(i) => self.table.get(i as usize).copied().unwrap_or(FIXED_MAX),
        }
    }
}

impl Evaluator for TableTrimmed {
    #[inline]
    fn eval(&self, x: u16) -> u16 {
        let cells = self.cells();
        let last = cells - 2;
        let x = u64::from(x);
        let k = (x * cells / DOMAIN).min(last);

        let (hi_x, hi_y) = if k == last {
            (DOMAIN, FIXED_MAX)
        } else {
            ((k + 1) * DOMAIN / cells, self.knot(k + 1))
        };
        interpolate(k * DOMAIN / cells, self.knot(k), hi_x, hi_y, x)
    }

    fn samples(&self) -> Vec<Sample> {
        let cells = self.cells();
        let mut samples = Vec::with_capacity(self.table.len() + 2);
        samples.push(Sample::START);
        samples.extend(
            self.table
                .iter()
                .enumerate()
                .map(|(i, &y)| Sample::new(((i as u64 + 1) * DOMAIN / cells) as u16, y)),
        );
        samples.push(Sample::END);
        samples
    }

    fn strategy(&self) -> Strategy {
        Strategy::TableTrimmed
    }

    fn footprint(&self) -> usize {
        std::mem::size_of_val(self.table.as_slice())
    }
}

/// Lists the stored entries one per slot, spread evenly between the anchors.
///
/// The slots are not the knot positions used by [`Evaluator::eval`]; use
/// [`Evaluator::samples`] for those.
impl fmt::Display for TableTrimmed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.table.len() as u64 + 1;
        let entries = self
            .table
            .iter()
            .enumerate()
            .map(|(i, &y)| Sample::new(((i as u64 + 1) * DOMAIN / slots) as u16, y));
        let samples = std::iter::once(Sample::START)
            .chain(entries)
            .chain(std::iter::once(Sample::END));
        write_samples(f, "TableTrimmed", samples)
    }
}
