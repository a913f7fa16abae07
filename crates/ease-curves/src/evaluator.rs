//! Evaluation contract shared by every strategy, and strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bezier::ControlPoints;
use crate::error::EaseError;
use crate::lut::UniformLut;
use crate::points::{PointsFull, PointsTrimmed};
use crate::precise::Precise;
use crate::sample::Sample;
use crate::table::{TableFull, TableTrimmed};

/// Step count used when the requested one is below [`MIN_STEPS`].
pub const DEFAULT_STEPS: u16 = 32;

/// Smallest step count a table can be built with.
pub const MIN_STEPS: u16 = 3;

/// Replace a step count below [`MIN_STEPS`] with [`DEFAULT_STEPS`].
///
/// Construction never fails on a bad step count; it is silently corrected.
///
/// ```
/// use ease_curves::{DEFAULT_STEPS, normalize_steps};
///
/// assert_eq!(normalize_steps(0), DEFAULT_STEPS);
/// assert_eq!(normalize_steps(2), DEFAULT_STEPS);
/// assert_eq!(normalize_steps(3), 3);
/// ```
#[inline]
pub fn normalize_steps(steps: u16) -> u16 {
    if steps < MIN_STEPS {
        tracing::debug!(
            requested = steps,
            used = DEFAULT_STEPS,
            "steps below minimum, using default"
        );
        DEFAULT_STEPS
    } else {
        steps
    }
}

/// A y = f(x) ease function over the 16-bit fixed-point domain.
///
/// Implementations are immutable after construction, so they are `Send + Sync`
/// and can be shared between any number of readers.
pub trait Evaluator: Send + Sync {
    /// Approximate y for `x`.
    ///
    /// Total over `u16`; `eval(0) == 0` and `eval(65535) == 65535` always hold.
    fn eval(&self, x: u16) -> u16;

    /// The (x, y) knots the evaluator interpolates between, anchors included.
    fn samples(&self) -> Vec<Sample>;

    /// Which strategy this evaluator implements.
    fn strategy(&self) -> Strategy;

    /// Bytes of owned table storage.
    fn footprint(&self) -> usize;
}

/// Construction/evaluation strategy.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Root-solve on every call, no table. Ground truth for comparisons.
    Precise,
    /// y-only table on a uniform x grid with a trailing sentinel.
    #[default]
    #[serde(rename = "lut")]
    UniformLut,
    /// Explicit knots at uniform t, anchors implied.
    PointsTrimmed,
    /// Explicit knots at uniform t, anchors stored.
    PointsFull,
    /// y-only table solved at uniform x, anchors implied.
    TableTrimmed,
    /// y-only table solved at uniform x, anchors stored.
    TableFull,
}

impl Strategy {
    /// Every strategy, Precise first.
    pub const ALL: [Self; 6] = [
        Self::Precise,
        Self::UniformLut,
        Self::PointsTrimmed,
        Self::PointsFull,
        Self::TableTrimmed,
        Self::TableFull,
    ];

    /// Accepted names, in the order of [`Self::ALL`].
    pub const NAMES: [&'static str; 6] = [
        Self::Precise.name(),
        Self::UniformLut.name(),
        Self::PointsTrimmed.name(),
        Self::PointsFull.name(),
        Self::TableTrimmed.name(),
        Self::TableFull.name(),
    ];

    /// Kebab-case name of the strategy.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Precise => "precise",
            Self::UniformLut => "lut",
            Self::PointsTrimmed => "points-trimmed",
            Self::PointsFull => "points-full",
            Self::TableTrimmed => "table-trimmed",
            Self::TableFull => "table-full",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = EaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EaseError::UnknownStrategy(s.to_string()))
    }
}

/// Any of the evaluators, selected at construction time.
///
/// # Example
///
/// ```
/// use ease_curves::{ControlPoints, Evaluator, Strategy, build};
///
/// let curve = ControlPoints::ease_in_out();
/// for strategy in Strategy::ALL {
///     let evaluator = build(strategy, curve, 16);
///     assert_eq!(evaluator.eval(0), 0);
///     assert_eq!(evaluator.eval(65535), 65535);
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum EaseEvaluator {
    /// See [`Precise`].
    Precise(Precise),
    /// See [`UniformLut`].
    UniformLut(UniformLut),
    /// See [`PointsTrimmed`].
    PointsTrimmed(PointsTrimmed),
    /// See [`PointsFull`].
    PointsFull(PointsFull),
    /// See [`TableTrimmed`].
    TableTrimmed(TableTrimmed),
    /// See [`TableFull`].
    TableFull(TableFull),
}

impl EaseEvaluator {
    fn as_dyn(&self) -> &dyn Evaluator {
        match self {
            Self::Precise(e) => e,
            Self::UniformLut(e) => e,
            Self::PointsTrimmed(e) => e,
            Self::PointsFull(e) => e,
            Self::TableTrimmed(e) => e,
            Self::TableFull(e) => e,
        }
    }
}

impl Evaluator for EaseEvaluator {
    // Matched directly so the hot path avoids a vtable call.
    #[inline]
    fn eval(&self, x: u16) -> u16 {
        match self {
            Self::Precise(e) => e.eval(x),
            Self::UniformLut(e) => e.eval(x),
            Self::PointsTrimmed(e) => e.eval(x),
            Self::PointsFull(e) => e.eval(x),
            Self::TableTrimmed(e) => e.eval(x),
            Self::TableFull(e) => e.eval(x),
        }
    }

    fn samples(&self) -> Vec<Sample> {
        self.as_dyn().samples()
    }

    fn strategy(&self) -> Strategy {
        self.as_dyn().strategy()
    }

    fn footprint(&self) -> usize {
        self.as_dyn().footprint()
    }
}

impl fmt::Display for EaseEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precise(e) => fmt::Display::fmt(e, f),
            Self::UniformLut(e) => fmt::Display::fmt(e, f),
            Self::PointsTrimmed(e) => fmt::Display::fmt(e, f),
            Self::PointsFull(e) => fmt::Display::fmt(e, f),
            Self::TableTrimmed(e) => fmt::Display::fmt(e, f),
            Self::TableFull(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Build an evaluator for `points` with the given strategy.
///
/// `steps` below [`MIN_STEPS`] falls back to [`DEFAULT_STEPS`]; `Precise`
/// ignores it. Never fails.
pub fn build(strategy: Strategy, points: ControlPoints, steps: u16) -> EaseEvaluator {
    match strategy {
        Strategy::Precise => EaseEvaluator::Precise(Precise::new(points)),
        Strategy::UniformLut => EaseEvaluator::UniformLut(UniformLut::new(points, steps)),
        Strategy::PointsTrimmed => EaseEvaluator::PointsTrimmed(PointsTrimmed::new(points, steps)),
        Strategy::PointsFull => EaseEvaluator::PointsFull(PointsFull::new(points, steps)),
        Strategy::TableTrimmed => EaseEvaluator::TableTrimmed(TableTrimmed::new(points, steps)),
        Strategy::TableFull => EaseEvaluator::TableFull(TableFull::new(points, steps)),
    }
}
