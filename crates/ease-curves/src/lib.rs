//! Fixed-Point Cubic Bezier Ease Curves
//!
//! This crate maps a 16-bit input `x` to a 16-bit output `y` along a cubic
//! Bezier ease curve anchored at `(0,0)` and `(1,1)`, the same shape as CSS
//! `cubic-bezier(x0, y0, x1, y1)`. Both axes use the fixed-point domain
//! `0..=65535`.
//!
//! # Overview
//!
//! Every evaluator implements [`Evaluator`]. Strategies differ in what they
//! precompute:
//! - **Precise**: no table, root-solves on every call. The accuracy reference.
//! - **UniformLut**: y-only table on a uniform x grid plus a sentinel entry.
//!   The default.
//! - **PointsTrimmed / PointsFull**: explicit (x, y) knots sampled at uniform
//!   t, with or without the anchors stored.
//! - **TableTrimmed / TableFull**: y-only tables solved at uniform x, with or
//!   without the anchors stored.
//!
//! # Guarantees
//!
//! - Construction never fails. A step count below [`MIN_STEPS`] is replaced
//!   by [`DEFAULT_STEPS`].
//! - `eval(0) == 0` and `eval(65535) == 65535` for every strategy and curve.
//! - Evaluation is total over `u16` and uses exact integer interpolation, so
//!   table strategies give identical results on every platform.
//! - Evaluators are immutable and `Send + Sync`.
//!
//! Curves whose x control coordinates leave `[0,1]` may not be functions of
//! x; evaluators still return values for them, but those values carry no
//! meaning. [`ControlPoints::validate`] and [`EaseConfig::build`] reject such
//! curves.
//!
//! # Example
//!
//! ```
//! use ease_curves::{ControlPoints, Evaluator, Strategy, build};
//!
//! // Build once
//! let ease = build(Strategy::UniformLut, ControlPoints::ease_out(), 6);
//!
//! // Evaluate many times
//! assert_eq!(ease.eval(0), 0);
//! assert_eq!(ease.eval(1000), 1541);
//! assert_eq!(ease.eval(65535), 65535);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bezier;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod fixed;
pub mod lut;
pub mod points;
pub mod precise;
pub mod prelude;
pub mod sample;
pub mod table;

pub use bezier::ControlPoints;
pub use config::EaseConfig;
pub use error::EaseError;
pub use evaluator::{
    DEFAULT_STEPS, EaseEvaluator, Evaluator, MIN_STEPS, Strategy, build, normalize_steps,
};
pub use fixed::{FIXED_MAX, from_fixed16, to_fixed16};
pub use lut::UniformLut;
pub use points::{PointsFull, PointsTrimmed};
pub use precise::Precise;
pub use sample::Sample;
pub use table::{TableFull, TableTrimmed};
