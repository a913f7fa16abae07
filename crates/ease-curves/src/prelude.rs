//! Prelude for the ease curves crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use ease_curves::prelude::*;
//!
//! let ease = build(Strategy::UniformLut, ControlPoints::ease_in_out(), 0);
//! let y = ease.eval(32768);
//! assert!(y > 30000 && y < 35000);
//! ```

pub use crate::bezier::ControlPoints;
pub use crate::config::EaseConfig;
pub use crate::error::EaseError;
pub use crate::evaluator::{EaseEvaluator, Evaluator, Strategy, build};
pub use crate::sample::Sample;
