//! Serializable description of an evaluator.

use serde::{Deserialize, Serialize};

use crate::bezier::ControlPoints;
use crate::error::EaseError;
use crate::evaluator::{EaseEvaluator, Strategy, build};

/// Everything needed to build an evaluator, in a form that can live in a
/// settings file.
///
/// Missing fields fall back to the default strategy, the CSS `ease` curve and
/// the default step count.
///
/// # Example
///
/// ```
/// use ease_curves::{EaseConfig, Evaluator, Strategy};
///
/// let config: EaseConfig = serde_json::from_str(
///     r#"{ "strategy": "table-full", "control_points": { "x0": 0.42, "y0": 0.0, "x1": 0.58, "y1": 1.0 } }"#,
/// )?;
/// assert_eq!(config.strategy, Strategy::TableFull);
///
/// let ease = config.build()?;
/// assert_eq!(ease.eval(65535), 65535);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EaseConfig {
    /// Evaluator to build.
    pub strategy: Strategy,
    /// Curve shape.
    pub control_points: ControlPoints,
    /// Table resolution; values below 3 select the default.
    pub steps: u16,
}

impl EaseConfig {
    /// Create a configuration.
    pub const fn new(strategy: Strategy, control_points: ControlPoints, steps: u16) -> Self {
        Self {
            strategy,
            control_points,
            steps,
        }
    }

    /// Check that the configured curve is a function of x.
    ///
    /// # Errors
    ///
    /// Returns [`EaseError::ControlPointOutOfRange`] for a bad control point.
    pub fn validate(&self) -> Result<(), EaseError> {
        self.control_points.validate()
    }

    /// Validate, then build the evaluator.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate`].
    pub fn build(&self) -> Result<EaseEvaluator, EaseError> {
        self.validate()?;
        Ok(build(self.strategy, self.control_points, self.steps))
    }

    /// Build without validating. Never fails.
    pub fn build_unchecked(&self) -> EaseEvaluator {
        build(self.strategy, self.control_points, self.steps)
    }
}

impl TryFrom<&str> for EaseConfig {
    type Error = EaseError;

    /// Parse a configuration from JSON.
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EaseError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
