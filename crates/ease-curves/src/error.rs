//! Error types for the fallible edges of the crate.
//!
//! Building and evaluating a curve never fails. These errors only come from
//! parsing strategy names, validating configurations and the opt-in control
//! point check.

/// Error type for ease curve configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EaseError {
    /// Strategy name did not match any known evaluator.
    #[error("Unknown strategy '{0}', expected one of: {expected}", expected = crate::evaluator::Strategy::NAMES.join(", "))]
    UnknownStrategy(String),

    /// Control point coordinate would break the x-monotonic assumption.
    ///
    /// The x coordinates must be finite and inside `[0,1]`; the y coordinates
    /// only need to be finite (overshooting curves are allowed).
    #[error("Control point {point_index} {coordinate} coordinate {value} is outside valid range")]
    ControlPointOutOfRange {
        /// Index of the interior control point (0 or 1).
        point_index: usize,
        /// Which coordinate is out of range ("x" or "y").
        coordinate: &'static str,
        /// The invalid value.
        value: f32,
    },

    /// Invalid configuration value.
    #[error("Invalid ease configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_control_point() {
        let err = EaseError::ControlPointOutOfRange {
            point_index: 1,
            coordinate: "x",
            value: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("Control point 1"));
        assert!(msg.contains("x coordinate"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_error_display_unknown_strategy() {
        let err = EaseError::UnknownStrategy("spline".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'spline'"));
        assert!(msg.contains("table-trimmed"));
        assert!(msg.contains("lut"));
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = EaseError::InvalidConfiguration("steps out of range".to_string());
        assert!(err.to_string().contains("Invalid ease configuration"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = EaseError::InvalidConfiguration("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
