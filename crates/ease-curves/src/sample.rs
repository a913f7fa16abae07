//! Quantized (x, y) knots shared by the table-based evaluators.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fixed::{FIXED_MAX, interpolate, to_fixed16};

/// A quantized point of an ease curve.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Sample {
    /// Input, `[0, 65535]`.
    pub x: u16,
    /// Output, `[0, 65535]`.
    pub y: u16,
}

impl Sample {
    /// The start anchor `(0, 0)`.
    pub const START: Self = Self::new(0, 0);

    /// The end anchor `(65535, 65535)`.
    pub const END: Self = Self::new(FIXED_MAX, FIXED_MAX);

    /// Create a sample.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Quantize a float point; each coordinate is clamped independently.
    #[inline]
    pub fn quantize((x, y): (f64, f64)) -> Self {
        Self::new(to_fixed16(x), to_fixed16(y))
    }

    /// Linear interpolation between `self` and `upper` at `x`.
    #[inline]
    pub(crate) fn lerp(self, upper: Self, x: u16) -> u16 {
        interpolate(
            u64::from(self.x),
            self.y,
            u64::from(upper.x),
            upper.y,
            u64::from(x),
        )
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Write `Name{(x, y), (x, y), ...}`.
pub(crate) fn write_samples<I>(f: &mut fmt::Formatter<'_>, name: &str, samples: I) -> fmt::Result
where
    I: IntoIterator<Item = Sample>,
{
    write!(f, "{name}{{")?;
    for (i, sample) in samples.into_iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{sample}")?;
    }
    f.write_str("}")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dump(Vec<Sample>);

    impl fmt::Display for Dump {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_samples(f, "Dump", self.0.iter().copied())
        }
    }

    #[test]
    fn test_sample_display() {
        assert_eq!(Sample::new(13107, 20209).to_string(), "(13107, 20209)");
    }

    #[test]
    fn test_write_samples() {
        let dump = Dump(vec![Sample::START, Sample::new(1, 2), Sample::END]);
        assert_eq!(dump.to_string(), "Dump{(0, 0), (1, 2), (65535, 65535)}");
        assert_eq!(Dump(Vec::new()).to_string(), "Dump{}");
    }

    #[test]
    fn test_quantize_clamps_each_coordinate() {
        assert_eq!(Sample::quantize((-0.1, 1.2)), Sample::new(0, FIXED_MAX));
        assert_eq!(Sample::quantize((0.5, 0.25)), Sample::new(32768, 16384));
    }

    #[test]
    fn test_lerp_between_anchors() {
        assert_eq!(Sample::START.lerp(Sample::END, 1234), 1234);
        assert_eq!(Sample::new(10, 100).lerp(Sample::new(20, 200), 15), 150);
    }
}
