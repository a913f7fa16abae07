//! Uniform lookup table, the default evaluator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bezier::ControlPoints;
use crate::evaluator::{Evaluator, MIN_STEPS, Strategy, normalize_steps};
use crate::fixed::{FIXED_MAX, interpolate};
use crate::sample::{Sample, write_samples};
use crate::table::solve_on_grid;

const DOMAIN: u64 = FIXED_MAX as u64;

/// Fast ease evaluator backed by a y-only lookup table.
///
/// The table holds `steps` y values on a uniform partition of x into
/// `steps - 1` intervals, followed by one extra `65535` sentinel so that
/// `eval(65535)` needs no boundary branch. Memory is `2 * (steps + 1)` bytes.
///
/// Interpolation is exact integer arithmetic, so results are identical on
/// every platform.
///
/// # Example
///
/// ```
/// use ease_curves::{ControlPoints, Evaluator, UniformLut};
///
/// let lut = UniformLut::new(ControlPoints::ease_out(), 6);
/// assert_eq!(
///     lut.to_string(),
///     "LUT{(0, 0), (13107, 20209), (26214, 37413), (39321, 51454), (52428, 61453), (65535, 65535)}"
/// );
/// assert_eq!(lut.len(), 7);
/// assert_eq!(lut.eval(1000), 1541);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UniformLut {
    table: Vec<u16>,
}

impl UniformLut {
    /// Build the table from `points`.
    ///
    /// `steps` below [`MIN_STEPS`] is replaced by the default. Interior entries
    /// are solved at `x = i / (steps - 1)`; the first entry is always `0` and
    /// the last two are always `65535`.
    pub fn new(points: ControlPoints, steps: u16) -> Self {
        let steps = normalize_steps(steps);
        let mut table = Vec::with_capacity(usize::from(steps) + 1);
        table.push(0);
        table.extend(solve_on_grid(&points, steps - 1, 1..=steps - 2));
        table.push(FIXED_MAX);
        table.push(FIXED_MAX);

        tracing::debug!(
            strategy = %Strategy::UniformLut,
            steps,
            entries = table.len(),
            "built evaluator"
        );
        Self { table }
    }

    /// Number of stored entries, sentinel included.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false; a table has at least `MIN_STEPS + 1` entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Raw table, sentinel included.
    pub fn table(&self) -> &[u16] {
        &self.table
    }

    /// Number of x intervals.
    fn intervals(&self) -> u64 {
        self.table.len().saturating_sub(2) as u64
    }
}

impl Evaluator for UniformLut {
    #[inline]
    fn eval(&self, x: u16) -> u16 {
        let intervals = self.intervals();
        let x = u64::from(x);
        let index = x * intervals / DOMAIN;
        let base_x = index * DOMAIN / intervals;
        let next_x = (index + 1) * DOMAIN / intervals;

        let i = index as usize;
        match self.table.get(i..=i + 1) {
            Some(&[lo, hi]) => interpolate(base_x, lo, next_x, hi, x),
            _ => FIXED_MAX,
        }
    }

    fn samples(&self) -> Vec<Sample> {
        let intervals = self.intervals();
        self.table
            .iter()
            .take(self.table.len().saturating_sub(1))
            .enumerate()
            .map(|(i, &y)| Sample::new((i as u64 * DOMAIN / intervals) as u16, y))
            .collect()
    }

    fn strategy(&self) -> Strategy {
        Strategy::UniformLut
    }

    fn footprint(&self) -> usize {
        std::mem::size_of_val(self.table.as_slice())
    }
}

impl fmt::Display for UniformLut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_samples(f, "LUT", self.samples())
    }
}

impl Serialize for UniformLut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.table.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UniformLut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let table: Vec<u16> = Vec::deserialize(deserializer)?;
        let min_len = usize::from(MIN_STEPS) + 1;
        if table.len() < min_len {
            return Err(serde::de::Error::custom(format!(
                "Expected at least {min_len} entries in UniformLut, got {}",
                table.len()
            )));
        }
        if table.first() != Some(&0) {
            return Err(serde::de::Error::custom("UniformLut must start at 0"));
        }
        if !table.ends_with(&[FIXED_MAX, FIXED_MAX]) {
            return Err(serde::de::Error::custom(
                "UniformLut must end with 65535 and its 65535 sentinel",
            ));
        }
        Ok(Self { table })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::DEFAULT_STEPS;

    #[test]
    fn test_uniform_lut_layout() {
        let lut = UniformLut::new(ControlPoints::ease_out(), 6);
        assert_eq!(lut.table(), &[0, 20209, 37413, 51454, 61453, 65535, 65535]);
        assert_eq!(lut.footprint(), 14);
    }

    #[test]
    fn test_uniform_lut_eval_known_value() {
        let lut = UniformLut::new(ControlPoints::ease_out(), 6);
        assert_eq!(lut.eval(1000), 1541);
    }

    #[test]
    fn test_uniform_lut_default_steps() {
        let lut = UniformLut::new(ControlPoints::ease_in_out(), 0);
        assert_eq!(lut.len(), usize::from(DEFAULT_STEPS) + 1);
        assert_eq!(
            lut,
            UniformLut::new(ControlPoints::ease_in_out(), DEFAULT_STEPS)
        );
        assert_eq!(lut, UniformLut::new(ControlPoints::ease_in_out(), 2));
    }

    #[test]
    fn test_uniform_lut_ease_in_out_default_row() {
        // x = i * 65535 / 13 for i in 0..14.
        let lut = UniformLut::new(ControlPoints::ease_in_out(), 0);
        let expected = [
            0, 791, 3147, 7200, 12960, 20165, 28443, 37091, 45369, 52574, 58334, 62387, 64743,
            65535,
        ];
        for (i, &y) in expected.iter().enumerate() {
            let x = (i as u32 * 65535 / 13) as u16;
            assert_eq!(lut.eval(x), y, "x={x}");
        }
    }

    #[test]
    fn test_uniform_lut_knots_exact() {
        let lut = UniformLut::new(ControlPoints::ease(), 0);
        for sample in lut.samples() {
            assert_eq!(lut.eval(sample.x), sample.y, "knot {sample}");
        }
    }

    #[test]
    fn test_uniform_lut_minimum_steps() {
        let lut = UniformLut::new(ControlPoints::ease_in_out(), 3);
        assert_eq!(lut.table(), &[0, 32768, 65535, 65535]);
        assert_eq!(lut.eval(0), 0);
        assert_eq!(lut.eval(u16::MAX), u16::MAX);
    }

    #[test]
    fn test_uniform_lut_serialization() -> Result<(), serde_json::Error> {
        let lut = UniformLut::new(ControlPoints::ease(), 8);
        let json = serde_json::to_string(&lut)?;
        let back: UniformLut = serde_json::from_str(&json)?;
        assert_eq!(lut, back);
        Ok(())
    }

    #[test]
    fn test_uniform_lut_deserialize_rejects_broken_tables() {
        for bad in [
            "[0, 65535, 65535]",
            "[1, 5, 65535, 65535]",
            "[0, 5, 9, 65535]",
        ] {
            let result: Result<UniformLut, _> = serde_json::from_str(bad);
            assert!(result.is_err(), "{bad} should be rejected");
        }
    }
}
