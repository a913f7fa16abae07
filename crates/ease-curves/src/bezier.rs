//! Reference cubic Bezier sampler for ease curves.

use serde::{Deserialize, Serialize};

use crate::error::EaseError;
use crate::fixed::{FIXED_MAX, from_fixed16, to_fixed16};

/// Interior control points of an ease curve.
///
/// Together with the implicit anchors `(0,0)` and `(1,1)` they define one
/// cubic Bezier curve, the same shape as CSS `cubic-bezier(x0, y0, x1, y1)`.
///
/// Coordinates outside `[0,1]` are accepted: the math still produces a curve,
/// but when an x coordinate leaves `[0,1]` the curve may fold back on itself
/// and no function `y = f(x)` exists. Evaluators built from such points return
/// well-defined but meaningless values. Use [`ControlPoints::validate`] to
/// reject them up front.
///
/// # Example
///
/// ```
/// use ease_curves::ControlPoints;
///
/// let curve = ControlPoints::new(0.42, 0.0, 0.58, 1.0);
/// let (x, y) = curve.point_at(0.5);
/// assert!((x - 0.5).abs() < 1e-6);
/// assert!((y - 0.5).abs() < 1e-6);
/// assert_eq!(curve.solve_y_for_x(0), 0);
/// assert_eq!(curve.solve_y_for_x(65535), 65535);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlPoints {
    /// x of the first interior control point.
    pub x0: f32,
    /// y of the first interior control point.
    pub y0: f32,
    /// x of the second interior control point.
    pub x1: f32,
    /// y of the second interior control point.
    pub y1: f32,
}

impl ControlPoints {
    /// Bisection stops after this many halvings even if the tolerance was not
    /// reached.
    pub const MAX_ITERATIONS: usize = 64;

    /// Width of the t bracket below which bisection stops.
    pub const TOLERANCE: f64 = 1e-12;

    /// Create control points from the two interior points.
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// `cubic-bezier(0.25, 0.1, 0.25, 1)`, the CSS `ease` timing function.
    pub const fn ease() -> Self {
        Self::new(0.25, 0.1, 0.25, 1.0)
    }

    /// `cubic-bezier(0.42, 0, 1, 1)`.
    pub const fn ease_in() -> Self {
        Self::new(0.42, 0.0, 1.0, 1.0)
    }

    /// `cubic-bezier(0, 0, 0.58, 1)`.
    pub const fn ease_out() -> Self {
        Self::new(0.0, 0.0, 0.58, 1.0)
    }

    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    pub const fn ease_in_out() -> Self {
        Self::new(0.42, 0.0, 0.58, 1.0)
    }

    /// `cubic-bezier(0, 0, 1, 1)`, which maps every x to itself.
    pub const fn linear() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Check that the curve is a function of x.
    ///
    /// # Errors
    ///
    /// Returns [`EaseError::ControlPointOutOfRange`] when an x coordinate is
    /// non-finite or outside `[0,1]`, or when a y coordinate is non-finite.
    pub fn validate(&self) -> Result<(), EaseError> {
        let points = [(self.x0, self.y0), (self.x1, self.y1)];
        for (i, (x, y)) in points.into_iter().enumerate() {
            if !x.is_finite() || !(0.0..=1.0).contains(&x) {
                return Err(EaseError::ControlPointOutOfRange {
                    point_index: i,
                    coordinate: "x",
                    value: x,
                });
            }
            if !y.is_finite() {
                return Err(EaseError::ControlPointOutOfRange {
                    point_index: i,
                    coordinate: "y",
                    value: y,
                });
            }
        }
        Ok(())
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Uses the Bernstein form with the anchors folded in:
    /// `B(t) = 3(1-t)²t·P₁ + 3(1-t)t²·P₂ + t³` (the `(1-t)³·P₀` term is zero).
    /// `t` is clamped into `[0,1]`; `t = 0` yields exactly `(0,0)` and `t = 1`
    /// exactly `(1,1)`.
    #[inline]
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let t = t.clamp(0.0, 1.0);
        let mt = 1.0 - t;
        let (x0, y0) = (f64::from(self.x0), f64::from(self.y0));
        let (x1, y1) = (f64::from(self.x1), f64::from(self.y1));

        let x = 3.0 * mt * mt * t * x0 + 3.0 * mt * t * t * x1 + t * t * t;
        let y = 3.0 * mt * mt * t * y0 + 3.0 * mt * t * t * y1 + t * t * t;

        (x, y)
    }

    /// Find the parameter `t` whose x component equals `target_x`.
    ///
    /// Bisection over `t ∈ [0,1]`, relying on x(t) being monotonic. Bounded by
    /// [`Self::MAX_ITERATIONS`]. `target_x <= 0` and `target_x >= 1` return the
    /// anchors' parameters without iterating.
    pub fn solve_t_for_x(&self, target_x: f64) -> f64 {
        if target_x.is_nan() || target_x <= 0.0 {
            return 0.0;
        }
        if target_x >= 1.0 {
            return 1.0;
        }

        let mut lo = 0.0f64;
        let mut hi = 1.0f64;
        for _ in 0..Self::MAX_ITERATIONS {
            let mid = (lo + hi) / 2.0;
            let (x, _) = self.point_at(mid);
            if x < target_x {
                lo = mid;
            } else {
                hi = mid;
            }
            if hi - lo < Self::TOLERANCE {
                break;
            }
        }
        (lo + hi) / 2.0
    }

    /// Curve y, as a float, for a float x in `[0,1]`.
    #[inline]
    pub fn y_for_x(&self, x: f64) -> f64 {
        let (_, y) = self.point_at(self.solve_t_for_x(x));
        y
    }

    /// Quantized curve y for a quantized x.
    ///
    /// `0` and `65535` map to themselves exactly; everything else goes through
    /// the root solve.
    pub fn solve_y_for_x(&self, x: u16) -> u16 {
        match x {
            0 => 0,
            FIXED_MAX => FIXED_MAX,
            _ => to_fixed16(self.y_for_x(from_fixed16(x))),
        }
    }
}

impl Default for ControlPoints {
    fn default() -> Self {
        Self::ease()
    }
}
