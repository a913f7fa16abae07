//! 16-bit fixed-point helpers.
//!
//! Every evaluator works in the domain `[0, 65535]` for both x and y, where
//! `65535` stands for `1.0`.

/// Largest value of the fixed-point domain, representing `1.0`.
pub const FIXED_MAX: u16 = u16::MAX;

const SCALE: f64 = 65535.0;

/// Convert a float in `[0,1]` to 16-bit fixed point.
///
/// Rounds to the nearest integer and saturates out-of-range input instead of
/// wrapping. NaN maps to 0.
///
/// ```
/// use ease_curves::fixed::to_fixed16;
///
/// assert_eq!(to_fixed16(0.0), 0);
/// assert_eq!(to_fixed16(0.5), 32768);
/// assert_eq!(to_fixed16(1.0), 65535);
/// assert_eq!(to_fixed16(-0.25), 0);
/// assert_eq!(to_fixed16(7.0), 65535);
/// ```
#[inline]
pub fn to_fixed16(v: f64) -> u16 {
    let scaled = (v * SCALE + 0.5).floor();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else if scaled >= SCALE {
        FIXED_MAX
    } else {
        // In range (0, 65535) after the checks above.
        scaled as u16
    }
}

/// Convert a 16-bit fixed-point value back to a float in `[0,1]`.
///
/// Only used for diagnostics and for feeding the reference sampler.
#[inline]
pub fn from_fixed16(v: u16) -> f64 {
    f64::from(v) / SCALE
}

/// Narrow an interpolation result back into the domain.
#[inline]
pub(crate) fn narrow(v: u64) -> u16 {
    u16::try_from(v).unwrap_or(FIXED_MAX)
}

/// Exact integer weighted average of two knots at `x`.
///
/// `(y_lo * (x_hi - x) + y_hi * (x - x_lo)) / (x_hi - x_lo)`, widened to `u64`
/// so the products never overflow. Returns the nearer knot when `x` lies on or
/// outside the bracket.
#[inline]
pub(crate) fn interpolate(x_lo: u64, y_lo: u16, x_hi: u64, y_hi: u16, x: u64) -> u16 {
    if x >= x_hi {
        return y_hi;
    }
    if x <= x_lo {
        return y_lo;
    }
    let a = u64::from(y_lo) * (x_hi - x);
    let b = u64::from(y_hi) * (x - x_lo);
    narrow((a + b) / (x_hi - x_lo))
}
