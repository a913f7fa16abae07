//! Property-based tests for ease evaluation.
//!
//! These tests verify properties that must hold for every strategy, whatever
//! the curve or step count.

use ease_curves::{
    ControlPoints, DEFAULT_STEPS, EaseEvaluator, Evaluator, MIN_STEPS, Strategy, build,
};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

fn sanitize_f32(v: f32) -> f32 {
    if v.is_nan() {
        0.5
    } else if v.is_infinite() {
        if v > 0.0 { 1.0 } else { 0.0 }
    } else {
        v
    }
}

fn unit_points(x0: f32, y0: f32, x1: f32, y1: f32) -> ControlPoints {
    ControlPoints::new(
        sanitize_f32(x0).clamp(0.0, 1.0),
        sanitize_f32(y0).clamp(0.0, 1.0),
        sanitize_f32(x1).clamp(0.0, 1.0),
        sanitize_f32(y1).clamp(0.0, 1.0),
    )
}

fn is_monotonic(e: &EaseEvaluator, stride: usize) -> bool {
    let mut prev = 0;
    for x in (0..=u16::MAX).step_by(stride).chain([u16::MAX]) {
        let y = e.eval(x);
        if y < prev {
            return false;
        }
        prev = y;
    }
    true
}

// Raw control points, NaN and infinities included.
#[quickcheck]
fn prop_anchors_exact_for_any_points(x0: f32, y0: f32, x1: f32, y1: f32, steps: u8) -> bool {
    let points = ControlPoints::new(x0, y0, x1, y1);
    Strategy::ALL.into_iter().all(|strategy| {
        let e = build(strategy, points, u16::from(steps));
        e.eval(0) == 0 && e.eval(u16::MAX) == u16::MAX
    })
}

#[quickcheck]
fn prop_knots_are_exact(x0: f32, y0: f32, x1: f32, y1: f32, steps: u8) -> bool {
    let points = unit_points(x0, y0, x1, y1);
    Strategy::ALL.into_iter().all(|strategy| {
        let e = build(strategy, points, u16::from(steps));
        e.samples().iter().all(|s| e.eval(s.x) == s.y)
    })
}

#[quickcheck]
fn prop_table_full_matches_uniform_lut(x0: f32, y0: f32, x1: f32, y1: f32, x: u16) -> bool {
    let points = unit_points(x0, y0, x1, y1);
    let lut = build(Strategy::UniformLut, points, 0);
    let table = build(Strategy::TableFull, points, 0);
    lut.eval(x) == table.eval(x)
}

#[quickcheck]
fn prop_points_full_matches_trimmed(x0: f32, y0: f32, x1: f32, y1: f32, x: u16) -> bool {
    let points = unit_points(x0, y0, x1, y1);
    let full = build(Strategy::PointsFull, points, 0);
    let trimmed = build(Strategy::PointsTrimmed, points, 0);
    full.eval(x) == trimmed.eval(x)
}

#[quickcheck]
fn prop_samples_strictly_increasing(x0: f32, y0: f32, x1: f32, y1: f32, steps: u8) -> bool {
    let points = unit_points(x0, y0, x1, y1);
    Strategy::ALL.into_iter().all(|strategy| {
        let samples = build(strategy, points, u16::from(steps)).samples();
        samples.windows(2).all(|w| matches!(w, [a, b] if a.x < b.x))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// x-monotonic curves with y inside `[0,1]` ease monotonically.
    #[test]
    fn prop_monotonic_for_unit_curves(
        x0 in 0.0f32..=1.0,
        y0 in 0.0f32..=1.0,
        x1 in 0.0f32..=1.0,
        y1 in 0.0f32..=1.0,
        steps in MIN_STEPS..=64u16,
    ) {
        let points = ControlPoints::new(x0, y0, x1, y1);
        for strategy in Strategy::ALL {
            let e = build(strategy, points, steps);
            prop_assert!(is_monotonic(&e, 61), "{strategy} not monotonic for {points:?}");
        }
    }

    /// Step counts below the minimum build the default table.
    #[test]
    fn prop_small_steps_use_default(
        x0 in 0.0f32..=1.0,
        y0 in -0.5f32..=1.5,
        x1 in 0.0f32..=1.0,
        y1 in -0.5f32..=1.5,
        steps in 0..MIN_STEPS,
    ) {
        let points = ControlPoints::new(x0, y0, x1, y1);
        for strategy in Strategy::ALL {
            prop_assert_eq!(
                build(strategy, points, steps),
                build(strategy, points, DEFAULT_STEPS)
            );
        }
    }

    /// Overshooting y still evaluates inside the domain and keeps the anchors.
    #[test]
    fn prop_overshoot_stays_in_domain(
        y0 in -2.0f32..=3.0,
        y1 in -2.0f32..=3.0,
        x in 0u16..=u16::MAX,
    ) {
        let points = ControlPoints::new(0.3, y0, 0.7, y1);
        for strategy in Strategy::ALL {
            let e = build(strategy, points, 24);
            prop_assert_eq!(e.eval(0), 0);
            prop_assert_eq!(e.eval(u16::MAX), u16::MAX);
            // Total: any x yields a value, no panic.
            let _ = e.eval(x);
        }
    }

    /// Storage grows with the step count.
    #[test]
    fn prop_footprint_tracks_steps(steps in MIN_STEPS..=256u16) {
        let points = ControlPoints::ease_in_out();
        let lut = build(Strategy::UniformLut, points, steps);
        let full = build(Strategy::TableFull, points, steps);
        let trimmed = build(Strategy::TableTrimmed, points, steps);
        prop_assert_eq!(lut.footprint(), 2 * (usize::from(steps) + 1));
        prop_assert_eq!(full.footprint(), 2 * usize::from(steps));
        prop_assert_eq!(trimmed.footprint(), 2 * (usize::from(steps) - 2));
        prop_assert_eq!(build(Strategy::Precise, points, steps).footprint(), 0);
    }
}
