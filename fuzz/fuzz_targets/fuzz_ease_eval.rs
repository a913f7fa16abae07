//! Fuzzes construction and evaluation of every ease strategy.
//!
//! Input layout: four little-endian f32 control point coordinates, a u16 step
//! count, then any number of u16 inputs.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_ease_eval

#![deny(static_mut_refs)]
#![no_main]

use ease_curves::{ControlPoints, Evaluator, Strategy, build};
use libfuzzer_sys::fuzz_target;

fn f32_at(data: &[u8], offset: usize) -> f32 {
    match data.get(offset..offset + 4) {
        Some(&[a, b, c, d]) => f32::from_le_bytes([a, b, c, d]),
        _ => 0.5,
    }
}

fuzz_target!(|data: &[u8]| {
    let points = ControlPoints::new(
        f32_at(data, 0),
        f32_at(data, 4),
        f32_at(data, 8),
        f32_at(data, 12),
    );
    // Cap the step count so one input cannot stall the fuzzer.
    let steps = match data.get(16..18) {
        Some(&[lo, hi]) => u16::from_le_bytes([lo, hi]) % 1024,
        _ => 0,
    };
    let inputs: Vec<u16> = data
        .get(18..)
        .unwrap_or_default()
        .chunks_exact(2)
        .map(|pair| match pair {
            &[lo, hi] => u16::from_le_bytes([lo, hi]),
            _ => 0,
        })
        .collect();

    for strategy in Strategy::ALL {
        let e = build(strategy, points, steps);
        // Anchors hold for every curve, valid or not.
        assert_eq!(e.eval(0), 0);
        assert_eq!(e.eval(u16::MAX), u16::MAX);
        for &x in &inputs {
            let _ = e.eval(x);
        }
        let _ = e.to_string();
    }
});
