//! Fuzzes JSON configuration parsing.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_ease_config

#![deny(static_mut_refs)]
#![no_main]

use ease_curves::{EaseConfig, Evaluator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    // Must never panic; accepted configs always build.
    if let Ok(config) = EaseConfig::try_from(json) {
        if let Ok(e) = config.build() {
            let _ = e.eval(u16::MAX / 2);
        }
    }
});
