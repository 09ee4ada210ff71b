// Host-side tests for the pure canvas sizing helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod metrics {
    include!("../src/metrics.rs");
}

use metrics::*;

#[test]
fn dpr_clamps_to_two() {
    assert_eq!(clamp_dpr(1.0), 1.0);
    assert_eq!(clamp_dpr(1.5), 1.5);
    assert_eq!(clamp_dpr(2.0), 2.0);
    // retina-and-beyond displays are capped
    assert_eq!(clamp_dpr(2.5), 2.0);
    assert_eq!(clamp_dpr(3.0), 2.0);
}

#[test]
fn dpr_falls_back_on_nonsense() {
    assert_eq!(clamp_dpr(0.0), 1.0);
    assert_eq!(clamp_dpr(-1.0), 1.0);
    assert_eq!(clamp_dpr(f64::NAN), 1.0);
    assert_eq!(clamp_dpr(f64::INFINITY), 1.0);
}

#[test]
fn backing_size_scales_and_floors() {
    assert_eq!(backing_size(1280.0, 720.0, 2.0), (2560, 1440));
    assert_eq!(backing_size(1280.5, 720.5, 1.0), (1280, 720));
    assert_eq!(backing_size(393.0, 852.0, 1.5), (589, 1278));
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(0.4, 0.4, 1.0), (1, 1));
}
