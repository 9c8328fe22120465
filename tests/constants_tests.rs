// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_ranges_are_positive_and_ordered() {
    assert!(MAX_TILT_COARSE_DEG > 0.0);
    assert!(MAX_TILT_FINE_DEG > MAX_TILT_COARSE_DEG);
    assert!(MAX_TILT_LIMIT_DEG >= MAX_TILT_FINE_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_constants_are_within_reasonable_bounds() {
    assert!(EASE_FRAME_MS > 0.0);
    // A single step must never overshoot
    assert!(EASE_RATE > 0.0 && EASE_RATE <= 1.0);
    assert!(EASE_SNAP_DEG > 0.0 && EASE_SNAP_DEG < MAX_TILT_COARSE_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn derivation_constants_have_logical_relationships() {
    // Intensity normalizes against both axes at full fine tilt
    assert_eq!(TILT_INTENSITY_RANGE_DEG, 2.0 * MAX_TILT_FINE_DEG);
    // 0..100 percent covers a full turn
    assert!((LINEAR_ANGLE_PER_PERCENT * POSITION_MAX - 360.0).abs() < 1e-3);
    assert_eq!(POSITION_CENTER * 2.0, POSITION_MAX - POSITION_MIN);
    assert!(SHEEN_ALPHA_BASE > 0.0 && SHEEN_ALPHA_BASE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flip_lock_outlasts_the_rotation() {
    assert!(FLIP_ROTATION_CSS.contains("0.5s"));
    assert!(FLIP_LOCK_MS > 500);
}
