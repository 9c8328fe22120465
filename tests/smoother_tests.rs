// Host-side tests for tilt easing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod smoother {
        include!("../src/core/smoother.rs");
    }
}

use crate::core::geometry::Tilt;
use crate::core::smoother::*;
use instant::Instant;
use std::time::Duration;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn factor_is_time_proportional_and_capped() {
    assert!(approx(ease_factor(Some(16.0)), 0.15));
    assert!(approx(ease_factor(Some(8.0)), 0.075));
    assert!(approx(ease_factor(Some(100.0)), 0.15));
    assert_eq!(ease_factor(Some(0.0)), 0.0);
}

#[test]
fn missing_or_bogus_dt_is_a_full_step() {
    assert!(approx(ease_factor(None), 0.15));
    assert!(approx(ease_factor(Some(f32::NAN)), 0.15));
}

#[test]
fn level_card_stays_level() {
    let next = ease_step(Tilt::ZERO, Tilt::ZERO, Some(16.0));
    assert_eq!(next, Tilt::ZERO);
}

#[test]
fn single_step_moves_fraction_of_distance() {
    let next = ease_step(Tilt::ZERO, Tilt::new(10.0, -4.0), Some(16.0));
    assert!(approx(next.x, 1.5));
    assert!(approx(next.y, -0.6));
}

#[test]
fn near_target_snaps_exactly() {
    let next = ease_step(Tilt::new(9.95, -3.96), Tilt::new(10.0, -4.0), Some(16.0));
    assert_eq!(next, Tilt::new(10.0, -4.0));
}

#[test]
fn converges_in_finite_steps_at_nominal_frame_rate() {
    let target = Tilt::new(15.0, -15.0);
    let mut current = Tilt::ZERO;
    let mut steps = 0;
    while current != target {
        let next = ease_step(current, target, Some(16.0));
        // Monotone approach on both axes
        assert!((target.x - next.x).abs() <= (target.x - current.x).abs());
        assert!((target.y - next.y).abs() <= (target.y - current.y).abs());
        current = next;
        steps += 1;
        assert!(steps < 200, "no convergence after {steps} steps: {current:?}");
    }
    // 15 * 0.85^n < 0.1 first holds around n = 31
    assert!(steps > 20 && steps < 40, "steps = {steps}");
}

#[test]
fn smoother_first_step_uses_full_factor() {
    let mut s = Smoother::new();
    let t0 = Instant::now();
    let next = s.step(Tilt::new(10.0, 0.0), t0);
    assert!(approx(next.x, 1.5));
    assert_eq!(s.current(), next);
}

#[test]
fn smoother_scales_by_elapsed_time() {
    let mut s = Smoother::new();
    let t0 = Instant::now();
    let target = Tilt::new(10.0, 0.0);
    s.step(target, t0);
    let after_half_frame = s.step(target, t0 + Duration::from_millis(8));
    // 1.5 + (10 - 1.5) * 0.075
    assert!(approx(after_half_frame.x, 2.1375));
}

#[test]
fn duplicate_timestamp_does_not_move() {
    let mut s = Smoother::new();
    let t0 = Instant::now();
    let target = Tilt::new(10.0, 0.0);
    let first = s.step(target, t0);
    let again = s.step(target, t0);
    assert_eq!(first, again);
}

#[test]
fn restart_forgets_previous_frame() {
    let mut s = Smoother::new();
    let t0 = Instant::now();
    let target = Tilt::new(10.0, 0.0);
    s.step(target, t0);
    s.restart();
    // Same instant, but no baseline -> full step again
    let next = s.step(target, t0);
    assert!(approx(next.x, 1.5 + 8.5 * 0.15));
}

#[test]
fn reset_levels_the_card() {
    let mut s = Smoother::new();
    s.step(Tilt::new(10.0, 10.0), Instant::now());
    assert!(!s.current().is_zero());
    s.reset();
    assert_eq!(s.current(), Tilt::ZERO);
}
