// Host-side tests for pointer sampling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod sampler {
        include!("../src/core/sampler.rs");
    }
}

use crate::core::geometry::*;
use crate::core::sampler::*;
use glam::Vec2;

fn card() -> CardRect {
    CardRect::new(0.0, 0.0, 300.0, 400.0)
}

#[test]
fn top_left_corner_tilts_to_both_limits() {
    let t = tilt_toward(&card(), Vec2::new(0.0, 0.0), 15.0).unwrap();
    // dy = -200 -> tilt away on the vertical axis; dx = -150 -> toward on the horizontal
    assert_eq!(t, Tilt::new(15.0, -15.0));

    let p = position_in_rect(&card(), Vec2::new(0.0, 0.0)).unwrap();
    assert_eq!(p, PointerPosition { x: 0.0, y: 0.0 });
}

#[test]
fn center_is_level_and_half_way() {
    let rect = CardRect::new(100.0, 50.0, 300.0, 400.0);
    let s = sample(&rect, Vec2::new(250.0, 250.0), 15.0).unwrap();
    assert_eq!(s.target, Tilt::ZERO);
    assert_eq!(s.position, PointerPosition::CENTER);
}

#[test]
fn bottom_right_quarter_point() {
    // Halfway between center and bottom-right corner
    let s = sample(&card(), Vec2::new(225.0, 300.0), 15.0).unwrap();
    assert!((s.target.x - -7.5).abs() < 1e-4);
    assert!((s.target.y - 7.5).abs() < 1e-4);
    assert!((s.position.x - 75.0).abs() < 1e-4);
    assert!((s.position.y - 75.0).abs() < 1e-4);
}

#[test]
fn outside_points_are_clamped() {
    let s = sample(&card(), Vec2::new(10_000.0, -10_000.0), 15.0).unwrap();
    assert_eq!(s.position, PointerPosition { x: 100.0, y: 0.0 });
    assert_eq!(s.target, Tilt::new(15.0, 15.0));
}

#[test]
fn tilt_and_position_stay_in_range_for_both_pointer_classes() {
    let rect = card();
    for max in [MAX_TILT_FINE, MAX_TILT_COARSE] {
        for ix in -10..=40 {
            for iy in -10..=50 {
                let client = Vec2::new(ix as f32 * 10.0, iy as f32 * 10.0);
                let s = sample(&rect, client, max).unwrap();
                assert!(s.target.x.abs() <= max, "tilt x {} > {}", s.target.x, max);
                assert!(s.target.y.abs() <= max, "tilt y {} > {}", s.target.y, max);
                assert!((0.0..=100.0).contains(&s.position.x));
                assert!((0.0..=100.0).contains(&s.position.y));
            }
        }
    }
}

const MAX_TILT_FINE: f32 = 15.0;
const MAX_TILT_COARSE: f32 = 6.0;

#[test]
fn zero_size_rect_is_skipped() {
    let empty = CardRect::new(10.0, 10.0, 0.0, 400.0);
    assert!(sample(&empty, Vec2::new(10.0, 10.0), 15.0).is_none());

    let flat = CardRect::new(10.0, 10.0, 300.0, 0.0);
    assert!(position_in_rect(&flat, Vec2::new(10.0, 10.0)).is_none());

    let garbage = CardRect::new(0.0, 0.0, f32::NAN, 400.0);
    assert!(tilt_toward(&garbage, Vec2::ZERO, 15.0).is_none());
}

#[test]
fn sampler_keeps_last_sample_on_unusable_rect() {
    let mut s = Sampler::new(15.0);
    assert!(s.apply(&card(), Vec2::new(0.0, 0.0)));
    assert_eq!(s.target(), Tilt::new(15.0, -15.0));

    assert!(!s.apply(&CardRect::default(), Vec2::new(150.0, 200.0)));
    assert_eq!(s.target(), Tilt::new(15.0, -15.0));
    assert_eq!(s.position(), PointerPosition { x: 0.0, y: 0.0 });
}

#[test]
fn sampler_reset_returns_to_center() {
    let mut s = Sampler::new(6.0);
    s.apply(&card(), Vec2::new(300.0, 400.0));
    assert_eq!(s.target(), Tilt::new(-6.0, 6.0));

    s.reset();
    assert_eq!(s.position(), PointerPosition::CENTER);
    assert_eq!(s.target(), Tilt::ZERO);
}

#[test]
fn pointer_class_ranges() {
    assert_eq!(PointerClass::from_coarse(true), PointerClass::Coarse);
    assert_eq!(PointerClass::from_coarse(false), PointerClass::Fine);
    assert_eq!(PointerClass::Coarse.default_max_tilt(), 6.0);
    assert_eq!(PointerClass::Fine.default_max_tilt(), 15.0);
    assert_eq!(PointerClass::default(), PointerClass::Fine);
}
