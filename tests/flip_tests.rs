// Host-side tests for the flip state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod flip {
    include!("../src/core/flip.rs");
}

use flip::*;
use instant::Instant;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn starts_on_front_unlocked() {
    let m = FlipMachine::new(ms(600));
    assert_eq!(m.face(), Face::Front);
    assert!(!m.is_flipped());
    assert!(!m.is_transitioning());
}

#[test]
fn click_flips_to_back_and_locks() {
    let mut m = FlipMachine::new(ms(600));
    let t0 = Instant::now();
    let out = m.toggle(t0);
    assert_eq!(out.face, Face::Back);
    assert_eq!(out.tracking, TrackingChange::SubscribeGlobal);
    assert_eq!(out.unlock_at, t0 + ms(600));
    assert!(m.is_flipped());
    assert!(m.is_transitioning());
}

#[test]
fn lock_clears_after_window_without_manual_clear() {
    let mut m = FlipMachine::new(ms(600));
    let t0 = Instant::now();
    m.toggle(t0);

    assert!(!m.poll(t0 + ms(599)));
    assert!(m.is_transitioning());

    assert!(m.poll(t0 + ms(600)));
    assert!(!m.is_transitioning());
    assert_eq!(m.face(), Face::Back);

    // Nothing left to fire
    assert!(!m.poll(t0 + ms(5_000)));
}

#[test]
fn second_flip_returns_to_front_and_unsubscribes() {
    let mut m = FlipMachine::new(ms(600));
    let t0 = Instant::now();
    m.toggle(t0);
    m.poll(t0 + ms(600));
    let out = m.toggle(t0 + ms(1_000));
    assert_eq!(out.face, Face::Front);
    assert_eq!(out.tracking, TrackingChange::UnsubscribeGlobal);
    assert!(m.is_transitioning());
}

#[test]
fn click_during_lock_toggles_again_and_first_timer_releases() {
    let mut m = FlipMachine::new(ms(600));
    let t0 = Instant::now();
    m.toggle(t0);
    let out = m.toggle(t0 + ms(300));
    assert_eq!(out.face, Face::Front);
    assert!(m.is_transitioning());

    // The first click's deferred release is not cancelled by the second click
    assert!(m.poll(t0 + ms(600)));
    assert!(!m.is_transitioning());

    // The second release fires later with nothing to do
    assert!(!m.poll(t0 + ms(900)));
    assert!(!m.is_transitioning());
}

#[test]
fn face_flipped_round_trips() {
    assert_eq!(Face::Front.flipped(), Face::Back);
    assert_eq!(Face::Back.flipped().flipped(), Face::Back);
}
