// One card's interaction state: sampler, smoother and flip machine under a
// single owner, plus the derived outputs the page renders.

use super::config::CardConfig;
use super::flip::{Face, FlipMachine, FlipOutcome};
use super::geometry::{CardRect, PointerClass, PointerPosition, Tilt};
use super::holo;
use super::sampler::{PointerSource, Sampler};
use super::smoother::Smoother;
use super::style::{CardTransform, FaceStyle};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Whether the frame loop should schedule another step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Everything the presentation surface needs for one repaint.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub transform: CardTransform,
    pub front: FaceStyle,
    pub back: FaceStyle,
    pub sheen: FaceStyle,
    pub flipping: bool,
}

#[derive(Clone, Debug)]
pub struct CardEngine {
    pointer_class: PointerClass,
    hovered: bool,
    sampler: Sampler,
    smoother: Smoother,
    flip: FlipMachine,
}

impl CardEngine {
    pub fn new(config: &CardConfig, pointer_class: PointerClass) -> Self {
        Self {
            pointer_class,
            hovered: false,
            sampler: Sampler::new(config.max_tilt(pointer_class)),
            smoother: Smoother::new(),
            flip: FlipMachine::new(config.flip_lock),
        }
    }

    pub fn pointer_class(&self) -> PointerClass {
        self.pointer_class
    }

    pub fn max_tilt(&self) -> f32 {
        self.sampler.max_tilt()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn face(&self) -> Face {
        self.flip.face()
    }

    pub fn is_flipped(&self) -> bool {
        self.flip.is_flipped()
    }

    pub fn is_transitioning(&self) -> bool {
        self.flip.is_transitioning()
    }

    pub fn lock_duration(&self) -> Duration {
        self.flip.lock_duration()
    }

    pub fn position(&self) -> PointerPosition {
        self.sampler.position()
    }

    pub fn target_tilt(&self) -> Tilt {
        self.sampler.target()
    }

    pub fn current_tilt(&self) -> Tilt {
        self.smoother.current()
    }

    /// Smoothing runs while the card is engaged and not mid-flip.
    pub fn loop_eligible(&self) -> bool {
        (self.hovered || self.flip.is_flipped()) && !self.flip.is_transitioning()
    }

    /// Whether an event from `source` may drive the sampler right now.
    pub fn accepts(&self, source: PointerSource) -> bool {
        if self.flip.is_transitioning() {
            return false;
        }
        match (self.flip.face(), source) {
            (Face::Front, PointerSource::Local) => self.hovered,
            (Face::Back, PointerSource::Global) => true,
            _ => false,
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        if !self.flip.is_flipped() {
            self.sampler.reset();
            self.smoother.reset();
        }
    }

    /// Feed one pointer move. Returns true if position/target changed.
    pub fn pointer_move(&mut self, source: PointerSource, rect: &CardRect, client: Vec2) -> bool {
        if !self.accepts(source) {
            return false;
        }
        self.sampler.apply(rect, client)
    }

    pub fn click(&mut self, now: Instant) -> FlipOutcome {
        let outcome = self.flip.toggle(now);
        self.sampler.zero_target();
        self.smoother.reset();
        outcome
    }

    /// Run any deferred flip unlocks that are due. Returns true when the
    /// lock was released.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        self.flip.poll(now)
    }

    /// Reset the frame clock before the loop is (re)started.
    pub fn begin_loop(&mut self) {
        self.smoother.restart();
    }

    /// One smoothing step. A step that arrives after eligibility ended still
    /// eases once and then asks the loop to stop.
    pub fn frame(&mut self, now: Instant) -> LoopControl {
        self.flip.poll(now);
        if self.flip.is_transitioning() {
            self.sampler.zero_target();
            self.smoother.reset();
            return LoopControl::Stop;
        }
        self.smoother.step(self.sampler.target(), now);
        if self.loop_eligible() {
            LoopControl::Continue
        } else {
            LoopControl::Stop
        }
    }

    pub fn transform(&self) -> CardTransform {
        holo::card_transform(
            self.flip.face(),
            self.flip.is_transitioning(),
            self.hovered,
            self.smoother.current(),
        )
    }

    pub fn front_style(&self) -> FaceStyle {
        holo::front_style(
            self.hovered,
            self.flip.face(),
            self.sampler.position(),
            self.smoother.current(),
        )
    }

    pub fn back_style(&self) -> FaceStyle {
        holo::back_style(
            self.flip.face(),
            self.sampler.position(),
            self.smoother.current(),
        )
    }

    pub fn sheen_style(&self) -> FaceStyle {
        holo::sheen_style(
            self.flip.face(),
            self.sampler.position(),
            self.smoother.current(),
        )
    }

    pub fn view(&self) -> CardView {
        CardView {
            transform: self.transform(),
            front: self.front_style(),
            back: self.back_style(),
            sheen: self.sheen_style(),
            flipping: self.flip.is_transitioning(),
        }
    }
}
