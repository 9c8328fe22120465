// Front/back flip state with a timed tilt lock.

use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn flipped(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

/// Listener change the DOM layer must apply after a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingChange {
    /// Entered the back face: start listening document-wide.
    SubscribeGlobal,
    /// Entered the front face: stop listening document-wide.
    UnsubscribeGlobal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipOutcome {
    pub face: Face,
    pub tracking: TrackingChange,
    /// When the deferred lock release armed by this click is due.
    pub unlock_at: Instant,
}

/// Two-state flip controller.
///
/// Every toggle arms its own deferred unlock; none is ever cancelled, so a
/// second click inside the window is released by the first click's timer.
#[derive(Clone, Debug)]
pub struct FlipMachine {
    face: Face,
    transitioning: bool,
    lock: Duration,
    pending_unlocks: SmallVec<[Instant; 2]>,
}

impl FlipMachine {
    pub fn new(lock: Duration) -> Self {
        Self {
            face: Face::Front,
            transitioning: false,
            lock,
            pending_unlocks: SmallVec::new(),
        }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face == Face::Back
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn lock_duration(&self) -> Duration {
        self.lock
    }

    pub fn toggle(&mut self, now: Instant) -> FlipOutcome {
        self.face = self.face.flipped();
        self.transitioning = true;
        let unlock_at = now + self.lock;
        self.pending_unlocks.push(unlock_at);
        let tracking = match self.face {
            Face::Back => TrackingChange::SubscribeGlobal,
            Face::Front => TrackingChange::UnsubscribeGlobal,
        };
        FlipOutcome {
            face: self.face,
            tracking,
            unlock_at,
        }
    }

    /// Fire every deferred unlock due at `now`. Returns true if the lock was
    /// released by this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        let before = self.pending_unlocks.len();
        self.pending_unlocks.retain(|due| *due > now);
        let fired = self.pending_unlocks.len() < before;
        if fired && self.transitioning {
            self.transitioning = false;
            return true;
        }
        false
    }
}
