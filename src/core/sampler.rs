// Pointer sampling: raw client coordinates -> position percent + target tilt.

use super::geometry::{CardRect, PointerPosition, Tilt};
use crate::constants::{POSITION_MAX, POSITION_MIN};
use glam::Vec2;

/// Where a pointer event was observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    /// Listener on the card container.
    Local,
    /// Document-wide listener, attached only while the back face is up.
    Global,
}

/// One pointer sample derived from a rect and client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub position: PointerPosition,
    pub target: Tilt,
}

/// Map client coordinates to a clamped percentage of the rect.
///
/// Returns `None` for rects with no measurable area.
pub fn position_in_rect(rect: &CardRect, client: Vec2) -> Option<PointerPosition> {
    if !rect.is_measurable() {
        return None;
    }
    let pct = (client - rect.origin()) / rect.size() * 100.0;
    Some(PointerPosition {
        x: pct.x.clamp(POSITION_MIN, POSITION_MAX),
        y: pct.y.clamp(POSITION_MIN, POSITION_MAX),
    })
}

/// Target tilt for a pointer relative to the rect center.
///
/// Vertical offset tilts away from the pointer (sign flipped), horizontal
/// offset tilts toward it.
pub fn tilt_toward(rect: &CardRect, client: Vec2, max_tilt: f32) -> Option<Tilt> {
    if !rect.is_measurable() {
        return None;
    }
    let d = client - rect.center();
    let half = rect.size() * 0.5;
    let tilt_x = (d.y / half.y) * max_tilt * -1.0;
    let tilt_y = (d.x / half.x) * max_tilt;
    Some(Tilt {
        x: tilt_x.clamp(-max_tilt, max_tilt),
        y: tilt_y.clamp(-max_tilt, max_tilt),
    })
}

#[inline]
pub fn sample(rect: &CardRect, client: Vec2, max_tilt: f32) -> Option<Sample> {
    Some(Sample {
        position: position_in_rect(rect, client)?,
        target: tilt_toward(rect, client, max_tilt)?,
    })
}

/// Owner of the pointer position and target tilt.
#[derive(Clone, Debug)]
pub struct Sampler {
    max_tilt: f32,
    position: PointerPosition,
    target: Tilt,
}

impl Sampler {
    pub fn new(max_tilt: f32) -> Self {
        Self {
            max_tilt,
            position: PointerPosition::CENTER,
            target: Tilt::ZERO,
        }
    }

    pub fn max_tilt(&self) -> f32 {
        self.max_tilt
    }

    pub fn position(&self) -> PointerPosition {
        self.position
    }

    pub fn target(&self) -> Tilt {
        self.target
    }

    /// Apply one pointer event. Returns false when the rect was unusable and
    /// nothing changed.
    pub fn apply(&mut self, rect: &CardRect, client: Vec2) -> bool {
        match sample(rect, client, self.max_tilt) {
            Some(s) => {
                self.position = s.position;
                self.target = s.target;
                true
            }
            None => false,
        }
    }

    pub fn zero_target(&mut self) {
        self.target = Tilt::ZERO;
    }

    /// Back to center position and level target.
    pub fn reset(&mut self) {
        self.position = PointerPosition::CENTER;
        self.target = Tilt::ZERO;
    }
}
