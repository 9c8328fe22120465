// Time-aware easing of the displayed tilt toward the target tilt.

use super::geometry::Tilt;
use crate::constants::{EASE_FRAME_MS, EASE_RATE, EASE_SNAP_DEG};
use instant::Instant;

/// Interpolation factor for a frame that took `dt_ms`.
///
/// `None` (no previous frame) counts as a full nominal frame. Long frames are
/// capped so a single step never moves more than `EASE_RATE` of the way.
#[inline]
pub fn ease_factor(dt_ms: Option<f32>) -> f32 {
    let frames = match dt_ms {
        Some(dt) if dt.is_finite() => (dt / EASE_FRAME_MS).clamp(0.0, 1.0),
        _ => 1.0,
    };
    frames * EASE_RATE
}

#[inline]
fn ease_axis(current: f32, target: f32, factor: f32) -> f32 {
    let next = current + (target - current) * factor;
    if (next - target).abs() < EASE_SNAP_DEG {
        target
    } else {
        next
    }
}

/// One easing step from `current` toward `target`.
#[inline]
pub fn ease_step(current: Tilt, target: Tilt, dt_ms: Option<f32>) -> Tilt {
    let factor = ease_factor(dt_ms);
    Tilt {
        x: ease_axis(current.x, target.x, factor),
        y: ease_axis(current.y, target.y, factor),
    }
}

/// Sole owner of the displayed tilt. Nothing else writes it; the only ways
/// it changes are [`Smoother::step`] and [`Smoother::reset`].
#[derive(Clone, Debug, Default)]
pub struct Smoother {
    current: Tilt,
    last_step: Option<Instant>,
}

impl Smoother {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Tilt {
        self.current
    }

    /// Forget the previous frame time so the next step is a full step.
    pub fn restart(&mut self) {
        self.last_step = None;
    }

    pub fn step(&mut self, target: Tilt, now: Instant) -> Tilt {
        let dt_ms = self.last_step.map(|prev| {
            if now > prev {
                now.duration_since(prev).as_secs_f32() * 1000.0
            } else {
                0.0
            }
        });
        self.last_step = Some(now);
        self.current = ease_step(self.current, target, dt_ms);
        self.current
    }

    /// Hard reset to level.
    pub fn reset(&mut self) {
        self.current = Tilt::ZERO;
    }
}
