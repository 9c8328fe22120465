// Plain value types shared by the sampler, smoother and style derivation.

use crate::constants::{MAX_TILT_COARSE_DEG, MAX_TILT_FINE_DEG, POSITION_CENTER};
use glam::Vec2;

/// Pointer location as a percentage of the card bounds, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub const CENTER: Self = Self {
        x: POSITION_CENTER,
        y: POSITION_CENTER,
    };
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Rotation offset in degrees. `x` rotates about the horizontal axis,
/// `y` about the vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f32,
    pub y: f32,
}

impl Tilt {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<Vec2> for Tilt {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Tilt> for Vec2 {
    fn from(t: Tilt) -> Self {
        Vec2::new(t.x, t.y)
    }
}

/// Card container bounds in viewport CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CardRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// False for rects that are not laid out yet (or report garbage).
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin() + self.size() * 0.5
    }
}

/// Input device precision, detected once when the card mounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerClass {
    #[default]
    Fine,
    Coarse,
}

impl PointerClass {
    pub fn from_coarse(coarse: bool) -> Self {
        if coarse {
            PointerClass::Coarse
        } else {
            PointerClass::Fine
        }
    }

    /// Tilt range for this class using the built-in limits.
    pub fn default_max_tilt(self) -> f32 {
        match self {
            PointerClass::Fine => MAX_TILT_FINE_DEG,
            PointerClass::Coarse => MAX_TILT_COARSE_DEG,
        }
    }
}
