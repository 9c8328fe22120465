// Holographic overlay derivation. Everything here is a pure function of its
// arguments.

use super::flip::Face;
use super::geometry::{PointerPosition, Tilt};
use super::style::{
    Background, CardTransform, ColorStop, FaceStyle, GradientLayer, Paint, Rgba, Transition,
};
use crate::constants::*;
use smallvec::smallvec;

/// Per-face tuning for the four-layer holographic gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoloProfile {
    pub base_intensity: f32,
    pub tilt_boost: f32,
    /// Focal point shift in percent per degree of tilt.
    pub tilt_offset: f32,
    /// Alpha multipliers for focal, mirror and cross radial layers.
    pub radial_alpha: [f32; 3],
    /// Fade radius (percent) for focal, mirror and cross radial layers.
    pub radial_fade: [f32; 3],
    /// Alpha multipliers for the three linear stops.
    pub linear_alpha: [f32; 3],
}

pub const FRONT_PROFILE: HoloProfile = HoloProfile {
    base_intensity: 0.35,
    tilt_boost: 0.25,
    tilt_offset: 1.5,
    radial_alpha: [1.0, 0.9, 0.85],
    radial_fade: [48.0, 40.0, 45.0],
    linear_alpha: [0.5, 0.45, 0.55],
};

pub const BACK_PROFILE: HoloProfile = HoloProfile {
    base_intensity: 0.7,
    tilt_boost: 0.3,
    tilt_offset: 2.0,
    radial_alpha: [1.0, 0.85, 0.9],
    radial_fade: [50.0, 40.0, 45.0],
    linear_alpha: [0.6, 0.6, 0.7],
};

#[inline]
pub fn tilt_intensity(tilt: Tilt) -> f32 {
    (tilt.x.abs() + tilt.y.abs()) / TILT_INTENSITY_RANGE_DEG
}

#[inline]
pub fn color_intensity(profile: &HoloProfile, tilt: Tilt) -> f32 {
    profile.base_intensity + tilt_intensity(tilt) * profile.tilt_boost
}

/// Pointer position pushed along the tilt, kept inside the card.
#[inline]
pub fn focal_point(profile: &HoloProfile, position: PointerPosition, tilt: Tilt) -> [f32; 2] {
    [
        (position.x + tilt.y * profile.tilt_offset).clamp(POSITION_MIN, POSITION_MAX),
        (position.y + tilt.x * profile.tilt_offset).clamp(POSITION_MIN, POSITION_MAX),
    ]
}

pub fn holographic_style(
    profile: &HoloProfile,
    active: bool,
    position: PointerPosition,
    tilt: Tilt,
) -> FaceStyle {
    if !active {
        return FaceStyle::faded();
    }

    let c = color_intensity(profile, tilt);
    let [ax, ay] = focal_point(profile, position, tilt);
    let hues = [HOLO_MINT, HOLO_TEAL, HOLO_SLATE];
    let anchors = [
        [ax, ay],
        [POSITION_MAX - ax, POSITION_MAX - ay],
        [ax, POSITION_MAX - ay],
    ];

    let mut layers: smallvec::SmallVec<[GradientLayer; 4]> = anchors
        .iter()
        .zip(hues)
        .enumerate()
        .map(|(i, (at, rgb))| GradientLayer::Radial {
            at: *at,
            color: Rgba::new(rgb, c * profile.radial_alpha[i]),
            fade_pct: profile.radial_fade[i],
        })
        .collect();

    let [l0, l1, l2] = profile.linear_alpha;
    layers.push(GradientLayer::Linear {
        angle_deg: (position.x + tilt.y) * LINEAR_ANGLE_PER_PERCENT,
        stops: smallvec![
            ColorStop::color(Rgba::new(HOLO_MINT, c * l0)),
            ColorStop::color(Rgba::new(HOLO_TEAL, c * l1)),
            ColorStop::color(Rgba::new(HOLO_DEEP, c * l2)),
        ],
    });

    FaceStyle {
        background: Background::Layers(layers),
        transition: Transition::None,
    }
}

/// Front overlay: lit only while hovered on the front face.
pub fn front_style(hovered: bool, face: Face, position: PointerPosition, tilt: Tilt) -> FaceStyle {
    holographic_style(
        &FRONT_PROFILE,
        hovered && face == Face::Front,
        position,
        tilt,
    )
}

/// Back overlay: lit whenever the back face is up.
pub fn back_style(face: Face, position: PointerPosition, tilt: Tilt) -> FaceStyle {
    holographic_style(&BACK_PROFILE, face == Face::Back, position, tilt)
}

/// Diagonal gloss band over the back face.
pub fn sheen_style(face: Face, position: PointerPosition, tilt: Tilt) -> FaceStyle {
    if face != Face::Back {
        return FaceStyle {
            background: Background::Transparent,
            transition: Transition::None,
        };
    }
    let alpha = SHEEN_ALPHA_BASE + (tilt.x + tilt.y).abs() / SHEEN_ALPHA_DIVISOR;
    FaceStyle {
        background: Background::Layers(smallvec![GradientLayer::Linear {
            angle_deg: (position.x + tilt.y) * SHEEN_ANGLE_PER_PERCENT,
            stops: smallvec![
                ColorStop::at(Paint::Transparent, 30.0),
                ColorStop::at(Paint::Color(Rgba::new(SHEEN_WHITE, alpha)), 50.0),
                ColorStop::at(Paint::Transparent, 70.0),
            ],
        }]),
        transition: Transition::None,
    }
}

/// Flip rotation, plus tilt only while the card is engaged and not mid-flip.
pub fn card_transform(face: Face, transitioning: bool, hovered: bool, tilt: Tilt) -> CardTransform {
    let engaged = hovered || face == Face::Back;
    CardTransform {
        face,
        tilt: (!transitioning && engaged).then_some(tilt),
    }
}
