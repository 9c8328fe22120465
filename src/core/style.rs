// Style descriptors handed to the presentation layer, rendered as CSS text.

use super::flip::Face;
use super::geometry::Tilt;
use crate::constants::FADE_OUT_CSS;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl Rgba {
    pub fn new(rgb: [u8; 3], alpha: f32) -> Self {
        Self { rgb, alpha }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "rgba({r},{g},{b}, {})", self.alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Transparent,
    Color(Rgba),
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Transparent => f.write_str("transparent"),
            Paint::Color(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub paint: Paint,
    pub at_pct: Option<f32>,
}

impl ColorStop {
    pub fn color(rgba: Rgba) -> Self {
        Self {
            paint: Paint::Color(rgba),
            at_pct: None,
        }
    }

    pub fn at(paint: Paint, pct: f32) -> Self {
        Self {
            paint,
            at_pct: Some(pct),
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.at_pct {
            Some(pct) => write!(f, "{} {}%", self.paint, pct),
            None => write!(f, "{}", self.paint),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GradientLayer {
    /// Circle centered at `at` (percent), solid `color` at the center fading
    /// to transparent at `fade_pct`.
    Radial {
        at: [f32; 2],
        color: Rgba,
        fade_pct: f32,
    },
    Linear {
        angle_deg: f32,
        stops: SmallVec<[ColorStop; 3]>,
    },
}

impl fmt::Display for GradientLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientLayer::Radial {
                at,
                color,
                fade_pct,
            } => write!(
                f,
                "radial-gradient(circle at {}% {}%, {} 0%, transparent {}%)",
                at[0], at[1], color, fade_pct
            ),
            GradientLayer::Linear { angle_deg, stops } => {
                write!(f, "linear-gradient({angle_deg}deg")?;
                for stop in stops {
                    write!(f, ", {stop}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Layered background, first entry painted on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Background {
    #[default]
    Transparent,
    Layers(SmallVec<[GradientLayer; 4]>),
}

impl Background {
    pub fn is_transparent(&self) -> bool {
        matches!(self, Background::Transparent)
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Transparent => f.write_str("transparent"),
            Background::Layers(layers) => {
                for (i, layer) in layers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{layer}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    /// Track the pointer with no lag.
    #[default]
    None,
    /// Short fade while an overlay switches off.
    FadeOut,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::None => f.write_str("none"),
            Transition::FadeOut => f.write_str(FADE_OUT_CSS),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceStyle {
    pub background: Background,
    pub transition: Transition,
}

impl FaceStyle {
    pub fn faded() -> Self {
        Self {
            background: Background::Transparent,
            transition: Transition::FadeOut,
        }
    }
}

/// Flip rotation plus the optional pointer tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub face: Face,
    pub tilt: Option<Tilt>,
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flip_deg = match self.face {
            Face::Front => 0,
            Face::Back => 180,
        };
        write!(f, "rotateY({flip_deg}deg)")?;
        if let Some(t) = self.tilt {
            write!(f, " rotateX({}deg) rotateY({}deg)", t.x, t.y)?;
        }
        Ok(())
    }
}
