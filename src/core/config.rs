// Runtime tuning for one card, with overrides read from host attributes.

use super::geometry::PointerClass;
use crate::constants::{FLIP_LOCK_MS, MAX_TILT_COARSE_DEG, MAX_TILT_FINE_DEG, MAX_TILT_LIMIT_DEG};
use std::time::Duration;

pub const ATTR_MAX_TILT: &str = "data-max-tilt";
pub const ATTR_MAX_TILT_COARSE: &str = "data-max-tilt-coarse";
pub const ATTR_FLIP_LOCK_MS: &str = "data-flip-lock-ms";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{attr}: '{value}' is not a number")]
    NotANumber { attr: &'static str, value: String },
    #[error("{attr}: {value} is outside (0, {max}]")]
    OutOfRange {
        attr: &'static str,
        value: f64,
        max: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardConfig {
    pub max_tilt_fine: f32,
    pub max_tilt_coarse: f32,
    pub flip_lock: Duration,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            max_tilt_fine: MAX_TILT_FINE_DEG,
            max_tilt_coarse: MAX_TILT_COARSE_DEG,
            flip_lock: Duration::from_millis(FLIP_LOCK_MS),
        }
    }
}

impl CardConfig {
    pub fn max_tilt(&self, class: PointerClass) -> f32 {
        match class {
            PointerClass::Fine => self.max_tilt_fine,
            PointerClass::Coarse => self.max_tilt_coarse,
        }
    }

    /// Build a config from attribute lookups. Each attribute that is present
    /// but invalid keeps its default and is reported in the returned list.
    pub fn from_attributes<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let mut errors = Vec::new();

        if let Some(raw) = lookup(ATTR_MAX_TILT) {
            match parse_bounded(ATTR_MAX_TILT, &raw, MAX_TILT_LIMIT_DEG as f64) {
                Ok(v) => cfg.max_tilt_fine = v as f32,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = lookup(ATTR_MAX_TILT_COARSE) {
            match parse_bounded(ATTR_MAX_TILT_COARSE, &raw, MAX_TILT_LIMIT_DEG as f64) {
                Ok(v) => cfg.max_tilt_coarse = v as f32,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = lookup(ATTR_FLIP_LOCK_MS) {
            match parse_bounded(ATTR_FLIP_LOCK_MS, &raw, 10_000.0) {
                Ok(v) => cfg.flip_lock = Duration::from_millis(v.round() as u64),
                Err(e) => errors.push(e),
            }
        }
        (cfg, errors)
    }
}

fn parse_bounded(attr: &'static str, raw: &str, max: f64) -> Result<f64, ConfigError> {
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        attr,
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value <= 0.0 || value > max {
        return Err(ConfigError::OutOfRange { attr, value, max });
    }
    Ok(value)
}
