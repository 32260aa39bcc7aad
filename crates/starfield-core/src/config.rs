//! Per-instance configuration.
//!
//! A config is fixed for the lifetime of one simulation. Changing it means
//! tearing the background down and building a new one.

use crate::constants::{DEFAULT_RESISTANCE, DEFAULT_STAR_COUNT};
use crate::render::AlphaMode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("resistance must be a finite positive number, got {0}")]
    Resistance(f64),
    #[error("star count divisor must be a finite positive number, got {0}")]
    StarCount(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldConfig {
    /// Divisor turning raw pointer movement into target velocity.
    pub resistance: f64,
    /// Density divisor: one star per `star_count` CSS px of `width + height`.
    pub star_count: f64,
    pub alpha_mode: AlphaMode,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            resistance: DEFAULT_RESISTANCE,
            star_count: DEFAULT_STAR_COUNT,
            alpha_mode: AlphaMode::Twinkle,
        }
    }
}

impl StarfieldConfig {
    pub fn new(resistance: f64, star_count: f64) -> Result<Self, ConfigError> {
        let config = Self {
            resistance,
            star_count,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Landing page tuning: a heavier drag than the default.
    pub fn home() -> Self {
        Self {
            resistance: 300.0,
            ..Self::default()
        }
    }

    /// About page tuning: heavier still, and a sparser field.
    pub fn about() -> Self {
        Self {
            resistance: 450.0,
            star_count: 15.0,
            ..Self::default()
        }
    }

    pub fn with_alpha_mode(mut self, alpha_mode: AlphaMode) -> Self {
        self.alpha_mode = alpha_mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.resistance.is_finite() && self.resistance > 0.0) {
            return Err(ConfigError::Resistance(self.resistance));
        }
        if !(self.star_count.is_finite() && self.star_count > 0.0) {
            return Err(ConfigError::StarCount(self.star_count));
        }
        Ok(())
    }
}
