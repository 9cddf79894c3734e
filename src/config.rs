use log::Level;

use crate::error::PortfolioError;
use crate::reveal::visual::{Easing, Motion};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const DEFAULT_FALLBACK_MS: u32 = 2000;

/// Settings for one reveal-on-scroll section.
///
/// Every `RevealSection` carries its own copy; there are no global defaults
/// beyond `RevealConfig::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the container that must be visible, in `0.0..=1.0`.
    /// Only settable through `with_threshold`.
    threshold: f64,
    /// Stop watching after the first reveal.
    pub trigger_once: bool,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Downward offset of the hidden state.
    pub offset_px: f64,
    pub easing: Easing,
    /// Reveal anyway if the observer has not reported anything after this
    /// long.
    pub fallback_after_ms: Option<u32>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: true,
            duration_ms: 600,
            delay_ms: 0,
            offset_px: 50.0,
            easing: Easing::EaseOut,
            fallback_after_ms: Some(DEFAULT_FALLBACK_MS),
        }
    }
}

impl RevealConfig {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn with_threshold(mut self, threshold: f64) -> Result<Self, PortfolioError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PortfolioError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn every_time(mut self) -> Self {
        self.trigger_once = false;
        self
    }

    pub fn with_fallback(mut self, after_ms: u32) -> Self {
        self.fallback_after_ms = Some(after_ms);
        self
    }

    pub fn without_fallback(mut self) -> Self {
        self.fallback_after_ms = None;
        self
    }

    pub fn motion(&self) -> Motion {
        Motion {
            duration_ms: self.duration_ms,
            delay_ms: self.delay_ms,
            easing: self.easing,
        }
    }
}
