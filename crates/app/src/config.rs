//! Controller configuration.

use serde::Deserialize;

use garagelamp_domain::gesture::GestureTimings;
use garagelamp_domain::time::Millis;
use garagelamp_domain::topic::{TopicError, Topics};

/// Tuning knobs for the control loop.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Door contact debounce window.
    pub debounce_ms: Millis,
    /// Hold duration that turns a click into a long press.
    pub long_press_ms: Millis,
    /// Minimum time between two unforced lamp status reports.
    pub status_interval_ms: Millis,
    /// How often the daemon runs one loop iteration.
    pub tick_interval_ms: Millis,
    /// Topic names.
    pub topics: Topics,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let timings = GestureTimings::default();
        Self {
            debounce_ms: timings.debounce_ms,
            long_press_ms: timings.long_press_ms,
            status_interval_ms: 60_000,
            tick_interval_ms: 10,
            topics: Topics::default(),
        }
    }
}

/// A controller configuration that cannot work.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControllerConfigError {
    #[error("long_press_ms must be greater than debounce_ms")]
    LongPressWithinDebounce,
    #[error("tick_interval_ms must be non-zero")]
    ZeroTickInterval,
    #[error("invalid topic configuration")]
    Topic(#[from] TopicError),
}

impl ControllerConfig {
    /// Gesture thresholds for the door switch.
    #[must_use]
    pub fn timings(&self) -> GestureTimings {
        GestureTimings {
            debounce_ms: self.debounce_ms,
            long_press_ms: self.long_press_ms,
        }
    }

    /// Check the configuration for values the controller cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first [`ControllerConfigError`] found.
    pub fn validate(&self) -> Result<(), ControllerConfigError> {
        if self.long_press_ms <= self.debounce_ms {
            return Err(ControllerConfigError::LongPressWithinDebounce);
        }
        if self.tick_interval_ms == 0 {
            return Err(ControllerConfigError::ZeroTickInterval);
        }
        self.topics.validate()?;
        Ok(())
    }
}
