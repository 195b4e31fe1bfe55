//! Device state — the single owned record of what the lamp and door are doing.
//!
//! There is exactly one [`DeviceState`] per process. The controller owns it and
//! lends it to each component for the duration of one operation.

use serde::{Deserialize, Serialize};

use crate::time::Millis;

/// Position of the garage door as last reported by the contact sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorPosition {
    Opened,
    Closed,
}

impl std::fmt::Display for DoorPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opened => f.write_str("opened"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// Lamp power and the bookkeeping for its status reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LampState {
    powered_on: bool,
    last_status_published_at: Millis,
}

impl LampState {
    /// Whether the relay is currently driven on.
    #[must_use]
    pub fn is_powered_on(&self) -> bool {
        self.powered_on
    }

    /// When the last lamp status report went out.
    #[must_use]
    pub fn last_status_published_at(&self) -> Millis {
        self.last_status_published_at
    }

    /// Record the power level that was just written to the relay.
    ///
    /// Only the lamp actuator calls this, right after driving the outputs.
    pub fn set_powered_on(&mut self, on: bool) {
        self.powered_on = on;
    }

    /// Record that a status report was transmitted at `now`.
    ///
    /// The timestamp never moves backwards.
    pub fn mark_status_published(&mut self, now: Millis) {
        self.last_status_published_at = self.last_status_published_at.max(now);
    }
}

/// Door state, derived only from debounced sensor gestures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoorState {
    pub opened: bool,
}

impl DoorState {
    #[must_use]
    pub fn position(&self) -> DoorPosition {
        if self.opened {
            DoorPosition::Opened
        } else {
            DoorPosition::Closed
        }
    }
}

/// Everything the controller knows about the installation.
///
/// Volatile: it starts at "lamp off, door closed" on every boot and is
/// re-derived from the door sensor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceState {
    pub lamp: LampState,
    pub door: DoorState,
}
