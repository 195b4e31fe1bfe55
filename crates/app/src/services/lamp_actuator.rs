//! Lamp actuator — owns the relay and the onboard indicator.
//!
//! The relay is active-high. The indicator LED is active-low and mirrors the
//! lamp, so it is driven low while the lamp is on.

use garagelamp_domain::state::LampState;

use crate::ports::{DigitalOutput, Level};

/// Relay and indicator outputs for the garage lamp.
pub struct LampActuator<R, I> {
    relay: R,
    indicator: I,
}

impl<R: DigitalOutput, I: DigitalOutput> LampActuator<R, I> {
    pub fn new(relay: R, indicator: I) -> Self {
        Self { relay, indicator }
    }

    /// Drive both outputs for `on` and record it in `lamp`.
    ///
    /// Always writes the pins, even when `lamp` already says `on`; callers
    /// that want to skip redundant writes check first.
    pub fn set_power(&mut self, lamp: &mut LampState, on: bool) {
        self.relay.write(Level::from_high(on));
        self.indicator.write(Level::from_high(!on));
        lamp.set_powered_on(on);
        tracing::info!(powered_on = on, "lamp power set");
    }

    #[cfg(test)]
    pub(crate) fn pins(&self) -> (&R, &I) {
        (&self.relay, &self.indicator)
    }
}
