//! Door switch — the debounced door contact.
//!
//! The contact is wired to a pulled-up input and shorts to ground while the
//! door is shut, so a low level counts as "pressed".

use garagelamp_domain::gesture::{Gesture, GestureDetector, GestureTimings};
use garagelamp_domain::time::Millis;

use crate::ports::DigitalInput;

/// Debounced door contact backed by a digital input.
pub struct DoorSwitch<P> {
    pin: P,
    detector: GestureDetector,
}

impl<P: DigitalInput> DoorSwitch<P> {
    /// Wrap an already-configured pull-up input.
    pub fn new(pin: P, timings: GestureTimings) -> Self {
        Self {
            pin,
            detector: GestureDetector::new(timings),
        }
    }

    /// Sample the contact once. Call on every loop iteration.
    pub fn poll(&mut self, now: Millis) -> Option<Gesture> {
        let pressed = self.pin.is_low();
        let gesture = self.detector.update(pressed, now);
        if let Some(gesture) = gesture {
            tracing::debug!(?gesture, now, "door contact gesture");
        }
        gesture
    }
}
