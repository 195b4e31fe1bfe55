//! Pin assignment (BCM numbering).

use serde::Deserialize;

use crate::error::GpioError;

/// Highest BCM line exposed on the 40-pin header.
const MAX_BCM_PIN: u8 = 27;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PinConfig {
    /// Door contact, wired to ground when the door is shut.
    pub door_contact_pin: u8,
    /// Lamp relay, active-high.
    pub lamp_relay_pin: u8,
    /// Onboard indicator LED, active-low.
    pub indicator_pin: u8,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            door_contact_pin: 14,
            lamp_relay_pin: 4,
            indicator_pin: 2,
        }
    }
}

impl PinConfig {
    /// Check that every pin exists and no pin is used twice.
    ///
    /// # Errors
    ///
    /// Returns [`GpioError::InvalidPin`] or [`GpioError::PinConflict`].
    pub fn validate(&self) -> Result<(), GpioError> {
        let pins = [
            self.door_contact_pin,
            self.lamp_relay_pin,
            self.indicator_pin,
        ];
        if let Some(&pin) = pins.iter().find(|&&pin| pin > MAX_BCM_PIN) {
            return Err(GpioError::InvalidPin(pin));
        }
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(GpioError::PinConflict(*pin));
            }
        }
        Ok(())
    }
}
