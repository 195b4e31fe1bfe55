//! # garagelamp-adapter-gpio-rppal
//!
//! Raspberry Pi GPIO adapter — implements the
//! [`DigitalInput`](garagelamp_app::ports::DigitalInput) and
//! [`DigitalOutput`](garagelamp_app::ports::DigitalOutput) ports with `rppal`.
//!
//! Pins are acquired once by [`open`]; after that reads and writes cannot
//! fail.
//!
//! ## Dependency rule
//! Depends on `garagelamp-app` (port traits) only.

pub mod config;
pub mod error;
mod pin;

use rppal::gpio::Gpio;

pub use config::PinConfig;
pub use error::GpioError;
pub use pin::{RppalInput, RppalOutput};

/// The three pins the controller drives.
pub struct RppalPins {
    pub contact: RppalInput,
    pub relay: RppalOutput,
    pub indicator: RppalOutput,
}

/// Validate `config` and acquire the pins.
///
/// The contact becomes a pulled-up input. Both outputs start low, which
/// leaves the relay open until the controller drives the lamp.
///
/// # Errors
///
/// Returns [`GpioError`] if the pin numbers are invalid or the GPIO
/// peripheral refuses a pin.
pub fn open(config: &PinConfig) -> Result<RppalPins, GpioError> {
    config.validate()?;
    let gpio = Gpio::new()?;

    let contact = RppalInput::new(gpio.get(config.door_contact_pin)?.into_input_pullup());
    let relay = RppalOutput::new(gpio.get(config.lamp_relay_pin)?.into_output_low());
    let indicator = RppalOutput::new(gpio.get(config.indicator_pin)?.into_output_low());

    tracing::info!(
        door_contact_pin = config.door_contact_pin,
        lamp_relay_pin = config.lamp_relay_pin,
        indicator_pin = config.indicator_pin,
        "gpio pins acquired"
    );

    Ok(RppalPins {
        contact,
        relay,
        indicator,
    })
}
