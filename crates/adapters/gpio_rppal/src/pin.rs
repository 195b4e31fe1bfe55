//! Port implementations over rppal pins.

use garagelamp_app::ports::{DigitalInput, DigitalOutput, Level};
use rppal::gpio::{self, InputPin, OutputPin};

pub struct RppalInput(InputPin);

impl RppalInput {
    pub(crate) fn new(pin: InputPin) -> Self {
        Self(pin)
    }
}

impl DigitalInput for RppalInput {
    fn level(&mut self) -> Level {
        from_rppal(self.0.read())
    }
}

pub struct RppalOutput(OutputPin);

impl RppalOutput {
    pub(crate) fn new(pin: OutputPin) -> Self {
        Self(pin)
    }
}

impl DigitalOutput for RppalOutput {
    fn write(&mut self, level: Level) {
        self.0.write(to_rppal(level));
    }
}

fn from_rppal(level: gpio::Level) -> Level {
    match level {
        gpio::Level::Low => Level::Low,
        gpio::Level::High => Level::High,
    }
}

fn to_rppal(level: Level) -> gpio::Level {
    match level {
        Level::Low => gpio::Level::Low,
        Level::High => gpio::Level::High,
    }
}
