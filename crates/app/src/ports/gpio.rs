//! GPIO port — digital pin reads and writes.
//!
//! Pin access is treated as infallible once a pin has been acquired; adapters
//! report acquisition failures at construction time instead.

/// Logic level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// `High` when `high` is true, `Low` otherwise.
    #[must_use]
    pub fn from_high(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

/// A digital input pin.
pub trait DigitalInput {
    /// Sample the current level.
    fn level(&mut self) -> Level;

    /// Whether the pin currently reads low.
    fn is_low(&mut self) -> bool {
        self.level() == Level::Low
    }
}

/// A digital output pin.
pub trait DigitalOutput {
    /// Drive the pin to `level`.
    fn write(&mut self, level: Level);
}

impl<T: DigitalInput + ?Sized> DigitalInput for Box<T> {
    fn level(&mut self) -> Level {
        (**self).level()
    }
}

impl<T: DigitalOutput + ?Sized> DigitalOutput for Box<T> {
    fn write(&mut self, level: Level) {
        (**self).write(level);
    }
}
