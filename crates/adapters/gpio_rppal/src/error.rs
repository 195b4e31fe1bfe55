//! GPIO adapter error types.

/// Errors raised while acquiring pins.
#[derive(Debug, thiserror::Error)]
pub enum GpioError {
    /// The GPIO peripheral or a pin could not be opened.
    #[error("gpio access failed")]
    Access(#[from] rppal::gpio::Error),

    #[error("BCM pin {0} is not available on the header")]
    InvalidPin(u8),

    #[error("BCM pin {0} is assigned more than once")]
    PinConflict(u8),
}
