//! # garagelamp-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DigitalInput` / `DigitalOutput` — GPIO pins
//!   - `Transport` — publish/subscribe messaging
//!   - `Collaborator` — periodic non-blocking service hooks
//! - Implement the **use-cases**:
//!   - `DoorSwitch` — debounced door contact
//!   - `LampActuator` — relay and indicator outputs
//!   - `StatusPublisher` — throttled, retained status reports
//!   - `handle_lamp_command` — remote "set power" commands
//!   - `reconcile_door` — lamp follows the door
//!   - `Controller` — the control loop tying it all together
//!
//! ## Dependency rule
//! Depends on `garagelamp-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod controller;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ControllerConfig;
pub use controller::Controller;
