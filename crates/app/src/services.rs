//! Application services — use-case implementations.
//!
//! Each service accepts port trait implementations via generic parameters,
//! keeping this layer decoupled from concrete adapters. Services never own
//! the [`DeviceState`](garagelamp_domain::state::DeviceState); they borrow the
//! part they need for the duration of one call.

pub mod command_handler;
pub mod door_reconciler;
pub mod door_switch;
pub mod lamp_actuator;
pub mod status_publisher;
