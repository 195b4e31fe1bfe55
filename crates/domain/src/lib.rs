//! # garagelamp-domain
//!
//! Pure domain model for the garage lamp controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, millisecond timestamps
//! - Define the **device state** (lamp power, door position) owned by the controller
//! - Define the **wire payloads** exchanged over the messaging channel
//! - Define the **topics** the controller publishes and subscribes to
//! - Turn raw contact levels into debounced **gestures**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod gesture;
pub mod payload;
pub mod state;
pub mod topic;
