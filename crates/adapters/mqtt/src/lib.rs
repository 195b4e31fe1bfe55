//! # garagelamp-adapter-mqtt
//!
//! MQTT adapter — implements the [`Transport`](garagelamp_app::ports::Transport)
//! port on top of `rumqttc`.
//!
//! [`connect`] splits the adapter in three parts:
//!
//! - [`MqttTransport`] is handed to the controller. Sending never blocks and
//!   inbound messages are drained from a bounded queue.
//! - [`MqttConnection`] owns the `rumqttc` event loop and must be spawned on
//!   the async runtime. It (re)subscribes on every connection acknowledgement
//!   and keeps polling after errors.
//! - [`LinkMonitor`] is a collaborator that logs link transitions from the
//!   control loop.
//!
//! ## Dependency rule
//! Depends on `garagelamp-app` (port traits) and `garagelamp-domain` only.

pub mod config;
pub mod error;
pub mod link;
pub mod transport;

pub use config::MqttConfig;
pub use error::MqttError;
pub use link::{ConnectionState, LinkMonitor};
pub use transport::{MqttConnection, MqttTransport, connect};
