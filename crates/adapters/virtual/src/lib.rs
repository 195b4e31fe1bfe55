//! # garagelamp-adapter-virtual
//!
//! Virtual adapter — simulated pins and an in-memory transport.
//!
//! Every type here is a cheap handle over shared state: clone it, give one
//! copy to the controller and keep the other to drive or inspect it.
//!
//! | Type | Port | Handle side |
//! |------|------|-------------|
//! | [`VirtualContact`] | `DigitalInput` | open/close the door |
//! | [`VirtualOutput`] | `DigitalOutput` | read the last level and the write count |
//! | [`VirtualTransport`] | `Transport` | inject messages, read what was published |
//!
//! ## Dependency rule
//! Depends on `garagelamp-app` (port traits) and `garagelamp-domain` only.

mod pins;
mod transport;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use pins::{VirtualContact, VirtualOutput};
pub use transport::{PublishedMessage, VirtualTransport, VirtualTransportError};

/// Lock shared state, recovering it if a holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
