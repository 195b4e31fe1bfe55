//! Collaborator port — periodic hooks serviced by the control loop.
//!
//! Network link checks, remote log sinks and firmware-update checks all
//! need a slice of every loop iteration. They register as collaborators and
//! the controller services them in registration order.

use garagelamp_domain::time::Millis;

/// A non-blocking service hook invoked once per loop iteration.
pub trait Collaborator {
    /// Short name used in logs (e.g. `"mqtt-link"`).
    fn name(&self) -> &'static str;

    /// Do a bounded amount of work and return.
    fn service(&mut self, now: Millis);
}
