//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Every port is synchronous: the control loop never waits on IO.

pub mod collaborator;
pub mod gpio;
pub mod transport;

pub use collaborator::Collaborator;
pub use gpio::{DigitalInput, DigitalOutput, Level};
pub use transport::{InboundMessage, Transport};
