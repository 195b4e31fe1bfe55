//! Door reconciler — the lamp follows the door.
//!
//! Opening the door always switches the lamp on and closing it always
//! switches it off. A remote command can override the lamp only until the
//! next door transition.

use garagelamp_domain::error::PublishError;
use garagelamp_domain::gesture::Gesture;
use garagelamp_domain::state::{DeviceState, DoorPosition};

use crate::ports::{DigitalOutput, Transport};
use crate::services::lamp_actuator::LampActuator;
use crate::services::status_publisher::StatusPublisher;

/// Apply a debounced door gesture to the device state.
///
/// The door and lamp state are updated before the door report is sent, so a
/// transport failure never leaves the lamp out of step with the door.
///
/// # Errors
///
/// Returns [`PublishError`] if the door status could not be sent.
pub fn reconcile_door<R, I, T>(
    gesture: Gesture,
    state: &mut DeviceState,
    lamp: &mut LampActuator<R, I>,
    publisher: &StatusPublisher,
    transport: &mut T,
) -> Result<(), PublishError>
where
    R: DigitalOutput,
    I: DigitalOutput,
    T: Transport,
{
    let position = gesture.door_position();
    tracing::info!(door = %position, ?gesture, "door changed");

    state.door.opened = position == DoorPosition::Opened;
    lamp.set_power(&mut state.lamp, state.door.opened);
    publisher.publish_door_status(transport, &state.door)
}
