//! Command handler — applies "set power" commands received on lamp-set.
//!
//! Every well-formed command is answered with exactly one forced lamp status
//! report carrying the command's `messageId`, whether or not it changed
//! anything. Malformed commands get no answer.

use garagelamp_domain::error::CommandError;
use garagelamp_domain::payload::InboundCommand;
use garagelamp_domain::state::DeviceState;
use garagelamp_domain::time::Millis;

use crate::ports::{DigitalOutput, Transport};
use crate::services::lamp_actuator::LampActuator;
use crate::services::status_publisher::StatusPublisher;

/// What a well-formed command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Whether the relay was switched.
    pub power_changed: bool,
    /// Whether the status echo reached the transport.
    pub echoed: bool,
}

/// Apply one lamp command payload.
///
/// # Errors
///
/// Returns [`CommandError`] for payloads that are not valid JSON or are not
/// an object with a `status` object. Nothing is changed or sent in that case.
#[tracing::instrument(skip_all, fields(payload_len = payload.len(), now = now))]
pub fn handle_lamp_command<R, I, T>(
    payload: &[u8],
    now: Millis,
    state: &mut DeviceState,
    lamp: &mut LampActuator<R, I>,
    publisher: &StatusPublisher,
    transport: &mut T,
) -> Result<CommandOutcome, CommandError>
where
    R: DigitalOutput,
    I: DigitalOutput,
    T: Transport,
{
    let command = InboundCommand::parse(payload)?;

    let power_changed = match command.power_on {
        Some(on) if on != state.lamp.is_powered_on() => {
            lamp.set_power(&mut state.lamp, on);
            true
        }
        Some(on) => {
            tracing::debug!(powered_on = on, "lamp already in requested state");
            false
        }
        None => false,
    };

    let echoed = match publisher.publish_lamp_status(
        transport,
        &mut state.lamp,
        now,
        true,
        command.message_id.as_deref(),
    ) {
        Ok(sent) => sent,
        Err(err) => {
            tracing::warn!(
                error = %err,
                message_id = command.message_id.as_deref(),
                "failed to echo lamp status"
            );
            false
        }
    };

    Ok(CommandOutcome {
        power_changed,
        echoed,
    })
}
