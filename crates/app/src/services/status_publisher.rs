//! Status publisher — serializes device state and sends retained reports.
//!
//! Lamp reports are also re-sent periodically so late subscribers converge,
//! which is why they are throttled to one per `min_interval` unless forced.
//! Door reports only go out on door transitions and are never throttled.

use garagelamp_domain::error::PublishError;
use garagelamp_domain::payload::StatusReport;
use garagelamp_domain::state::{DoorState, LampState};
use garagelamp_domain::time::{Millis, elapsed};
use garagelamp_domain::topic::Topics;

use crate::ports::Transport;

/// Builds status reports and sends them on the configured topics.
pub struct StatusPublisher {
    topics: Topics,
    min_interval: Millis,
}

impl StatusPublisher {
    pub fn new(topics: Topics, min_interval: Millis) -> Self {
        Self {
            topics,
            min_interval,
        }
    }

    #[must_use]
    pub fn topics(&self) -> &Topics {
        &self.topics
    }

    /// Send the lamp status unless throttled.
    ///
    /// Unforced calls within `min_interval` of the previous report do nothing.
    /// The publish timestamp only moves when a report was actually sent.
    ///
    /// Returns whether a report was sent.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the report could not be encoded or the
    /// transport refused it; `lamp` is left untouched in that case.
    pub fn publish_lamp_status<T: Transport>(
        &self,
        transport: &mut T,
        lamp: &mut LampState,
        now: Millis,
        force: bool,
        message_id: Option<&str>,
    ) -> Result<bool, PublishError> {
        if !force && elapsed(now, lamp.last_status_published_at()) < self.min_interval {
            return Ok(false);
        }

        let payload = StatusReport::lamp(lamp.is_powered_on(), message_id).to_json()?;
        transport.send(&self.topics.lamp_get, payload, true)?;
        lamp.mark_status_published(now);

        tracing::debug!(
            powered_on = lamp.is_powered_on(),
            force,
            message_id,
            "lamp status published"
        );
        Ok(true)
    }

    /// Send the door status. Never throttled.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the report could not be encoded or the
    /// transport refused it.
    pub fn publish_door_status<T: Transport>(
        &self,
        transport: &mut T,
        door: &DoorState,
    ) -> Result<(), PublishError> {
        let position = door.position();
        let payload = StatusReport::door(position).to_json()?;
        transport.send(&self.topics.door_get, payload, true)?;

        tracing::debug!(door = %position, "door status published");
        Ok(())
    }
}
