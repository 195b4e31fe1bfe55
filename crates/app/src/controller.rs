//! Controller — the control loop.
//!
//! The controller owns the [`DeviceState`] and every component, and runs one
//! loop iteration per [`tick`](Controller::tick):
//!
//! 1. poll the door switch and reconcile the lamp with any door gesture;
//! 2. service each registered [`Collaborator`], in registration order;
//! 3. drain the transport and dispatch every queued inbound message;
//! 4. send the periodic (throttled) lamp status.
//!
//! Everything runs synchronously on the caller's thread. A door gesture and a
//! command handled in the same iteration are applied in that order, so the
//! command wins.

use garagelamp_domain::state::DeviceState;
use garagelamp_domain::time::Millis;

use crate::config::ControllerConfig;
use crate::ports::{Collaborator, DigitalInput, DigitalOutput, InboundMessage, Transport};
use crate::services::command_handler::handle_lamp_command;
use crate::services::door_reconciler::reconcile_door;
use crate::services::door_switch::DoorSwitch;
use crate::services::lamp_actuator::LampActuator;
use crate::services::status_publisher::StatusPublisher;

/// Garage lamp controller.
///
/// - `P`: door contact input
/// - `R`: lamp relay output
/// - `I`: onboard indicator output
/// - `T`: messaging transport
pub struct Controller<P, R, I, T> {
    switch: DoorSwitch<P>,
    lamp: LampActuator<R, I>,
    publisher: StatusPublisher,
    transport: T,
    collaborators: Vec<Box<dyn Collaborator>>,
    state: DeviceState,
}

impl<P, R, I, T> Controller<P, R, I, T>
where
    P: DigitalInput,
    R: DigitalOutput,
    I: DigitalOutput,
    T: Transport,
{
    /// Build a controller and drive the lamp outputs to "off".
    pub fn new(config: &ControllerConfig, contact: P, relay: R, indicator: I, transport: T) -> Self {
        let mut state = DeviceState::default();
        let mut lamp = LampActuator::new(relay, indicator);
        lamp.set_power(&mut state.lamp, false);

        Self {
            switch: DoorSwitch::new(contact, config.timings()),
            lamp,
            publisher: StatusPublisher::new(config.topics.clone(), config.status_interval_ms),
            transport,
            collaborators: Vec::new(),
            state,
        }
    }

    /// Register a collaborator to be serviced on every tick.
    #[must_use]
    pub fn with_collaborator(mut self, collaborator: impl Collaborator + 'static) -> Self {
        tracing::debug!(name = collaborator.name(), "collaborator registered");
        self.collaborators.push(Box::new(collaborator));
        self
    }

    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Run one loop iteration at time `now`.
    pub fn tick(&mut self, now: Millis) {
        if let Some(gesture) = self.switch.poll(now) {
            if let Err(err) = reconcile_door(
                gesture,
                &mut self.state,
                &mut self.lamp,
                &self.publisher,
                &mut self.transport,
            ) {
                tracing::warn!(error = %err, "failed to publish door status");
            }
        }

        for collaborator in &mut self.collaborators {
            collaborator.service(now);
        }

        while let Some(message) = self.transport.next_inbound() {
            self.dispatch(&message, now);
        }

        if let Err(err) = self.publisher.publish_lamp_status(
            &mut self.transport,
            &mut self.state.lamp,
            now,
            false,
            None,
        ) {
            tracing::warn!(error = %err, "failed to publish periodic lamp status");
        }
    }

    /// Route one inbound message by topic.
    ///
    /// Only the lamp-set topic is understood; anything else is logged and
    /// dropped, as are malformed commands.
    pub fn dispatch(&mut self, message: &InboundMessage, now: Millis) {
        if !self.publisher.topics().is_lamp_set(&message.topic) {
            tracing::warn!(topic = %message.topic, "dropping message on unrecognized topic");
            return;
        }

        match handle_lamp_command(
            &message.payload,
            now,
            &mut self.state,
            &mut self.lamp,
            &self.publisher,
            &mut self.transport,
        ) {
            Ok(outcome) => tracing::debug!(
                power_changed = outcome.power_changed,
                echoed = outcome.echoed,
                "lamp command handled"
            ),
            Err(err) => tracing::warn!(
                error = %err,
                payload = %String::from_utf8_lossy(&message.payload),
                "dropping lamp command"
            ),
        }
    }
}
