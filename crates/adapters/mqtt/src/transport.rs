//! rumqttc-backed transport and its event loop.

use std::time::Duration;

use garagelamp_app::ports::{InboundMessage, Transport};
use garagelamp_domain::error::PublishError;
use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, Publish, QoS};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch};

use crate::config::MqttConfig;
use crate::error::MqttError;
use crate::link::{ConnectionState, LinkMonitor};

/// Outstanding requests between the transport and the event loop.
const REQUEST_CAPACITY: usize = 10;

/// Build the three halves of the MQTT adapter.
///
/// Nothing touches the network until [`MqttConnection::run`] is polled.
pub fn connect(
    config: &MqttConfig,
    subscribe_topic: impl Into<String>,
) -> (MqttTransport, MqttConnection, LinkMonitor) {
    let mut options = MqttOptions::new(&config.client_id, &config.broker_host, config.broker_port);
    options.set_keep_alive(config.keep_alive());
    if let Some(username) = &config.username {
        options.set_credentials(username, config.password.clone().unwrap_or_default());
    }

    let (client, eventloop) = AsyncClient::new(options, REQUEST_CAPACITY);
    let (inbound_tx, inbound_rx) = mpsc::channel(config.inbound_capacity.max(1));
    let (state_tx, state_rx) = watch::channel(ConnectionState::Disconnected);

    let transport = MqttTransport {
        client: client.clone(),
        inbound: inbound_rx,
        state: state_rx.clone(),
    };
    let connection = MqttConnection {
        client,
        eventloop,
        subscribe_topic: subscribe_topic.into(),
        inbound: inbound_tx,
        state: state_tx,
        reconnect_delay: config.reconnect_delay(),
    };

    (transport, connection, LinkMonitor::new(state_rx))
}

/// The controller-facing half: non-blocking send and inbound drain.
pub struct MqttTransport {
    client: AsyncClient,
    inbound: mpsc::Receiver<InboundMessage>,
    state: watch::Receiver<ConnectionState>,
}

impl MqttTransport {
    fn try_send(&self, topic: &str, payload: Vec<u8>, retain: bool) -> Result<(), MqttError> {
        if *self.state.borrow() != ConnectionState::Connected {
            return Err(MqttError::NotConnected);
        }
        self.client
            .try_publish(topic, QoS::AtLeastOnce, retain, payload)?;
        Ok(())
    }
}

impl Transport for MqttTransport {
    fn send(&mut self, topic: &str, payload: Vec<u8>, retain: bool) -> Result<(), PublishError> {
        self.try_send(topic, payload, retain).map_err(PublishError::from)
    }

    fn next_inbound(&mut self) -> Option<InboundMessage> {
        self.inbound.try_recv().ok()
    }
}

/// The runtime-facing half: drives the rumqttc event loop.
pub struct MqttConnection {
    client: AsyncClient,
    eventloop: EventLoop,
    subscribe_topic: String,
    inbound: mpsc::Sender<InboundMessage>,
    state: watch::Sender<ConnectionState>,
    reconnect_delay: Duration,
}

impl MqttConnection {
    /// Poll the event loop until the transport is dropped.
    ///
    /// Connection errors are logged and polling resumes after the configured
    /// delay, which makes rumqttc reconnect.
    pub async fn run(mut self) {
        tracing::info!(topic = %self.subscribe_topic, "mqtt event loop started");

        while !self.inbound.is_closed() {
            match self.eventloop.poll().await {
                Ok(Event::Incoming(Packet::ConnAck(_))) => {
                    tracing::info!("mqtt connected");
                    // the broker may have lost the session, so subscribe on every connect
                    if let Err(err) = self
                        .client
                        .try_subscribe(&self.subscribe_topic, QoS::AtLeastOnce)
                    {
                        tracing::error!(error = %err, topic = %self.subscribe_topic, "subscribe failed");
                    }
                    self.state.send_replace(ConnectionState::Connected);
                }
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    forward_publish(&self.inbound, &publish);
                }
                Ok(Event::Incoming(Packet::Disconnect)) => {
                    tracing::warn!("mqtt disconnected by broker");
                    self.state.send_replace(ConnectionState::Disconnected);
                }
                Ok(_) => {}
                Err(err) => {
                    self.state.send_replace(ConnectionState::Disconnected);
                    tracing::error!(
                        error = %err,
                        retry_in_secs = self.reconnect_delay.as_secs(),
                        "mqtt connection error"
                    );
                    tokio::time::sleep(self.reconnect_delay).await;
                }
            }
        }

        tracing::debug!("mqtt event loop stopped");
    }
}

/// Queue a received publish for the control loop.
///
/// Returns whether the message was queued. A full queue drops the message.
fn forward_publish(inbound: &mpsc::Sender<InboundMessage>, publish: &Publish) -> bool {
    let message = InboundMessage::new(publish.topic.clone(), publish.payload.to_vec());
    match inbound.try_send(message) {
        Ok(()) => true,
        Err(TrySendError::Full(message)) => {
            tracing::warn!(topic = %message.topic, "inbound queue full, dropping message");
            false
        }
        Err(TrySendError::Closed(_)) => false,
    }
}
