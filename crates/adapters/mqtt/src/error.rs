//! MQTT adapter error types.

use garagelamp_domain::error::PublishError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The broker link is down; the message was not queued.
    #[error("MQTT client not connected")]
    NotConnected,

    /// The rumqttc client refused the request.
    #[error("MQTT client error")]
    Client(#[from] rumqttc::ClientError),
}

impl From<MqttError> for PublishError {
    fn from(err: MqttError) -> Self {
        Self::Transport(Box::new(err))
    }
}
