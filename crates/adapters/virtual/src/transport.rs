//! In-memory transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use garagelamp_app::ports::{InboundMessage, Transport};
use garagelamp_domain::error::PublishError;

use crate::lock;

/// Errors returned by [`VirtualTransport`].
#[derive(Debug, thiserror::Error)]
pub enum VirtualTransportError {
    #[error("virtual transport is offline")]
    Offline,
}

/// A message sent through the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub topic: String,
    pub payload: Vec<u8>,
    pub retain: bool,
}

impl PublishedMessage {
    /// The payload as text, lossily decoded.
    #[must_use]
    pub fn payload_str(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

#[derive(Default)]
struct Inner {
    published: Vec<PublishedMessage>,
    inbound: VecDeque<InboundMessage>,
    offline: bool,
}

/// Records sent messages and replays injected ones.
#[derive(Clone, Default)]
pub struct VirtualTransport {
    inner: Arc<Mutex<Inner>>,
}

impl VirtualTransport {
    /// Queue a message as if it arrived from the broker.
    pub fn inject(&self, topic: impl Into<String>, payload: impl Into<Vec<u8>>) {
        lock(&self.inner)
            .inbound
            .push_back(InboundMessage::new(topic, payload));
    }

    /// While offline every send fails.
    pub fn set_offline(&self, offline: bool) {
        lock(&self.inner).offline = offline;
    }

    #[must_use]
    pub fn published(&self) -> Vec<PublishedMessage> {
        lock(&self.inner).published.clone()
    }

    #[must_use]
    pub fn published_on(&self, topic: &str) -> Vec<PublishedMessage> {
        lock(&self.inner)
            .published
            .iter()
            .filter(|m| m.topic == topic)
            .cloned()
            .collect()
    }
}

impl Transport for VirtualTransport {
    fn send(&mut self, topic: &str, payload: Vec<u8>, retain: bool) -> Result<(), PublishError> {
        let mut inner = lock(&self.inner);
        if inner.offline {
            return Err(PublishError::Transport(Box::new(
                VirtualTransportError::Offline,
            )));
        }
        inner.published.push(PublishedMessage {
            topic: topic.to_string(),
            payload,
            retain,
        });
        Ok(())
    }

    fn next_inbound(&mut self) -> Option<InboundMessage> {
        lock(&self.inner).inbound.pop_front()
    }
}
