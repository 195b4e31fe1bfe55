//! Messaging transport port — publish/subscribe with retained messages.
//!
//! Connecting, reconnecting, authentication and subscriptions are the
//! adapter's business. The core only sends messages and drains whatever the
//! adapter has queued since the last loop iteration.

use garagelamp_domain::error::PublishError;

/// A message received on a subscribed topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub topic: String,
    pub payload: Vec<u8>,
}

impl InboundMessage {
    #[must_use]
    pub fn new(topic: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
        }
    }
}

/// Publish/subscribe messaging as seen by the control loop.
pub trait Transport {
    /// Queue `payload` for `topic`. Must not block.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Transport`] when the adapter cannot accept the
    /// message right now.
    fn send(&mut self, topic: &str, payload: Vec<u8>, retain: bool) -> Result<(), PublishError>;

    /// Take the next queued inbound message, if any. Must not block.
    fn next_inbound(&mut self) -> Option<InboundMessage>;
}
