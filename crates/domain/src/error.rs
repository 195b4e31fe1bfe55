//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]` or an
//! explicit boxing at the port boundary. No `String` variants.

/// Why an inbound command payload was rejected.
///
/// Rejected commands are logged and dropped: they change no state and get no
/// reply.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The payload is not valid JSON.
    #[error("malformed command payload")]
    Malformed(#[from] serde_json::Error),

    /// The payload is valid JSON but is not an object with a `status`
    /// object.
    #[error("command payload has no \"status\" object")]
    MissingStatus,
}

/// Why a status report could not be sent.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The report could not be serialized.
    #[error("failed to encode status report")]
    Encode(#[from] serde_json::Error),

    /// The messaging transport refused the message.
    #[error("transport rejected the message")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
