//! Wire payloads exchanged over the messaging channel.
//!
//! | Topic role | Payload |
//! |------------|---------|
//! | lamp-set (in) | `{"status":{"powerOn":true},"messageId":"m1"}` |
//! | lamp-get (out) | `{"status":{"powerOn":true},"messageId":"m1"}` |
//! | door-get (out) | `{"status":{"door":"opened"}}` |
//!
//! `messageId` is an opaque correlation token echoed from a command to its
//! reply. It is omitted from reports that answer no command.

use serde::Serialize;
use serde_json::Value;

use crate::error::CommandError;
use crate::state::DoorPosition;

/// A validated command received on the lamp-set topic.
///
/// A command without any recognized field is still valid: it changes nothing
/// but is answered with a status report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundCommand {
    /// Requested lamp power, if the sender asked for one.
    pub power_on: Option<bool>,
    /// Correlation token to echo back.
    pub message_id: Option<String>,
}

impl InboundCommand {
    /// Parse and validate a raw payload.
    ///
    /// The root and `status` must be JSON objects. Unknown fields are
    /// ignored, and so are `powerOn` and `messageId` when they are not a
    /// boolean and a string.
    ///
    /// # Errors
    ///
    /// - [`CommandError::Malformed`] if the payload is not JSON.
    /// - [`CommandError::MissingStatus`] if the root is not an object or has
    ///   no `status` object.
    pub fn parse(payload: &[u8]) -> Result<Self, CommandError> {
        let root: Value = serde_json::from_slice(payload)?;
        let status = root
            .get("status")
            .and_then(Value::as_object)
            .ok_or(CommandError::MissingStatus)?;

        Ok(Self {
            power_on: status.get("powerOn").and_then(Value::as_bool),
            message_id: root
                .get("messageId")
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }
}

/// Lamp section of a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LampStatus {
    pub power_on: bool,
}

/// Door section of a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoorStatus {
    pub door: DoorPosition,
}

/// An outbound status report, built fresh for every publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport<'a, S> {
    pub status: S,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<&'a str>,
}

impl<'a> StatusReport<'a, LampStatus> {
    /// Lamp report, optionally answering the command `message_id`.
    #[must_use]
    pub fn lamp(power_on: bool, message_id: Option<&'a str>) -> Self {
        Self {
            status: LampStatus { power_on },
            message_id,
        }
    }
}

impl StatusReport<'static, DoorStatus> {
    /// Door report. Door reports never carry a correlation token.
    #[must_use]
    pub fn door(position: DoorPosition) -> Self {
        Self {
            status: DoorStatus { door: position },
            message_id: None,
        }
    }
}

impl<S: Serialize> StatusReport<'_, S> {
    /// Serialize to the compact JSON sent on the wire.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; none is expected for these shapes.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
