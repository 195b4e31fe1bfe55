//! Messaging topics used by the controller.

use serde::Deserialize;

/// Topic names, one per role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Topics {
    /// Inbound lamp commands.
    pub lamp_set: String,
    /// Retained lamp status reports.
    pub lamp_get: String,
    /// Retained door status reports.
    pub door_get: String,
}

impl Default for Topics {
    fn default() -> Self {
        Self {
            lamp_set: "set/garage/space/lamp".to_string(),
            lamp_get: "get/garage/space/lamp".to_string(),
            door_get: "get/garage/space/door/internal".to_string(),
        }
    }
}

/// A topic configuration that cannot work.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TopicError {
    #[error("{0} topic is empty")]
    Empty(&'static str),
    #[error("{0} topic contains a wildcard")]
    Wildcard(&'static str),
    #[error("{0} and {1} topics are identical")]
    Duplicate(&'static str, &'static str),
}

impl Topics {
    /// Whether `topic` is the lamp command topic.
    #[must_use]
    pub fn is_lamp_set(&self, topic: &str) -> bool {
        self.lamp_set == topic
    }

    /// Check that every topic is a concrete, distinct name.
    ///
    /// # Errors
    ///
    /// Returns the first [`TopicError`] found.
    pub fn validate(&self) -> Result<(), TopicError> {
        let roles = [
            ("lamp_set", &self.lamp_set),
            ("lamp_get", &self.lamp_get),
            ("door_get", &self.door_get),
        ];
        for (role, topic) in roles {
            if topic.is_empty() {
                return Err(TopicError::Empty(role));
            }
            if topic.contains(['+', '#']) {
                return Err(TopicError::Wildcard(role));
            }
        }
        for (i, (left, a)) in roles.iter().enumerate() {
            for (right, b) in &roles[i + 1..] {
                if a == b {
                    return Err(TopicError::Duplicate(*left, *right));
                }
            }
        }
        Ok(())
    }
}
