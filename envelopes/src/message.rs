//! Tagged message union and JSON envelope codec.
//!
//! DESIGN
//! ======
//! Every message serializes as `{"type": "<kebab-case>", "payload": {...}}`.
//! The `type` tag doubles as the routing key for handler registration, so
//! [`MessageType`] mirrors the variants of [`Message`] one to one.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_envelope`] and [`encode_envelope`].
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The text is not valid JSON or does not describe a known message.
    #[error("invalid envelope: {0}")]
    Json(#[from] serde_json::Error),
}

/// One message exchanged between editor windows and the hub.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Message {
    /// Liveness ping. Carries no payload.
    Heartbeat,
    /// The selected element changed. `None` clears the selection.
    ElementSelected {
        #[serde(rename = "elementId")]
        element_id: Option<String>,
    },
    /// A single property of an element was edited.
    PropertyChanged {
        #[serde(rename = "elementId")]
        element_id: String,
        property: String,
        value: Value,
    },
    /// The flexbox layout of an element was replaced.
    LayoutChanged {
        #[serde(rename = "elementId")]
        element_id: String,
        layout: Value,
    },
}

/// Discriminant of [`Message`], used as the handler routing key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    Heartbeat,
    ElementSelected,
    PropertyChanged,
    LayoutChanged,
}

impl MessageType {
    /// Wire tag written to the envelope `type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heartbeat => "heartbeat",
            Self::ElementSelected => "element-selected",
            Self::PropertyChanged => "property-changed",
            Self::LayoutChanged => "layout-changed",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Message {
    #[must_use]
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::Heartbeat => MessageType::Heartbeat,
            Self::ElementSelected { .. } => MessageType::ElementSelected,
            Self::PropertyChanged { .. } => MessageType::PropertyChanged,
            Self::LayoutChanged { .. } => MessageType::LayoutChanged,
        }
    }
}

/// Serialize a message into envelope text.
///
/// # Errors
///
/// Returns [`EnvelopeError::Json`] if a payload value cannot be serialized.
pub fn encode_envelope(message: &Message) -> Result<String, EnvelopeError> {
    Ok(serde_json::to_string(message)?)
}

/// Parse envelope text into a message.
///
/// # Errors
///
/// Returns [`EnvelopeError::Json`] for malformed JSON, an unknown `type` tag,
/// or a payload that does not match its tag.
pub fn decode_envelope(envelope: &str) -> Result<Message, EnvelopeError> {
    Ok(serde_json::from_str(envelope)?)
}
