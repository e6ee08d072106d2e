//! Builders for the editor messages emitted by property controls.
//!
//! Property edits travel as `property-changed` messages carrying a single
//! JSON value; whole-layout replacements travel as `layout-changed` with the
//! serialized [`LayoutProperties`].

#[cfg(test)]
#[path = "message_emit_test.rs"]
mod message_emit_test;

use envelopes::Message;

use crate::util::layout::LayoutProperties;

/// Message for a numeric property edit. A cleared field sends `null`.
#[must_use]
pub fn number_property_changed(element_id: &str, property: &str, value: Option<f64>) -> Message {
    let value = value
        .and_then(serde_json::Number::from_f64)
        .map_or(serde_json::Value::Null, serde_json::Value::Number);
    Message::PropertyChanged { element_id: element_id.to_owned(), property: property.to_owned(), value }
}

/// Message replacing the layout of `element_id`.
///
/// # Errors
///
/// Returns the serializer error if the layout cannot be represented as JSON.
pub fn layout_changed(element_id: &str, layout: &LayoutProperties) -> Result<Message, serde_json::Error> {
    Ok(Message::LayoutChanged { element_id: element_id.to_owned(), layout: serde_json::to_value(layout)? })
}

/// Read the layout carried by a `layout-changed` message.
///
/// Returns `None` for other message types or a payload that is not a layout.
#[must_use]
pub fn read_layout(message: &Message) -> Option<LayoutProperties> {
    match message {
        Message::LayoutChanged { layout, .. } => serde_json::from_value(layout.clone()).ok(),
        _ => None,
    }
}
