use super::*;

#[test]
fn message_type_tags_match_wire_names() {
    assert_eq!(MessageType::Heartbeat.as_str(), "heartbeat");
    assert_eq!(MessageType::ElementSelected.as_str(), "element-selected");
    assert_eq!(MessageType::PropertyChanged.as_str(), "property-changed");
    assert_eq!(MessageType::LayoutChanged.as_str(), "layout-changed");
    assert_eq!(MessageType::LayoutChanged.to_string(), "layout-changed");
}

#[test]
fn encode_envelope_writes_type_and_payload() {
    let message = Message::PropertyChanged {
        element_id: "el-1".to_owned(),
        property: "padding".to_owned(),
        value: serde_json::json!("8px"),
    };
    let text = encode_envelope(&message).expect("encode");
    let raw: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(raw["type"], "property-changed");
    assert_eq!(raw["payload"]["elementId"], "el-1");
    assert_eq!(raw["payload"]["property"], "padding");
    assert_eq!(raw["payload"]["value"], "8px");
}

#[test]
fn heartbeat_encodes_without_payload() {
    let text = encode_envelope(&Message::Heartbeat).expect("encode");
    assert_eq!(text, r#"{"type":"heartbeat"}"#);
    assert_eq!(decode_envelope(&text).expect("decode"), Message::Heartbeat);
}

#[test]
fn decode_envelope_maps_to_message_type() {
    let message = decode_envelope(r#"{"type":"element-selected","payload":{"elementId":null}}"#).expect("decode");
    assert_eq!(message, Message::ElementSelected { element_id: None });
    assert_eq!(message.message_type(), MessageType::ElementSelected);

    let message = decode_envelope(
        r#"{"type":"layout-changed","payload":{"elementId":"el-2","layout":{"flexDirection":"column"}}}"#,
    )
    .expect("decode");
    assert_eq!(message.message_type(), MessageType::LayoutChanged);
}

#[test]
fn decode_envelope_rejects_unknown_type() {
    let err = decode_envelope(r#"{"type":"open-file","payload":{}}"#).expect_err("unknown tag");
    assert!(matches!(err, EnvelopeError::Json(_)));
}

#[test]
fn decode_envelope_rejects_malformed_text() {
    assert!(decode_envelope("not json").is_err());
    assert!(decode_envelope(r#"{"payload":{}}"#).is_err());
    assert!(decode_envelope(r#"{"type":"property-changed","payload":{"elementId":"el-1","value":1}}"#).is_err());
}
