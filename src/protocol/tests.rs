use super::message::Message;
use serde_json::json;

#[test]
fn test_message_new() {
    let msg = Message::new("room:1", "msg", json!({"body": "hi"}));
    assert_eq!(msg.topic, "room:1");
    assert_eq!(msg.event, "msg");
    assert_eq!(msg.payload, json!({"body": "hi"}));
    assert!(msg.join_ref.is_none());
    assert!(msg.r#ref.is_none());
}

#[test]
fn test_message_with_refs() {
    let msg = Message::new("room:1", "msg", json!(null))
        .with_join_ref("3")
        .with_ref("4");
    assert_eq!(msg.join_ref.as_deref(), Some("3"));
    assert_eq!(msg.r#ref.as_deref(), Some("4"));
}

#[test]
fn test_message_deserialize_null_topic_is_empty() {
    let msg: Message = serde_json::from_value(json!({
        "topic": null,
        "event": "e"
    }))
    .unwrap();
    assert_eq!(msg.topic, "");
    assert_eq!(msg.event, "e");
    assert_eq!(msg.payload, json!(null));
}

#[test]
fn test_message_deserialize_rejects_non_string_topic() {
    let result = serde_json::from_value::<Message>(json!({
        "topic": 7,
        "event": "e"
    }));
    assert!(result.is_err());
}

#[test]
fn test_message_serialize_uses_wire_key_names() {
    let msg = Message::new("t", "e", json!(1)).with_ref("9");
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(
        value,
        json!({
            "join_ref": null,
            "ref": "9",
            "topic": "t",
            "event": "e",
            "payload": 1
        })
    );
}
