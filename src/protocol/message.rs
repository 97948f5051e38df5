use serde::{Deserialize, Deserializer, Serialize};

/// Untyped message body.
///
/// Any JSON value is accepted: null, booleans, numbers, strings, arrays and
/// objects. Integers that fit in `i64`/`u64` survive a round trip as integers;
/// everything else is carried as `f64`.
pub type Payload = serde_json::Value;

/// Represents a single message exchanged over a channel.
///
/// A message is addressed to a `topic`, names an `event`, and carries an
/// arbitrary `payload`. The two optional references correlate the message
/// with the join that opened the topic (`join_ref`) and with a request/reply
/// pair (`ref`).
///
/// The derived serde representation is the keyed v1 wire object. Missing or
/// `null` topic and event fields decode as empty strings; rejecting them is
/// left to the dispatch layer.
///
/// # Example
///
/// ```rust
/// use chanwire::protocol::Message;
/// use serde_json::json;
///
/// let msg = Message::new("room:lobby", "new_msg", json!({"body": "hi"})).with_ref("1");
/// assert_eq!(msg.r#ref.as_deref(), Some("1"));
/// assert!(msg.join_ref.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub join_ref: Option<String>,
    #[serde(default)]
    pub r#ref: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topic: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub event: String,
    #[serde(default)]
    pub payload: Payload,
}

impl Message {
    /// Creates a message with no join reference and no reply reference.
    pub fn new(topic: impl Into<String>, event: impl Into<String>, payload: Payload) -> Self {
        Self {
            join_ref: None,
            r#ref: None,
            topic: topic.into(),
            event: event.into(),
            payload,
        }
    }

    /// Sets the reference used to correlate a reply with this message.
    pub fn with_ref(mut self, r#ref: impl Into<String>) -> Self {
        self.r#ref = Some(r#ref.into());
        self
    }

    /// Sets the reference of the join that established the topic subscription.
    pub fn with_join_ref(mut self, join_ref: impl Into<String>) -> Self {
        self.join_ref = Some(join_ref.into());
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
