//! Keyed-object wire format.
//!
//! ```text
//! {"join_ref":null,"ref":"1","topic":"room:1","event":"msg","payload":{}}
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::de::{Deserializer as _, IgnoredAny, MapAccess, Visitor};
use tracing::{debug, trace};

use super::Serializer;
use crate::protocol::{Message, Payload};
use crate::utils::error::{DecodeError, EncodeError};

/// V1 protocol: a JSON object with one key per message field.
///
/// Absent references are written as explicit `null`. On decode, unknown keys
/// are ignored, a repeated key keeps its last value, and a missing topic or
/// event becomes an empty string. Only a JSON object is accepted; a
/// positional array is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializerV1;

impl JsonSerializerV1 {
    pub const VSN: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl Serializer for JsonSerializerV1 {
    fn vsn(&self) -> &'static str {
        Self::VSN
    }

    fn encode(&self, msg: &Message) -> Result<Vec<u8>, EncodeError> {
        let data = serde_json::to_vec(msg)?;
        trace!(vsn = Self::VSN, topic = %msg.topic, event = %msg.event, len = data.len(), "encoded message");
        Ok(data)
    }

    fn decode(&self, data: &[u8]) -> Result<Message, DecodeError> {
        let msg = decode_keyed(data).map_err(|e| {
            debug!(vsn = Self::VSN, error = %e, "failed to decode message");
            e
        })?;
        trace!(vsn = Self::VSN, topic = %msg.topic, event = %msg.event, "decoded message");
        Ok(msg)
    }
}

fn decode_keyed(data: &[u8]) -> serde_json::Result<Message> {
    let mut de = serde_json::Deserializer::from_slice(data);
    let msg = (&mut de).deserialize_map(KeyedVisitor)?;
    de.end()?;
    Ok(msg)
}

/// Walks the keys of a JSON object. A later duplicate key overwrites the
/// earlier value, and a `null` topic or event leaves the field unchanged.
struct KeyedVisitor;

impl<'de> Visitor<'de> for KeyedVisitor {
    type Value = Message;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a message object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Message, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut msg = Message::new("", "", Payload::Null);
        while let Some(key) = map.next_key::<Cow<'de, str>>()? {
            match key.as_ref() {
                "join_ref" => msg.join_ref = map.next_value()?,
                "ref" => msg.r#ref = map.next_value()?,
                "topic" => {
                    if let Some(topic) = map.next_value::<Option<String>>()? {
                        msg.topic = topic;
                    }
                }
                "event" => {
                    if let Some(event) = map.next_value::<Option<String>>()? {
                        msg.event = event;
                    }
                }
                "payload" => msg.payload = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(msg)
    }
}
