//! Positional-array wire format.
//!
//! ```text
//! [join_ref, ref, topic, event, payload]
//! ```
//!
//! Position, not name, carries meaning, so frames are staged through a
//! five-slot tuple struct before being mapped onto [`Message`] fields.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::Serializer;
use crate::protocol::{Message, Payload};
use crate::utils::error::{DecodeError, EncodeError};

/// V2 protocol: `[join_ref, ref, topic, event, payload]`.
///
/// Absent references are written as `null` in their slot. Decoding requires
/// exactly five elements, string-or-null references, and non-null string
/// topic and event.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializerV2;

impl JsonSerializerV2 {
    pub const VSN: &'static str = "2.0.0";

    pub fn new() -> Self {
        Self
    }
}

/// Borrowed slots used when encoding; no message field is cloned.
#[derive(Serialize)]
struct SlotsRef<'a>(
    &'a Option<String>,
    &'a Option<String>,
    &'a str,
    &'a str,
    &'a Payload,
);

impl<'a> From<&'a Message> for SlotsRef<'a> {
    fn from(msg: &'a Message) -> Self {
        SlotsRef(
            &msg.join_ref,
            &msg.r#ref,
            &msg.topic,
            &msg.event,
            &msg.payload,
        )
    }
}

/// Owned slots filled by the parser when decoding.
#[derive(Deserialize)]
struct Slots(
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Payload,
);

impl TryFrom<Slots> for Message {
    type Error = DecodeError;

    fn try_from(slots: Slots) -> Result<Self, Self::Error> {
        let Slots(join_ref, r#ref, topic, event, payload) = slots;
        Ok(Message {
            join_ref,
            r#ref,
            topic: topic.ok_or(DecodeError::MissingField("topic"))?,
            event: event.ok_or(DecodeError::MissingField("event"))?,
            payload,
        })
    }
}

impl Serializer for JsonSerializerV2 {
    fn vsn(&self) -> &'static str {
        Self::VSN
    }

    fn encode(&self, msg: &Message) -> Result<Vec<u8>, EncodeError> {
        let data = serde_json::to_vec(&SlotsRef::from(msg))?;
        trace!(vsn = Self::VSN, topic = %msg.topic, event = %msg.event, len = data.len(), "encoded message");
        Ok(data)
    }

    fn decode(&self, data: &[u8]) -> Result<Message, DecodeError> {
        let msg = serde_json::from_slice::<Slots>(data)
            .map_err(DecodeError::from)
            .and_then(Message::try_from)
            .map_err(|e| {
                debug!(vsn = Self::VSN, error = %e, "failed to decode message");
                e
            })?;
        trace!(vsn = Self::VSN, topic = %msg.topic, event = %msg.event, "decoded message");
        Ok(msg)
    }
}
