//! The `serializer` module converts [`Message`]s to and from the wire.
//!
//! Two formats exist, identified by the version string a client negotiates
//! when it connects:
//!
//! - [`JsonSerializerV1`] (`"1.0.0"`): a JSON object keyed by field name.
//! - [`JsonSerializerV2`] (`"2.0.0"`): a JSON array
//!   `[join_ref, ref, topic, event, payload]`.
//!
//! Both implement [`Serializer`]. Transport code holds an
//! `Arc<dyn Serializer>` obtained from a [`SerializerRegistry`] and never
//! branches on the version itself.
//!
//! # Example
//!
//! ```rust
//! use chanwire::protocol::Message;
//! use chanwire::serializer::SerializerRegistry;
//! use serde_json::json;
//!
//! let registry = SerializerRegistry::default();
//! let serializer = registry.get("2.0.0").unwrap();
//!
//! let msg = Message::new("room:1", "msg", json!({"body": "hi"})).with_ref("1");
//! let bytes = serializer.encode(&msg).unwrap();
//! assert_eq!(bytes, br#"[null,"1","room:1","msg",{"body":"hi"}]"#);
//! assert_eq!(serializer.decode(&bytes).unwrap(), msg);
//! ```

pub mod registry;
pub mod v1;
pub mod v2;

use std::fmt::Debug;
use std::io::{BufRead, Write};

use tracing::warn;

use crate::protocol::Message;
use crate::utils::error::{DecodeError, EncodeError};

pub use registry::SerializerRegistry;
pub use v1::JsonSerializerV1;
pub use v2::JsonSerializerV2;

/// A paired encoder/decoder for one wire format version.
///
/// Implementations are stateless: a single instance may be shared across
/// any number of connections and threads.
pub trait Serializer: Debug + Send + Sync {
    /// The dotted version string clients use to select this format.
    fn vsn(&self) -> &'static str;

    /// Writes `msg` in this wire format.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if a value in the message cannot be
    /// represented.
    fn encode(&self, msg: &Message) -> Result<Vec<u8>, EncodeError>;

    /// Parses one frame in this wire format.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if `data` is not valid JSON or does not have
    /// the shape this format requires.
    fn decode(&self, data: &[u8]) -> Result<Message, DecodeError>;
}

/// Decodes `data` with `from` and re-encodes the message with `to`.
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if `data` is not a valid `from` frame and
/// [`crate::Error::Encode`] if the message cannot be written by `to`.
pub fn transcode(from: &dyn Serializer, to: &dyn Serializer, data: &[u8]) -> crate::Result<Vec<u8>> {
    let msg = from.decode(data)?;
    Ok(to.encode(&msg)?)
}

/// Transcodes line-delimited frames from `input` to `output`.
///
/// Blank lines are skipped. A line that fails to transcode is logged and
/// skipped; the rest of the input is still processed. Returns the number of
/// skipped frames.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if reading or writing fails.
pub fn transcode_lines<R, W>(
    from: &dyn Serializer,
    to: &dyn Serializer,
    input: R,
    mut output: W,
) -> crate::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut failures = 0usize;
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match transcode(from, to, line.as_bytes()) {
            Ok(frame) => {
                output.write_all(&frame)?;
                output.write_all(b"\n")?;
            }
            Err(e) => {
                failures += 1;
                warn!(line = idx + 1, error = %e, "skipping frame");
            }
        }
    }
    output.flush()?;
    Ok(failures)
}
