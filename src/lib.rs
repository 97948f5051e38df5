//! # chanwire
//!
//! `chanwire` is the message-serialization layer of a channels-based
//! publish/subscribe protocol. It turns channel messages into bytes and back
//! in either of two JSON wire formats, chosen per connection by the version
//! string the client negotiated.
//!
//! ## Core Modules
//!
//! - `protocol`: the canonical `Message` model shared by every wire format.
//! - `serializer`: the `Serializer` trait, the v1 and v2 JSON codecs, and the
//!   version-keyed `SerializerRegistry`.
//! - `config`: loading settings from files and the environment.
//! - `utils`: error types and logging setup.

pub mod config;
pub mod protocol;
pub mod serializer;
pub mod utils;

pub use protocol::{Message, Payload};
pub use serializer::{JsonSerializerV1, JsonSerializerV2, Serializer, SerializerRegistry};
pub use utils::error::{DecodeError, EncodeError, Error, RegistryError, Result};
