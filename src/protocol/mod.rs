//! The `protocol` module holds the canonical in-memory representation of a
//! channel message.
//!
//! Both wire formats in [`crate::serializer`] decode into and encode from the
//! [`Message`] defined here, so the dispatch layer never sees wire details.

pub mod message;

pub use message::{Message, Payload};

#[cfg(test)]
mod tests;
