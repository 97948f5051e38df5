//! The `utils` module provides the error types and logging setup shared
//! across `chanwire`.

pub mod error;
pub mod logging;
