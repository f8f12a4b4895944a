//! # Agora Shared
//!
//! Wire types of the HTTP API: request bodies, response bodies and the
//! error envelope. Field names are camelCase on the wire.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
