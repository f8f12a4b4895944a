//! # Agora Core
//!
//! The domain layer of the Agora social backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod time;

pub use error::{DomainError, RepoError};
