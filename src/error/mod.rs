//! Error handling
//!
//! Defines error types and handling for credential generation and configuration.

pub mod handlers;
pub mod types;

pub use types::*;
