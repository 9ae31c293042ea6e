//! Error handling
//!
//! Defines error types and handling for the form server and the form client.

pub mod handlers;
pub mod types;

pub use types::*;
