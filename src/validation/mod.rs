//! Credential validation
//!
//! Client-side checks run before any credentials leave the form.

pub mod credentials;
pub mod results;
pub mod rules;
pub mod whitespace;

pub use credentials::Credentials;
pub use results::{ValidationError, ValidationResult};
pub use rules::validate;
