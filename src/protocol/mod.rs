//! Form API wire protocol
//!
//! JSON messages exchanged on the single form endpoint.

pub mod messages;
pub mod parser;

pub use messages::{FormRequest, FormResponse, FormStatus};
pub use parser::{parse_form_request, parse_form_response};

/// Path of the form endpoint.
pub const FORM_API_PATH: &str = "/form-api";
