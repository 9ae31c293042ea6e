//! Form message parsing
//!
//! Decodes raw JSON bodies into protocol messages.

use serde_json::Value;

use crate::protocol::{FormRequest, FormResponse, FormStatus};

/// Decode a request body sent to the form endpoint.
///
/// Fails for anything that is not a JSON object whose `email` and `password`
/// members, when present, are strings or null.
pub fn parse_form_request(body: &[u8]) -> Result<FormRequest, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Decode a response body returned by the form endpoint.
///
/// Only a body that is not JSON at all is an error. Any JSON value decodes,
/// and whatever its `status` member holds other than `"OK"` or `"fail"`
/// becomes `FormStatus::Unrecognized`.
pub fn parse_form_response(body: &[u8]) -> Result<FormResponse, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;
    let status = FormStatus::from_wire(value.get("status").and_then(Value::as_str));
    Ok(status.into())
}
