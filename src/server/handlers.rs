//! Form endpoint handler
//!
//! `POST /form-api` only checks that both fields carry something other than
//! whitespace. It never authenticates and never fails at the HTTP level.
//! Bodies are only read as JSON when labelled `application/json`.

use axum::Json;
use axum::body::Bytes;
use axum::http::{HeaderMap, header};
use log::{debug, warn};

use crate::protocol::{FormRequest, FormResponse, FormStatus, parse_form_request};
use crate::validation::whitespace::trim_form_whitespace;

/// Decide the status for a decoded request.
pub fn inspect(request: &FormRequest) -> FormStatus {
    let filled = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|v| !trim_form_whitespace(v).is_empty())
    };

    if filled(&request.email) && filled(&request.password) {
        FormStatus::Ok
    } else {
        FormStatus::Fail
    }
}

/// Whether the request declares a JSON body. Media type parameters such as
/// `charset` are ignored.
pub fn is_json_body(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
}

/// Handles `POST /form-api`. Bodies that are not labelled as JSON or do not
/// decode are answered with `fail`.
pub async fn handle_form_api(headers: HeaderMap, body: Bytes) -> Json<FormResponse> {
    if !is_json_body(&headers) {
        debug!("Form body ignored, content type {:?}", headers.get(header::CONTENT_TYPE));
        return Json(FormStatus::Fail.into());
    }

    let status = match parse_form_request(&body) {
        Ok(request) => inspect(&request),
        Err(e) => {
            warn!("Undecodable form body ({} bytes): {}", body.len(), e);
            FormStatus::Fail
        }
    };

    debug!("Form endpoint answered {:?}", status);
    Json(status.into())
}
