//! Form API messages
//!
//! `FormRequest` is what the endpoint accepts, `FormResponse` what it answers.
//! The client sends `Credentials` directly, which serialize to the same shape.

use serde::{Deserialize, Serialize};

/// Body of `POST /form-api`. Both fields are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Application-level outcome carried in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "fail")]
    Fail,
    /// Anything else a client receives: another string, a non-string value,
    /// or no `status` at all. Never sent by the endpoint.
    #[serde(skip)]
    Unrecognized,
}

impl FormStatus {
    /// Reads the `status` member of a decoded response body.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("OK") => FormStatus::Ok,
            Some("fail") => FormStatus::Fail,
            _ => FormStatus::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormResponse {
    pub status: FormStatus,
}

impl FormResponse {
    pub fn ok() -> Self {
        Self {
            status: FormStatus::Ok,
        }
    }

    pub fn fail() -> Self {
        Self {
            status: FormStatus::Fail,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == FormStatus::Ok
    }
}

impl From<FormStatus> for FormResponse {
    fn from(status: FormStatus) -> Self {
        Self { status }
    }
}
