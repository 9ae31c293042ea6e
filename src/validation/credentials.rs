//! Credentials entered into the login form.

use serde::Serialize;

/// Email and password as typed by the user.
///
/// Only ever held in form state and in the body of a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Wipes both fields.
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}
