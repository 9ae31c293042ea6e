//! Module `state`
//!
//! Defines `FormState`, the transient state behind the login form: the typed
//! credentials, the error list, the loading flag and the success message.

use crate::validation::Credentials;

/// Everything the form displays, owned by a single `FormController`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    credentials: Credentials,
    errors: Vec<String>,
    loading: bool,
    success_message: String,
}

impl FormState {
    // --------------------
    // Getter methods
    // --------------------

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    pub fn password(&self) -> &str {
        &self.credentials.password
    }

    /// Messages currently shown in the error region, in display order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Empty when there is nothing to show.
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    // --------------------
    // Setter methods
    // --------------------

    /// Replaces the email as typed by the user.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    /// Replaces the password as typed by the user.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    pub(crate) fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    pub(crate) fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_success_message(&mut self, message: impl Into<String>) {
        self.success_message = message.into();
    }

    pub(crate) fn clear_success_message(&mut self) {
        self.success_message.clear();
    }

    pub(crate) fn clear_credentials(&mut self) {
        self.credentials.clear();
    }
}
