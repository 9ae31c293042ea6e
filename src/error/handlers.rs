//! Error handlers
//!
//! Turns errors into log records and into the text shown in the form.

use crate::error::types::{AppError, SubmitError};
use log::error;

/// Shown for any transport-level failure of a submission.
pub const SUBMIT_FAILED_MESSAGE: &str = "An error occurred while submitting the form.";

/// Shown when the endpoint answers with a status other than `OK`.
pub const SUBMIT_REJECTED_MESSAGE: &str = "Invalid data. Please fill in email and password.";

/// Log a failed submission and return the message for the form.
pub fn handle_submit_error(err: &SubmitError) -> &'static str {
    error!("Form submission failed: {}", err);
    SUBMIT_FAILED_MESSAGE
}

/// Log an error that ends the current command.
pub fn handle_app_error(err: &AppError) {
    error!("login-form error: {}", err);
}
