//! Client result types
//!
//! Defines the outcome returned by a form submission.

use crate::error::SubmitError;
use crate::protocol::FormStatus;
use crate::validation::ValidationResult;

/// How a call to `FormController::submit` ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationResult),
    /// The endpoint answered `OK`.
    Accepted,
    /// The endpoint answered with any other status.
    Rejected(FormStatus),
    /// The request or the response decoding failed.
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }

    /// Whether a request reached the network.
    pub fn was_sent(&self) -> bool {
        !matches!(self, SubmitOutcome::Invalid(_))
    }
}
