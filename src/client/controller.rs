//! Module `controller`
//!
//! `FormController` owns the form state and runs a submission: validate
//! locally, then at most one request through the transport, then fold the
//! answer back into the state.

use crate::client::loading::LoadingGuard;
use crate::client::results::SubmitOutcome;
use crate::client::state::FormState;
use crate::client::transport::FormTransport;
use crate::error::handlers::{SUBMIT_REJECTED_MESSAGE, handle_submit_error};
use crate::validation::{self, ValidationResult};
use log::{info, warn};

/// Shown after the endpoint accepts a submission.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

pub struct FormController<T> {
    state: FormState,
    transport: T,
}

impl<T: FormTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            state: FormState::default(),
            transport,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.set_email(email);
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.state.set_password(password);
    }

    /// Validate the credentials currently in the form.
    pub fn validate(&self) -> ValidationResult {
        validation::validate(self.state.credentials())
    }

    /// Submit the form.
    ///
    /// Invalid credentials never reach the transport. Once a request is sent,
    /// `loading` stays set until this call returns.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.state.clear_success_message();

        let validation = self.validate();
        if !validation.is_valid() {
            self.state.set_errors(validation.messages());
            return SubmitOutcome::Invalid(validation);
        }

        self.state.clear_errors();
        let mut state = LoadingGuard::engage(&mut self.state);

        let answer = self.transport.send(state.credentials()).await;
        match answer {
            Ok(response) if response.is_ok() => {
                info!("Form accepted");
                state.set_success_message(SUCCESS_MESSAGE);
                state.clear_credentials();
                SubmitOutcome::Accepted
            }
            Ok(response) => {
                warn!("Form rejected with status {:?}", response.status);
                state.set_errors(vec![SUBMIT_REJECTED_MESSAGE.to_string()]);
                SubmitOutcome::Rejected(response.status)
            }
            Err(err) => {
                let message = handle_submit_error(&err);
                state.set_errors(vec![message.to_string()]);
                SubmitOutcome::Failed(err)
            }
        }
    }
}
