//! Text rendering of the form state
//!
//! Lays the form out as lines of text: error region, success region, the two
//! fields and the submit button.

use crate::client::state::FormState;

const SUBMIT_LABEL: &str = "[ Submit ]";
const SUBMITTING_LABEL: &str = "[ Submitting... ]";

/// All error messages, one per line. `None` when there are no errors.
pub fn error_region(state: &FormState) -> Option<String> {
    if state.errors().is_empty() {
        None
    } else {
        Some(state.errors().join("\n"))
    }
}

pub fn success_region(state: &FormState) -> Option<&str> {
    Some(state.success_message()).filter(|message| !message.is_empty())
}

/// The submit button is disabled while a request is in flight.
pub fn submit_enabled(state: &FormState) -> bool {
    !state.is_loading()
}

pub fn render(state: &FormState) -> String {
    let mut out = String::new();

    if let Some(errors) = error_region(state) {
        out.push_str(&errors);
        out.push('\n');
    }
    if let Some(message) = success_region(state) {
        out.push_str(message);
        out.push('\n');
    }

    out.push_str(&format!("Email:    {}\n", state.email()));
    out.push_str(&format!(
        "Password: {}\n",
        "*".repeat(state.password().chars().count())
    ));
    out.push_str(if submit_enabled(state) {
        SUBMIT_LABEL
    } else {
        SUBMITTING_LABEL
    });
    out.push('\n');
    out
}
