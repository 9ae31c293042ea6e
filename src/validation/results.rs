//! Validation result types
//!
//! Each failed rule is a `ValidationError`; its `Display` is the message shown
//! to the user.

use thiserror::Error;

/// A single failed validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email field must be filled.")]
    EmailEmpty,
    #[error("Email field must contain a valid address.")]
    EmailMalformed,
    #[error("Password must contain at least 8 characters.")]
    PasswordTooShort,
    #[error("Password must contain at least one uppercase letter.")]
    PasswordMissingUppercase,
    #[error("Password must contain at least one special character.")]
    PasswordMissingSpecial,
    #[error("Password must not contain Cyrillic characters.")]
    PasswordContainsCyrillic,
}

/// Ordered list of failed rules. Empty means the credentials are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub(crate) fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }

    /// Human-readable messages in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
