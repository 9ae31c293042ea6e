//! Validation rules
//!
//! Every rule runs on every call and all failures are collected. The only
//! dependency between rules is that the email format check is skipped for an
//! empty email.

use super::credentials::Credentials;
use super::results::{ValidationError, ValidationResult};
use super::whitespace::WHITESPACE_CLASS;
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Minimum password length, counted in UTF-16 code units as a browser
/// counts `String.length`.
pub const MIN_PASSWORD_LENGTH: usize = 8;

const CYRILLIC: RangeInclusive<char> = '\u{0400}'..='\u{04FF}';

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^@{WHITESPACE_CLASS}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is a valid regex")
});

/// Validates credentials, returning failures in rule order.
pub fn validate(credentials: &Credentials) -> ValidationResult {
    let mut result = ValidationResult::default();
    check_email(&credentials.email, &mut result);
    check_password(&credentials.password, &mut result);
    result
}

fn check_email(email: &str, result: &mut ValidationResult) {
    if email.is_empty() {
        result.push(ValidationError::EmailEmpty);
    } else if !EMAIL_PATTERN.is_match(email) {
        result.push(ValidationError::EmailMalformed);
    }
}

fn check_password(password: &str, result: &mut ValidationResult) {
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        result.push(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        result.push(ValidationError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        result.push(ValidationError::PasswordMissingSpecial);
    }
    if password.chars().any(|c| CYRILLIC.contains(&c)) {
        result.push(ValidationError::PasswordContainsCyrillic);
    }
}
