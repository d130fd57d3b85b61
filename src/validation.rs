//! Field validation for account forms.
//!
//! The `is_*_invalid` predicates return `true` for a rejected value and never
//! modify their input; callers decide what to do with the answer.

use crate::account::{AccountInput, Label, RecordType};

/// Longest accepted label string, in characters.
pub const MAX_LABEL_LEN: usize = 50;

/// Shortest accepted login or password after trimming.
pub const MIN_CREDENTIAL_LEN: usize = 8;

/// Longest accepted login or password after trimming.
pub const MAX_CREDENTIAL_LEN: usize = 100;

/// Splits a `;`-delimited string into labels, skipping blank segments.
pub fn parse_labels(label_string: &str) -> Vec<Label> {
    if label_string.trim().is_empty() {
        return vec![];
    }

    label_string
        .split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(Label::new)
        .collect()
}

/// Checks the raw label string, untrimmed.
pub fn is_label_invalid(label: &str) -> bool {
    label.chars().count() > MAX_LABEL_LEN
}

pub fn is_login_invalid(login: &str) -> bool {
    is_credential_len_invalid(login)
}

/// Passwords are only checked for [`RecordType::Local`].
pub fn is_password_invalid(record_type: RecordType, password: &str) -> bool {
    if record_type != RecordType::Local {
        return false;
    }
    is_credential_len_invalid(password)
}

fn is_credential_len_invalid(value: &str) -> bool {
    let len = value.trim().chars().count();
    len == 0 || len < MIN_CREDENTIAL_LEN || len > MAX_CREDENTIAL_LEN
}

/// Validation error for an account form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Label string is longer than [`MAX_LABEL_LEN`].
    LabelTooLong,
    /// Login is empty or outside the allowed length.
    InvalidLogin,
    /// Local password is empty or outside the allowed length.
    InvalidPassword,
}

impl ValidationError {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::LabelTooLong => "Labels must be at most 50 characters",
            Self::InvalidLogin => "Login must be 8-100 characters",
            Self::InvalidPassword => "Password must be 8-100 characters",
        }
    }

    /// Form field the error belongs to.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::LabelTooLong => "label",
            Self::InvalidLogin => "login",
            Self::InvalidPassword => "password",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a form.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Runs every field check and collects all failures.
pub fn validate_input(input: &AccountInput) -> ValidationResult {
    let mut errors = Vec::new();

    if is_label_invalid(&input.label) {
        errors.push(ValidationError::LabelTooLong);
    }
    if is_login_invalid(&input.login) {
        errors.push(ValidationError::InvalidLogin);
    }
    if is_password_invalid(input.record_type, &input.password) {
        errors.push(ValidationError::InvalidPassword);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
