use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{
    CONFIRM_REQUIRED, EMAIL_INVALID, EMAIL_REQUIRED, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH,
    NAME_REQUIRED, NAME_TOO_SHORT, PASSWORDS_MISMATCH, PASSWORD_REQUIRED, PASSWORD_TOO_SHORT,
};
use crate::entities::form::{FormErrors, FormField, FormValues, Mode};

// One or more chars that are neither browser whitespace nor '@'. Browser
// whitespace is Unicode White_Space plus U+FEFF, minus U+0085.
const EMAIL_PART: &str = r"[[^\s\x{FEFF}@]\x{85}]+";

// Pragmatic local@domain.tld shape, not RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{EMAIL_PART}@{EMAIL_PART}\.{EMAIL_PART}$"))
        .expect("email pattern is a valid regex")
});

/// Whitespace as the browser form sees it when trimming input.
pub fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Length in UTF-16 code units, which is what the form's counters report.
pub fn form_length(s: &str) -> usize {
    s.encode_utf16().count()
}

fn trim_form(s: &str) -> &str {
    s.trim_matches(is_form_whitespace)
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = trim_form(name);
    if trimmed.is_empty() {
        return Err(rule_error("name_required", NAME_REQUIRED));
    }
    if form_length(trimmed) < MIN_NAME_LENGTH {
        return Err(rule_error("name_length", NAME_TOO_SHORT));
    }
    Ok(())
}

/// Only the emptiness check trims; the pattern sees the raw input.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if trim_form(email).is_empty() {
        return Err(rule_error("email_required", EMAIL_REQUIRED));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(rule_error("email_format", EMAIL_INVALID));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(rule_error("password_required", PASSWORD_REQUIRED));
    }
    if form_length(password) < MIN_PASSWORD_LENGTH {
        return Err(rule_error("password_length", PASSWORD_TOO_SHORT));
    }
    Ok(())
}

/// Exact comparison: no trimming, no case folding, no normalization.
pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if confirmation.is_empty() {
        return Err(rule_error("confirm_required", CONFIRM_REQUIRED));
    }
    if confirmation != password {
        return Err(rule_error("password_mismatch", PASSWORDS_MISMATCH));
    }
    Ok(())
}

fn check_field(values: &FormValues, field: FormField) -> Result<(), ValidationError> {
    match field {
        FormField::Name => validate_name(&values.name),
        FormField::Email => validate_email(&values.email),
        FormField::Password => validate_password(&values.password),
        FormField::ConfirmPassword => {
            validate_confirmation(&values.password, &values.confirm_password)
        }
    }
}

/// Checks every field that applies in `mode` and collects one message per
/// failing field. An empty result means the form may be submitted.
pub fn validate(values: &FormValues, mode: Mode) -> FormErrors {
    let mut errors = FormErrors::new();

    for field in FormField::ALL.into_iter().filter(|f| f.applies_in(mode)) {
        if let Err(error) = check_field(values, field) {
            let message = error
                .message
                .map(|m| m.into_owned())
                .unwrap_or_else(|| "Invalid value".to_string());
            errors.insert(field, message);
        }
    }

    tracing::debug!(
        %mode,
        failing = ?errors.fields().map(FormField::as_str).collect::<Vec<_>>(),
        "form validated"
    );
    errors
}
