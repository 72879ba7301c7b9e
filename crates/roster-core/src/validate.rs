//! Field validation rules for student records.
//!
//! Each rule returns an [`RosterError::InvalidInput`] whose reason is the
//! exact one-line message shown to the operator. Uniqueness is not checked
//! here; that is an ask-the-store concern handled by the [`crate::Roster`]
//! operations.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, RosterError};

/// Full name length bounds, in characters.
pub const FULL_NAME_MIN: usize = 2;
pub const FULL_NAME_MAX: usize = 100;

/// Student code length bounds, in characters.
pub const STUDENT_CODE_MIN: usize = 5;
pub const STUDENT_CODE_MAX: usize = 20;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10,11}$").expect("valid phone pattern"));

/// Rejects blank input for a required field.
pub fn required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::invalid_input(field).with_reason(format!("{field} is required.")));
    }
    Ok(())
}

/// Checks that a value's character count falls within `min..=max`.
pub fn length_bounds(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(RosterError::invalid_input(field)
            .with_reason(format!("{field} must be between {min} and {max} characters.")));
    }
    Ok(())
}

/// Validates a full name: 2-100 characters.
pub fn full_name(value: &str) -> Result<()> {
    length_bounds("Full name", value, FULL_NAME_MIN, FULL_NAME_MAX)
}

/// Validates a student code: 5-20 characters.
///
/// The operator-facing label is "Student ID", matching the prompts.
pub fn student_code(value: &str) -> Result<()> {
    length_bounds("Student ID", value, STUDENT_CODE_MIN, STUDENT_CODE_MAX)
}

/// Validates an email address against a simple `local@domain.tld` pattern.
pub fn email(value: &str) -> Result<()> {
    if !EMAIL_RE.is_match(value) {
        return Err(RosterError::invalid_input("Email").with_reason("Invalid email format."));
    }
    Ok(())
}

/// Validates a phone number: exactly 10-11 digits.
///
/// Blank phones are allowed elsewhere (normalized to the empty string); this
/// rule only judges non-blank input.
pub fn phone(value: &str) -> Result<()> {
    if !PHONE_RE.is_match(value) {
        return Err(
            RosterError::invalid_input("Phone").with_reason("Phone number must be 10-11 digits.")
        );
    }
    Ok(())
}
