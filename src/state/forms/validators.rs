//! Field validators
//!
//! Every validator is a pure function of the field's current value. Failures
//! are reported as data ([`ValidationResult`]) and never as `Err` or panics.

use super::field::FieldId;
use super::form_state::FormState;
use regex::Regex;
use std::sync::OnceLock;

pub const NAME_MESSAGE: &str = "Name must be at least 2 characters";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number";
pub const PASSWORD_MESSAGE: &str =
    "Password must be at least 8 characters with uppercase, lowercase, and number";
pub const CONFIRM_MESSAGE: &str = "Passwords do not match";

const MIN_NAME_LENGTH: usize = 2;
const MIN_PASSWORD_LENGTH: usize = 8;
const PHONE_DIGITS: usize = 10;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// A validation failure for one field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldId,
    pub message: String,
}

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: FieldId,
    pub valid: bool,
    pub message: &'static str,
}

impl ValidationResult {
    fn new(field: FieldId, valid: bool, message: &'static str) -> Self {
        Self {
            field,
            valid,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The message to show, `None` while the field is valid
    pub fn visible_message(&self) -> Option<&'static str> {
        (!self.is_valid()).then_some(self.message)
    }

    pub fn to_error(&self) -> Option<FieldValidationError> {
        self.visible_message().map(|message| FieldValidationError {
            field: self.field,
            message: message.to_string(),
        })
    }
}

fn is_valid_name(value: &str) -> bool {
    value.trim().chars().count() >= MIN_NAME_LENGTH
}

fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// At least 8 characters with a lowercase letter, an uppercase letter and a digit
fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LENGTH
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

pub fn validate_name(value: &str) -> ValidationResult {
    ValidationResult::new(FieldId::StudentName, is_valid_name(value), NAME_MESSAGE)
}

pub fn validate_email(value: &str) -> ValidationResult {
    ValidationResult::new(FieldId::Email, is_valid_email(value), EMAIL_MESSAGE)
}

pub fn validate_phone(value: &str) -> ValidationResult {
    ValidationResult::new(FieldId::Phone, is_valid_phone(value), PHONE_MESSAGE)
}

pub fn validate_password(value: &str) -> ValidationResult {
    ValidationResult::new(FieldId::Password, is_valid_password(value), PASSWORD_MESSAGE)
}

/// Exact, case-sensitive comparison against the current password
pub fn validate_confirm_password(value: &str, password: &str) -> ValidationResult {
    ValidationResult::new(FieldId::ConfirmPassword, value == password, CONFIRM_MESSAGE)
}

/// How a field's value is checked
#[derive(Clone, Copy)]
pub enum Rule {
    /// Depends only on the field's own value
    Value(fn(&str) -> ValidationResult),
    /// Compared against another field's current value
    Matches(FieldId, fn(&str, &str) -> ValidationResult),
}

/// A validated field and the rule that checks it
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: FieldId,
    pub rule: Rule,
}

impl FieldRule {
    pub fn validate(&self, form: &FormState) -> ValidationResult {
        let value = form.value(self.field);
        match self.rule {
            Rule::Value(check) => check(value),
            Rule::Matches(other, check) => check(value, form.value(other)),
        }
    }
}

/// Fields that gate submission, in display order
pub const VALIDATED_FIELDS: [FieldRule; 5] = [
    FieldRule {
        field: FieldId::StudentName,
        rule: Rule::Value(validate_name),
    },
    FieldRule {
        field: FieldId::Email,
        rule: Rule::Value(validate_email),
    },
    FieldRule {
        field: FieldId::Phone,
        rule: Rule::Value(validate_phone),
    },
    FieldRule {
        field: FieldId::Password,
        rule: Rule::Value(validate_password),
    },
    FieldRule {
        field: FieldId::ConfirmPassword,
        rule: Rule::Matches(FieldId::Password, validate_confirm_password),
    },
];

/// The rule for a field, `None` for unvalidated fields
pub fn rule_for(field: FieldId) -> Option<&'static FieldRule> {
    VALIDATED_FIELDS.iter().find(|r| r.field == field)
}

/// Run every rule against the form
pub fn validate_all(form: &FormState) -> Vec<ValidationResult> {
    VALIDATED_FIELDS.iter().map(|r| r.validate(form)).collect()
}
