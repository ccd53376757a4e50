//! Form domain layer
//!
//! Field definitions, validators, completion tracking and the password
//! strength meter for the registration form. Nothing here knows about the
//! terminal.

mod field;
mod form_state;
mod progress;
mod strength;
mod validators;

pub use field::{FieldId, FieldKind, FormField};
pub use form_state::{Form, FormOptions, FormState};
pub use strength::{PasswordStrength, StrengthLevel};
pub use validators::{rule_for, validate_all, FieldValidationError, ValidationResult};
