//! Submission state machine for the registration form
//!
//! The form is driven by [`FormMessage`]s. Every message runs to completion
//! and reports an [`Outcome`]; the caller decides how to present it.

use super::forms::{
    rule_for, validate_all, FieldId, FieldValidationError, FormState, PasswordStrength,
    ValidationResult,
};
use std::collections::BTreeMap;

/// Which view the registration is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Confirmed,
}

/// Events consumed by [`Registration::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    FieldChanged { field: FieldId, value: String },
    SubmitRequested,
    EditRequested,
    ResetRequested,
}

/// Result of dispatching a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Submitted,
    /// Submission refused; the form stays in `Editing`
    Rejected(Vec<FieldValidationError>),
    Edited,
    Reset,
    /// The message does not apply to the current phase
    Ignored,
}

/// Fields shown on the confirmation view, with their detail labels
pub const DISPLAY_FIELDS: [(FieldId, &str); 9] = [
    (FieldId::StudentName, "Full Name"),
    (FieldId::Course, "Course"),
    (FieldId::FatherName, "Father's Name"),
    (FieldId::MotherName, "Mother's Name"),
    (FieldId::Dob, "Date of Birth"),
    (FieldId::Gender, "Gender"),
    (FieldId::Email, "Email"),
    (FieldId::Phone, "Phone"),
    (FieldId::Address, "Address"),
];

pub const NOT_PROVIDED: &str = "Not provided";

/// Immutable copy of every field value taken at a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSnapshot {
    values: BTreeMap<FieldId, String>,
}

impl SubmissionSnapshot {
    fn capture(form: &FormState) -> Self {
        Self {
            values: form.values(),
        }
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Label/value pairs for the confirmation view. Secrets are never included.
    pub fn display_rows(&self) -> Vec<(&'static str, &str)> {
        DISPLAY_FIELDS
            .iter()
            .map(|&(field, label)| {
                let value = self.value(field);
                (label, if value.is_empty() { NOT_PROVIDED } else { value })
            })
            .collect()
    }

    /// Plain-text rendering used for printing
    pub fn to_document(&self) -> String {
        let rows = self.display_rows();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        let mut document = String::from("Registration Details\n\n");
        for (label, value) in rows {
            let mut lines = value.lines();
            let first = lines.next().unwrap_or("");
            document.push_str(&format!("{label:<width$} : {first}\n"));
            for line in lines {
                document.push_str(&format!("{:<width$}   {line}\n", ""));
            }
        }
        document
    }
}

/// The registration form controller
#[derive(Debug, Clone)]
pub struct Registration {
    form: FormState,
    phase: Phase,
    /// Results of fields validated so far; only these are shown
    results: BTreeMap<FieldId, ValidationResult>,
    snapshot: Option<SubmissionSnapshot>,
    progress: f64,
    strength: PasswordStrength,
}

impl Registration {
    pub fn new(form: FormState) -> Self {
        let strength = PasswordStrength::measure(form.value(FieldId::Password));
        let progress = form.progress();
        Self {
            form,
            phase: Phase::Editing,
            results: BTreeMap::new(),
            snapshot: None,
            progress,
            strength,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access for focus and navigation. Values change through
    /// [`FormMessage::FieldChanged`] only.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snapshot(&self) -> Option<&SubmissionSnapshot> {
        self.snapshot.as_ref()
    }

    /// Completion percentage shown in the header
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Error message currently shown for a field
    pub fn error_for(&self, field: FieldId) -> Option<&'static str> {
        self.results
            .get(&field)
            .and_then(ValidationResult::visible_message)
    }

    pub fn visible_errors(&self) -> Vec<FieldValidationError> {
        self.results
            .values()
            .filter_map(ValidationResult::to_error)
            .collect()
    }

    pub fn dispatch(&mut self, message: FormMessage) -> Outcome {
        match message {
            FormMessage::FieldChanged { field, value } => self.change_field(field, value),
            FormMessage::SubmitRequested => self.submit(),
            FormMessage::EditRequested => self.edit(),
            FormMessage::ResetRequested => self.reset(),
        }
    }

    fn change_field(&mut self, field: FieldId, value: String) -> Outcome {
        if self.phase != Phase::Editing || !self.form.set_value(field, value) {
            return Outcome::Ignored;
        }

        if let Some(rule) = rule_for(field) {
            let result = rule.validate(&self.form);
            tracing::debug!(%field, valid = result.valid, "field validated");
            self.results.insert(field, result);
        }

        if field == FieldId::Password {
            self.strength = PasswordStrength::measure(self.form.value(field));
            // Keep an already shown confirmation check in step with the password
            if self.results.contains_key(&FieldId::ConfirmPassword) {
                if let Some(rule) = rule_for(FieldId::ConfirmPassword) {
                    self.results
                        .insert(FieldId::ConfirmPassword, rule.validate(&self.form));
                }
            }
        }

        self.progress = self.form.progress();
        Outcome::Updated
    }

    fn submit(&mut self) -> Outcome {
        if self.phase != Phase::Editing {
            return Outcome::Ignored;
        }

        let results = validate_all(&self.form);
        let errors: Vec<_> = results.iter().filter_map(ValidationResult::to_error).collect();
        for result in results {
            self.results.insert(result.field, result);
        }

        if !errors.is_empty() {
            tracing::warn!(failed = errors.len(), "registration rejected");
            return Outcome::Rejected(errors);
        }

        self.snapshot = Some(SubmissionSnapshot::capture(&self.form));
        self.phase = Phase::Confirmed;
        self.progress = 0.0;
        tracing::info!("registration submitted");
        Outcome::Submitted
    }

    fn edit(&mut self) -> Outcome {
        if self.phase != Phase::Confirmed {
            return Outcome::Ignored;
        }

        self.snapshot = None;
        self.phase = Phase::Editing;
        self.progress = 0.0;
        tracing::info!("returned to editing");
        Outcome::Edited
    }

    fn reset(&mut self) -> Outcome {
        if self.phase != Phase::Editing {
            return Outcome::Ignored;
        }

        self.form.clear_values();
        self.results.clear();
        self.strength = PasswordStrength::default();
        self.progress = self.form.progress();
        tracing::info!("form reset");
        Outcome::Reset
    }
}

impl Default for Registration {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::StrengthLevel;

    fn change(registration: &mut Registration, field: FieldId, value: &str) -> Outcome {
        registration.dispatch(FormMessage::FieldChanged {
            field,
            value: value.to_string(),
        })
    }

    fn filled() -> Registration {
        let mut registration = Registration::default();
        for (field, value) in [
            (FieldId::StudentName, "Asha Rao"),
            (FieldId::Course, "Engineering"),
            (FieldId::FatherName, "Ravi Rao"),
            (FieldId::MotherName, "Meera Rao"),
            (FieldId::Dob, "2004-05-17"),
            (FieldId::Gender, "Female"),
            (FieldId::Email, "asha@example.com"),
            (FieldId::Phone, "9876543210"),
            (FieldId::Address, "12 Lake Road\nPune"),
            (FieldId::Password, "Secret123"),
            (FieldId::ConfirmPassword, "Secret123"),
        ] {
            assert_eq!(change(&mut registration, field, value), Outcome::Updated);
        }
        registration
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state() {
            let registration = Registration::default();
            assert_eq!(registration.phase(), Phase::Editing);
            assert!(registration.snapshot().is_none());
            assert!(registration.visible_errors().is_empty());
            assert_eq!(registration.progress(), 0.0);
        }

        #[test]
        fn test_field_change_updates_value_and_progress() {
            let mut registration = Registration::default();
            change(&mut registration, FieldId::FatherName, "Ravi");
            assert_eq!(registration.form().value(FieldId::FatherName), "Ravi");
            assert_eq!(registration.progress(), 100.0 / 11.0);
        }

        #[test]
        fn test_validated_field_shows_error_on_input() {
            let mut registration = Registration::default();
            change(&mut registration, FieldId::StudentName, "A");
            assert_eq!(
                registration.error_for(FieldId::StudentName),
                Some("Name must be at least 2 characters")
            );
            change(&mut registration, FieldId::StudentName, "Al");
            assert!(registration.error_for(FieldId::StudentName).is_none());
        }

        #[test]
        fn test_unvalidated_field_never_shows_error() {
            let mut registration = Registration::default();
            change(&mut registration, FieldId::Address, "");
            assert!(registration.error_for(FieldId::Address).is_none());
        }

        #[test]
        fn test_untouched_fields_show_no_errors() {
            let mut registration = Registration::default();
            change(&mut registration, FieldId::Email, "bad");
            let errors = registration.visible_errors();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, FieldId::Email);
        }

        #[test]
        fn test_password_change_rechecks_shown_confirmation() {
            let mut registration = Registration::default();
            change(&mut registration, FieldId::Password, "Secret123");
            change(&mut registration, FieldId::ConfirmPassword, "Secret123");
            assert!(registration.error_for(FieldId::ConfirmPassword).is_none());

            change(&mut registration, FieldId::Password, "Secret1234");
            assert_eq!(
                registration.error_for(FieldId::ConfirmPassword),
                Some("Passwords do not match")
            );
        }

        #[test]
        fn test_password_change_does_not_reveal_untouched_confirmation() {
            let mut registration = Registration::default();
            change(&mut registration, FieldId::Password, "Secret123");
            assert!(registration.error_for(FieldId::ConfirmPassword).is_none());
        }

        #[test]
        fn test_unknown_choice_is_ignored() {
            let mut registration = Registration::default();
            assert_eq!(
                change(&mut registration, FieldId::Gender, "Robot"),
                Outcome::Ignored
            );
            assert_eq!(registration.form().value(FieldId::Gender), "");
            assert_eq!(registration.progress(), 0.0);

            assert_eq!(
                change(&mut registration, FieldId::Gender, "Male"),
                Outcome::Updated
            );
            assert_eq!(
                change(&mut registration, FieldId::Course, "Astrology"),
                Outcome::Ignored
            );
        }

        #[test]
        fn test_over_length_value_is_ignored() {
            let mut registration = Registration::default();
            assert_eq!(
                change(&mut registration, FieldId::Phone, "12345678901234"),
                Outcome::Ignored
            );
            assert_eq!(registration.form().value(FieldId::Phone), "");
            assert!(registration.error_for(FieldId::Phone).is_none());
        }

        #[test]
        fn test_unknown_choice_never_reaches_snapshot() {
            let mut registration = filled();
            change(&mut registration, FieldId::Gender, "Robot");
            assert_eq!(registration.dispatch(FormMessage::SubmitRequested), Outcome::Submitted);
            let snapshot = registration.snapshot().unwrap();
            assert_eq!(snapshot.value(FieldId::Gender), "Female");
        }

        #[test]
        fn test_password_change_updates_strength() {
            let mut registration = Registration::default();
            change(&mut registration, FieldId::Password, "abcdefgh");
            assert_eq!(registration.strength().level, StrengthLevel::Medium);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_malformed_email_is_rejected() {
            let mut registration = filled();
            change(&mut registration, FieldId::Email, "asha@example");

            let outcome = registration.dispatch(FormMessage::SubmitRequested);

            assert_eq!(
                outcome,
                Outcome::Rejected(vec![FieldValidationError {
                    field: FieldId::Email,
                    message: "Please enter a valid email address".to_string(),
                }])
            );
            assert_eq!(registration.phase(), Phase::Editing);
            assert!(registration.snapshot().is_none());
            let shown: Vec<_> = registration
                .visible_errors()
                .into_iter()
                .map(|e| e.field)
                .collect();
            assert_eq!(shown, vec![FieldId::Email]);
        }

        #[test]
        fn test_empty_form_shows_every_validated_error() {
            let mut registration = Registration::default();
            let outcome = registration.dispatch(FormMessage::SubmitRequested);
            match outcome {
                Outcome::Rejected(errors) => {
                    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
                    // Empty confirmation matches the empty password
                    assert_eq!(
                        fields,
                        vec![
                            FieldId::StudentName,
                            FieldId::Email,
                            FieldId::Phone,
                            FieldId::Password
                        ]
                    );
                }
                other => panic!("unexpected outcome {other:?}"),
            }
            assert_eq!(registration.visible_errors().len(), 4);
        }

        #[test]
        fn test_valid_submit_confirms_with_exact_snapshot() {
            let mut registration = filled();
            let before = registration.form().values();

            assert_eq!(
                registration.dispatch(FormMessage::SubmitRequested),
                Outcome::Submitted
            );
            assert_eq!(registration.phase(), Phase::Confirmed);
            assert_eq!(registration.progress(), 0.0);

            let snapshot = registration.snapshot().unwrap();
            for (field, value) in before {
                assert_eq!(snapshot.value(field), value);
            }
        }

        #[test]
        fn test_submit_keeps_unvalidated_fields_optional() {
            let mut registration = Registration::default();
            change(&mut registration, FieldId::StudentName, "Asha");
            change(&mut registration, FieldId::Email, "a@b.c");
            change(&mut registration, FieldId::Phone, "0123456789");
            change(&mut registration, FieldId::Password, "Abcdefg1");
            change(&mut registration, FieldId::ConfirmPassword, "Abcdefg1");
            assert_eq!(
                registration.dispatch(FormMessage::SubmitRequested),
                Outcome::Submitted
            );
        }

        #[test]
        fn test_field_changes_ignored_while_confirmed() {
            let mut registration = filled();
            registration.dispatch(FormMessage::SubmitRequested);
            assert_eq!(
                change(&mut registration, FieldId::StudentName, "Other"),
                Outcome::Ignored
            );
            assert_eq!(
                registration.snapshot().unwrap().value(FieldId::StudentName),
                "Asha Rao"
            );
        }

        #[test]
        fn test_submit_twice_is_ignored() {
            let mut registration = filled();
            registration.dispatch(FormMessage::SubmitRequested);
            assert_eq!(
                registration.dispatch(FormMessage::SubmitRequested),
                Outcome::Ignored
            );
        }
    }

    mod edit_and_reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edit_returns_to_editing_with_values() {
            let mut registration = filled();
            let before = registration.form().values();
            registration.dispatch(FormMessage::SubmitRequested);

            assert_eq!(
                registration.dispatch(FormMessage::EditRequested),
                Outcome::Edited
            );
            assert_eq!(registration.phase(), Phase::Editing);
            assert!(registration.snapshot().is_none());
            assert_eq!(registration.progress(), 0.0);
            assert_eq!(registration.form().values(), before);
        }

        #[test]
        fn test_edit_while_editing_is_ignored() {
            let mut registration = Registration::default();
            assert_eq!(
                registration.dispatch(FormMessage::EditRequested),
                Outcome::Ignored
            );
        }

        #[test]
        fn test_reset_clears_values_and_errors() {
            let mut registration = filled();
            change(&mut registration, FieldId::Phone, "12");
            assert!(registration.error_for(FieldId::Phone).is_some());

            assert_eq!(
                registration.dispatch(FormMessage::ResetRequested),
                Outcome::Reset
            );
            assert!(registration
                .form()
                .values()
                .values()
                .all(|value| value.is_empty()));
            assert!(registration.visible_errors().is_empty());
            assert_eq!(registration.progress(), 0.0);
            assert_eq!(registration.strength(), PasswordStrength::default());
        }

        #[test]
        fn test_reset_ignored_while_confirmed() {
            let mut registration = filled();
            registration.dispatch(FormMessage::SubmitRequested);
            assert_eq!(
                registration.dispatch(FormMessage::ResetRequested),
                Outcome::Ignored
            );
            assert_eq!(registration.phase(), Phase::Confirmed);
        }
    }

    mod snapshot {
        use super::*;
        use pretty_assertions::assert_eq;

        fn snapshot_of(registration: &mut Registration) -> SubmissionSnapshot {
            registration.dispatch(FormMessage::SubmitRequested);
            registration.snapshot().cloned().unwrap()
        }

        #[test]
        fn test_display_rows_exclude_passwords() {
            let snapshot = snapshot_of(&mut filled());
            let rows = snapshot.display_rows();
            assert_eq!(rows.len(), 9);
            assert!(rows.iter().all(|(_, value)| !value.contains("Secret123")));
            assert_eq!(rows[0], ("Full Name", "Asha Rao"));
        }

        #[test]
        fn test_empty_values_render_not_provided() {
            let mut registration = filled();
            change(&mut registration, FieldId::MotherName, "");
            let snapshot = snapshot_of(&mut registration);
            assert!(snapshot
                .display_rows()
                .contains(&("Mother's Name", NOT_PROVIDED)));
        }

        #[test]
        fn test_document_layout() {
            let snapshot = snapshot_of(&mut filled());
            let document = snapshot.to_document();
            assert!(document.starts_with("Registration Details\n\n"));
            assert!(document.contains("Full Name     : Asha Rao\n"));
            assert!(document.contains("Address       : 12 Lake Road\n"));
            assert!(document.contains("                Pune\n"));
            assert!(!document.contains("Secret123"));
        }
    }
}
