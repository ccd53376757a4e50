//! Form state management for the registration form

use super::field::{FieldId, FormField, InputFilter};
use std::collections::BTreeMap;

/// Placeholder entry shown while no course is selected
pub const COURSE_PLACEHOLDER: &str = "Select a course";

/// Courses offered when the configuration does not override them
pub const DEFAULT_COURSES: &[&str] = &[
    "Computer Science",
    "Business Administration",
    "Engineering",
    "Medicine",
    "Arts & Humanities",
    "Other",
];

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

/// Number of buttons on the action row (0=Submit, 1=Reset)
pub const FORM_BUTTON_COUNT: usize = 2;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Options that shape the form's fields
#[derive(Debug, Clone)]
pub struct FormOptions {
    pub courses: Vec<String>,
    pub phone_digits_only: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            courses: DEFAULT_COURSES.iter().map(|c| c.to_string()).collect(),
            phone_digits_only: true,
        }
    }
}

/// Current values of every registration field plus keyboard focus.
///
/// The last focus index (one past the fields) is the action row holding the
/// Submit and Reset buttons.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Which button is selected when on the action row
    pub selected_button: usize,
}

impl FormState {
    pub fn new(options: &FormOptions) -> Self {
        let phone_filter = if options.phone_digits_only {
            InputFilter::Digits
        } else {
            InputFilter::Any
        };

        let fields = FieldId::ALL
            .iter()
            .map(|&id| match id {
                FieldId::Course => {
                    FormField::select(id, COURSE_PLACEHOLDER, options.courses.clone())
                }
                FieldId::Gender => {
                    FormField::radio(id, GENDERS.iter().map(|g| g.to_string()).collect())
                }
                FieldId::Dob => FormField::text(id)
                    .with_filter(InputFilter::Date)
                    .with_max_length(10),
                FieldId::Phone => FormField::text(id)
                    .with_filter(phone_filter)
                    .with_max_length(10),
                FieldId::Address => FormField::multiline(id),
                id if id.is_secret() => FormField::secret(id),
                _ => FormField::text(id),
            })
            .collect();

        Self {
            fields,
            active_field_index: 0,
            selected_button: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Current value of a field (empty if unknown)
    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).map(FormField::as_text).unwrap_or("")
    }

    /// Replace a field's value. Returns false if the field is not on the form
    /// or does not accept the value.
    pub fn set_value(&mut self, id: FieldId, value: String) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(field) if field.accepts_value(&value) => {
                field.value = value;
                true
            }
            _ => false,
        }
    }

    /// Copy of every value keyed by field
    pub fn values(&self) -> BTreeMap<FieldId, String> {
        self.fields
            .iter()
            .map(|f| (f.id, f.value.clone()))
            .collect()
    }

    /// Clear every value and return focus to the first field
    pub fn clear_values(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.active_field_index = 0;
        self.selected_button = 0;
    }

    /// Returns true if the action row is currently active
    pub fn is_action_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// The focused field, `None` on the action row
    pub fn active_field_id(&self) -> Option<FieldId> {
        self.get_field(self.active_field_index).map(|f| f.id)
    }

    pub fn focus(&mut self, id: FieldId) {
        if let Some(index) = self.fields.iter().position(|f| f.id == id) {
            self.active_field_index = index;
        }
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FORM_BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FORM_BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&FormOptions::default())
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + action row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
