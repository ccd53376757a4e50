//! Form field value objects

use std::fmt;

/// Identifier of a field on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    StudentName,
    Course,
    FatherName,
    MotherName,
    Dob,
    Gender,
    Email,
    Phone,
    Address,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// Every field, in display order
    pub const ALL: [FieldId; 11] = [
        FieldId::StudentName,
        FieldId::Course,
        FieldId::FatherName,
        FieldId::MotherName,
        FieldId::Dob,
        FieldId::Gender,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Name the value is submitted under
    pub fn name(&self) -> &'static str {
        match self {
            Self::StudentName => "student_name",
            Self::Course => "course",
            Self::FatherName => "father_name",
            Self::MotherName => "mother_name",
            Self::Dob => "dob",
            Self::Gender => "gender",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::StudentName => "Full Name",
            Self::Course => "Course",
            Self::FatherName => "Father's Name",
            Self::MotherName => "Mother's Name",
            Self::Dob => "Date of Birth",
            Self::Gender => "Gender",
            Self::Email => "Email ID",
            Self::Phone => "Phone Number",
            Self::Address => "Address",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the field holds a secret that must never be echoed back
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a field is edited and displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Masked on screen
    Secret,
    /// Drop-down; the empty value is the placeholder entry
    Select {
        placeholder: String,
        options: Vec<String>,
    },
    /// Radio group; the empty value means nothing is checked
    Radio { options: Vec<String> },
}

/// Characters a text field accepts from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFilter {
    #[default]
    Any,
    Digits,
    /// Digits and `-` (YYYY-MM-DD)
    Date,
}

impl InputFilter {
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputFilter::Any => !c.is_control(),
            InputFilter::Digits => c.is_ascii_digit(),
            InputFilter::Date => c.is_ascii_digit() || c == '-',
        }
    }
}

/// A single form field with its configuration and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub kind: FieldKind,
    pub value: String,
    pub max_length: Option<usize>,
    pub filter: InputFilter,
}

impl FormField {
    fn new(id: FieldId, kind: FieldKind) -> Self {
        Self {
            id,
            kind,
            value: String::new(),
            max_length: None,
            filter: InputFilter::Any,
        }
    }

    /// Create a single-line text field
    pub fn text(id: FieldId) -> Self {
        Self::new(id, FieldKind::Text)
    }

    /// Create a multi-line text field
    pub fn multiline(id: FieldId) -> Self {
        Self::new(id, FieldKind::Multiline)
    }

    /// Create a masked text field
    pub fn secret(id: FieldId) -> Self {
        Self::new(id, FieldKind::Secret)
    }

    /// Create a drop-down field
    pub fn select(id: FieldId, placeholder: &str, options: Vec<String>) -> Self {
        Self::new(
            id,
            FieldKind::Select {
                placeholder: placeholder.to_string(),
                options,
            },
        )
    }

    /// Create a radio group
    pub fn radio(id: FieldId, options: Vec<String>) -> Self {
        Self::new(id, FieldKind::Radio { options })
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_filter(mut self, filter: InputFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    /// Returns true for drop-downs and radio groups
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Select { .. } | FieldKind::Radio { .. })
    }

    /// Whether `value` may be stored in this field.
    ///
    /// Choice fields take one of their options or the empty value; capped
    /// fields take at most `max_length` characters.
    pub fn accepts_value(&self, value: &str) -> bool {
        let in_options = match &self.kind {
            FieldKind::Select { options, .. } | FieldKind::Radio { options } => {
                value.is_empty() || options.iter().any(|o| o == value)
            }
            _ => true,
        };
        let within_length = self
            .max_length
            .is_none_or(|max| value.chars().count() <= max);
        in_options && within_length
    }

    /// Value after typing `c`, or `None` if the keystroke is rejected
    pub fn value_with_char(&self, c: char) -> Option<String> {
        if self.is_choice() {
            return None;
        }
        let newline_ok = c == '\n' && self.is_multiline();
        if !newline_ok && !self.filter.accepts(c) {
            return None;
        }
        if let Some(max) = self.max_length {
            if self.value.chars().count() >= max {
                return None;
            }
        }
        let mut value = self.value.clone();
        value.push(c);
        Some(value)
    }

    /// Value after a backspace, or `None` if there is nothing to remove
    pub fn value_without_last_char(&self) -> Option<String> {
        if self.is_choice() || self.value.is_empty() {
            return None;
        }
        let mut value = self.value.clone();
        value.pop();
        Some(value)
    }

    /// Value after stepping through the options, or `None` for text fields.
    ///
    /// Drop-downs cycle through the placeholder as well; radio groups only
    /// cycle through their options since a checked radio cannot be unchecked.
    pub fn value_with_option_step(&self, forward: bool) -> Option<String> {
        let choices: Vec<&str> = match &self.kind {
            FieldKind::Select { options, .. } => std::iter::once("")
                .chain(options.iter().map(String::as_str))
                .collect(),
            FieldKind::Radio { options } => options.iter().map(String::as_str).collect(),
            _ => return None,
        };
        if choices.is_empty() {
            return None;
        }

        let len = choices.len();
        let next = match choices.iter().position(|c| *c == self.value) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        Some(choices[next].to_string())
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Secret => "•".repeat(self.value.chars().count()),
            FieldKind::Select { placeholder, .. } if self.value.is_empty() => placeholder.clone(),
            FieldKind::Radio { options } => options
                .iter()
                .map(|o| {
                    let mark = if *o == self.value { "(•)" } else { "( )" };
                    format!("{mark} {o}")
                })
                .collect::<Vec<_>>()
                .join("  "),
            _ => self.value.clone(),
        }
    }
}
