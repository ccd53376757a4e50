//! Form completion tracking

use super::field::{FieldKind, FormField};
use super::form_state::FormState;

/// One input as seen by the completion tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedInput<'a> {
    /// Anything with a free-form value (text, drop-down)
    Value(&'a str),
    /// A single-choice selector; filled when it is the selected option
    Choice { selected: bool },
}

impl TrackedInput<'_> {
    pub fn is_filled(&self) -> bool {
        match self {
            TrackedInput::Value(value) => !value.trim().is_empty(),
            TrackedInput::Choice { selected } => *selected,
        }
    }
}

/// Percentage of filled inputs, in `[0, 100]`. An empty slice is 0%.
pub fn compute_progress(inputs: &[TrackedInput<'_>]) -> f64 {
    if inputs.is_empty() {
        return 0.0;
    }
    let filled = inputs.iter().filter(|i| i.is_filled()).count();
    (filled as f64 * 100.0) / inputs.len() as f64
}

impl FormField {
    /// Radio groups are tracked as one choice; everything else by value
    pub fn tracked_input(&self) -> TrackedInput<'_> {
        match self.kind {
            FieldKind::Radio { .. } => TrackedInput::Choice {
                selected: !self.value.is_empty(),
            },
            _ => TrackedInput::Value(&self.value),
        }
    }
}

impl FormState {
    pub fn tracked_inputs(&self) -> Vec<TrackedInput<'_>> {
        self.fields().iter().map(FormField::tracked_input).collect()
    }

    pub fn progress(&self) -> f64 {
        compute_progress(&self.tracked_inputs())
    }
}
