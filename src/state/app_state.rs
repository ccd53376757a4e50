//! Application state definitions

use super::forms::{FormOptions, FormState};
use super::registration::{Phase, Registration};
use std::collections::VecDeque;

/// Number of buttons on the confirmation view (0=Edit, 1=Print)
pub const CONFIRMATION_BUTTON_COUNT: usize = 2;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub registration: Registration,

    /// Selected button on the confirmation view
    pub confirmation_button: usize,

    // UI state
    pub status_message: Option<String>,
    /// Runtime errors waiting to be shown, oldest first
    pub errors: VecDeque<String>,
    pub footer_owner: Option<String>,
}

impl AppState {
    pub fn new(options: &FormOptions, footer_owner: Option<String>) -> Self {
        Self {
            registration: Registration::new(FormState::new(options)),
            footer_owner,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.registration.phase()
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn next_confirmation_button(&mut self) {
        self.confirmation_button = (self.confirmation_button + 1) % CONFIRMATION_BUTTON_COUNT;
    }
}
