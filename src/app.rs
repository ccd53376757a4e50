//! Application state and core logic

use crate::config::RegistrationConfig;
use crate::platform::has_shortcut_modifier;
use crate::print::{ClipboardPrinter, DetailsPrinter};
use crate::state::{
    AppState, FieldId, Form, FormMessage, FormField, FormState, Outcome, Phase, SubmissionSnapshot,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Destination for "Print Details"
    printer: Box<dyn DetailsPrinter>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App that prints to the system clipboard
    pub fn new(config: &RegistrationConfig) -> Self {
        Self::with_printer(config, Box::new(ClipboardPrinter))
    }

    pub fn with_printer(config: &RegistrationConfig, printer: Box<dyn DetailsPrinter>) -> Self {
        Self {
            state: AppState::new(&config.form_options(), config.footer_owner.clone()),
            printer,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn form(&self) -> &FormState {
        self.state.registration.form()
    }

    fn form_mut(&mut self) -> &mut FormState {
        self.state.registration.form_mut()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.phase() {
            Phase::Editing => self.handle_editing_key(key),
            Phase::Confirmed => self.handle_confirmation_key(key),
        }
    }

    /// Handle keys in the editing view
    fn handle_editing_key(&mut self, key: KeyEvent) -> Result<()> {
        // Check if we're on the action row (Submit/Reset)
        let on_action_row = self.form().is_action_row_active();
        let on_choice = self
            .active_field()
            .map(FormField::is_choice)
            .unwrap_or(false);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if has_shortcut_modifier(&key) => {
                self.dispatch(FormMessage::SubmitRequested);
            }
            KeyCode::Char('r') if has_shortcut_modifier(&key) => {
                self.dispatch(FormMessage::ResetRequested);
            }
            KeyCode::Tab => self.form_mut().next_field(),
            KeyCode::BackTab => self.form_mut().prev_field(),
            // Up/Down for action row navigation
            KeyCode::Up if on_action_row => self.form_mut().prev_button(),
            KeyCode::Down if on_action_row => self.form_mut().next_button(),
            KeyCode::Left if on_action_row => self.form_mut().prev_button(),
            KeyCode::Right if on_action_row => self.form_mut().next_button(),
            // Button order: 0=Submit, 1=Reset
            KeyCode::Enter if on_action_row => match self.form().selected_button {
                0 => self.dispatch(FormMessage::SubmitRequested),
                _ => self.dispatch(FormMessage::ResetRequested),
            },
            KeyCode::Up => self.form_mut().prev_field(),
            KeyCode::Down => self.form_mut().next_field(),
            KeyCode::Esc => {}
            KeyCode::Left if on_choice => {
                self.change_active_field(|field| field.value_with_option_step(false));
            }
            KeyCode::Right | KeyCode::Char(' ') if on_choice => {
                self.change_active_field(|field| field.value_with_option_step(true));
            }
            KeyCode::Enter => {
                let multiline = self
                    .active_field()
                    .map(FormField::is_multiline)
                    .unwrap_or(false);
                if multiline {
                    self.change_active_field(|field| field.value_with_char('\n'));
                } else {
                    self.form_mut().next_field();
                }
            }
            // Form field input (only when not on action row)
            KeyCode::Char(c) if !on_action_row && !has_shortcut_modifier(&key) => {
                self.change_active_field(|field| field.value_with_char(c));
            }
            KeyCode::Backspace if !on_action_row => {
                self.change_active_field(FormField::value_without_last_char);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the confirmation view
    fn handle_confirmation_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('e') => self.dispatch(FormMessage::EditRequested),
            KeyCode::Char('p') => self.print_details(),
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::BackTab => self.state.next_confirmation_button(),
            // Button order: 0=Edit Registration, 1=Print Details
            KeyCode::Enter => match self.state.confirmation_button {
                0 => self.dispatch(FormMessage::EditRequested),
                _ => self.print_details(),
            },
            _ => {}
        }
        Ok(())
    }

    fn active_field(&self) -> Option<&FormField> {
        let form = self.form();
        form.get_field(form.active_field())
    }

    /// Apply an edit to the focused field through the state machine
    fn change_active_field(&mut self, edit: impl FnOnce(&FormField) -> Option<String>) {
        let change = self
            .active_field()
            .and_then(|field| edit(field).map(|value| (field.id, value)));

        if let Some((field, value)) = change {
            self.dispatch(FormMessage::FieldChanged { field, value });
        }
    }

    /// Send a message to the registration and present its outcome
    fn dispatch(&mut self, message: FormMessage) {
        match self.state.registration.dispatch(message) {
            Outcome::Submitted => {
                self.state.confirmation_button = 0;
                self.state.status_message = Some("Registration submitted".to_string());
            }
            Outcome::Rejected(errors) => {
                if let Some(first) = errors.first() {
                    self.form_mut().focus(first.field);
                }
                self.state.status_message = Some(match errors.len() {
                    1 => "1 field needs attention".to_string(),
                    n => format!("{n} fields need attention"),
                });
            }
            Outcome::Edited => {
                self.form_mut().focus(FieldId::StudentName);
                self.state.status_message = Some("Editing registration".to_string());
            }
            Outcome::Reset => {
                self.state.status_message = Some("Form cleared".to_string());
            }
            Outcome::Updated | Outcome::Ignored => {}
        }
    }

    /// Hand the submitted details to the printer
    fn print_details(&mut self) {
        let Some(document) = self
            .state
            .registration
            .snapshot()
            .map(SubmissionSnapshot::to_document)
        else {
            return;
        };

        match self.printer.print(&document) {
            Ok(()) => {
                tracing::info!("registration details printed");
                self.state.status_message =
                    Some("Registration details copied to clipboard".to_string());
            }
            Err(err) => self.push_error(format!("Could not print details: {err}")),
        }
    }
}
