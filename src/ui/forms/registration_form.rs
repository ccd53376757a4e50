//! Registration form rendering (editing view)

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, FormState, Registration};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows of the form; paired fields share a row
const FORM_ROWS: &[&[FieldId]] = &[
    &[FieldId::StudentName, FieldId::Course],
    &[FieldId::FatherName, FieldId::MotherName],
    &[FieldId::Dob, FieldId::Gender],
    &[FieldId::Email, FieldId::Phone],
    &[FieldId::Address],
    &[FieldId::Password],
    &[FieldId::ConfirmPassword],
];

/// Address gets one extra line for multi-line input
const ADDRESS_HEIGHT: u16 = 4;

/// Password gets one extra line for the strength meter
const PASSWORD_HEIGHT: u16 = 4;

/// Draw the registration form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], &app.state.registration);
    draw_action_panel(frame, main_chunks[1], app.state.registration.form());
}

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, registration: &Registration) {
    let form = registration.form();

    let constraints: Vec<Constraint> = FORM_ROWS
        .iter()
        .map(|row| match row.first() {
            Some(FieldId::Address) => Constraint::Length(ADDRESS_HEIGHT),
            Some(FieldId::Password) => Constraint::Length(PASSWORD_HEIGHT),
            _ => Constraint::Length(3),
        })
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    // Form is focused when not on the action row
    let border_color = if form.is_action_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Student Registration Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for (row, row_area) in FORM_ROWS.iter().zip(chunks.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
            .split(*row_area);

        for (&id, cell) in row.iter().zip(cells.iter()) {
            draw_form_field(frame, *cell, registration, form, id);
        }
    }
}

fn draw_form_field(
    frame: &mut Frame,
    area: Rect,
    registration: &Registration,
    form: &FormState,
    id: FieldId,
) {
    let Some(field) = form.field(id) else {
        return;
    };
    let is_active = form.active_field_id() == Some(id);
    let strength = (id == FieldId::Password && !field.value.is_empty())
        .then(|| registration.strength());

    draw_field(
        frame,
        area,
        field,
        is_active,
        registration.error_for(id),
        strength,
    );
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, form: &FormState) {
    let is_focused = form.is_action_row_active();
    let selected_button = form.selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        "Submit",
        is_focused && selected_button == 0,
        Some(Color::Green),
    );

    render_action_button(
        frame,
        button_chunks[1],
        "Reset",
        is_focused && selected_button == 1,
        Some(Color::Gray),
    );
}
