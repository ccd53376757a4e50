//! Confirmation view shown after a successful submit

use crate::app::App;
use crate::state::SubmissionSnapshot;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const DETAIL_COLUMNS: usize = 2;

/// Draw the confirmation view with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Details
            Constraint::Length(24), // Action panel
        ])
        .split(area);

    if let Some(snapshot) = app.state.registration.snapshot() {
        draw_details(frame, main_chunks[0], snapshot);
    }
    draw_action_panel(frame, main_chunks[1], app.state.confirmation_button);
}

fn draw_details(frame: &mut Frame, area: Rect, snapshot: &SubmissionSnapshot) {
    let block = Block::default()
        .title(" Registration Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner
            Constraint::Min(0),    // Details grid
        ])
        .margin(1)
        .split(inner);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            "✓ Registration Successful!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Thank you for registering. Here are your details:",
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(banner, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, DETAIL_COLUMNS as u32); DETAIL_COLUMNS])
        .split(chunks[1]);

    let mut column_lines: Vec<Vec<Line>> = vec![Vec::new(); DETAIL_COLUMNS];
    for (i, (label, value)) in snapshot.display_rows().into_iter().enumerate() {
        let lines = &mut column_lines[i % DETAIL_COLUMNS];
        lines.push(Line::from(Span::styled(
            label,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(value.lines().map(Line::from));
        lines.push(Line::from(""));
    }

    for (lines, column) in column_lines.into_iter().zip(columns.iter()) {
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), *column);
    }
}

/// Draw the action panel sidebar; it always holds focus on this view
fn draw_action_panel(frame: &mut Frame, area: Rect, selected_button: usize) {
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Edit Registration
            Constraint::Length(BUTTON_HEIGHT), // Print Details
            Constraint::Min(0),
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        "Edit Registration",
        selected_button == 0,
        Some(Color::Cyan),
    );

    render_action_button(
        frame,
        button_chunks[1],
        "Print Details",
        selected_button == 1,
        Some(Color::Green),
    );
}
