//! Layout components (header, footer, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Phase;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub const PORTAL_NAME: &str = "Student Registration Portal";

/// Screen regions, top to bottom
pub struct AppLayout {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

/// Create the main layout
pub fn create_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
        status_bar: chunks[3],
    }
}

/// Draw the title and the completion gauge
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),    // Title
            Constraint::Length(32), // Progress
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            PORTAL_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Fill in your details to register for a course",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, chunks[0]);

    let percent = app.state.registration.progress().round().clamp(0.0, 100.0) as u16;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .percent(percent);
    frame.render_widget(gauge, chunks[1]);
}

/// Footer text for a given year
pub fn footer_text(year: i32, owner: Option<&str>) -> String {
    match owner {
        Some(owner) => format!("© {year} {PORTAL_NAME} | Designed by {owner}"),
        None => format!("© {year} {PORTAL_NAME}"),
    }
}

pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let year = chrono::Local::now().year();
    let footer = Paragraph::new(footer_text(year, app.state.footer_owner.as_deref()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Phase indicator
    let indicator = match app.state.phase() {
        Phase::Editing => Span::styled(" ✎ ", Style::default().fg(Color::Yellow)),
        Phase::Confirmed => Span::styled(" ✓ ", Style::default().fg(Color::Green)),
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_phase_hints(app.state.phase()),
        Style::default().fg(Color::Gray),
    ));

    let error_count = app.state.registration.visible_errors().len();
    if error_count > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            match error_count {
                1 => "1 error".to_string(),
                n => format!("{n} errors"),
            },
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get hints for the current phase
fn get_phase_hints(phase: Phase) -> String {
    match phase {
        Phase::Editing => format!(
            "Tab/↑↓:field  ←→/Space:choose  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset"
        ),
        Phase::Confirmed => "e:edit  p:print  ←→:select  Esc/q:quit".to_string(),
    }
}
