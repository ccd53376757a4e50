//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField, PasswordStrength, StrengthLevel};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Segments in the password strength bar
const STRENGTH_SEGMENTS: u8 = 4;

/// Draw a form field using FormField from the domain layer.
///
/// A visible validation error turns the border red and is written along the
/// bottom border. `strength` adds the meter as a second line inside the box.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
    strength: Option<PasswordStrength>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };

    let mut lines: Vec<Line> = if field.is_multiline() {
        let mut lines: Vec<Line> = field
            .value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        // A trailing newline starts an empty line for the cursor
        if field.value.is_empty() || field.value.ends_with('\n') {
            lines.push(Line::from(""));
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        } else if field.value.is_empty() {
            lines = vec![empty_line()];
        }
        lines
    } else {
        let display_value = field.display_value();
        let line = match &field.kind {
            FieldKind::Select { .. } if is_active => Line::from(vec![
                Span::styled("◂ ", Style::default().fg(Color::Cyan)),
                Span::styled(display_value, style),
                Span::styled(" ▸", Style::default().fg(Color::Cyan)),
            ]),
            FieldKind::Select { .. } if field.value.is_empty() => Line::from(Span::styled(
                display_value,
                Style::default().fg(Color::DarkGray),
            )),
            _ if display_value.is_empty() && !is_active => empty_line(),
            _ => Line::from(vec![
                Span::styled(display_value, style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]),
        };
        vec![line]
    };

    // The meter takes its own line so an error on the border never hides it
    if let Some(strength) = strength {
        lines.push(strength_line(strength));
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn empty_line() -> Line<'static> {
    Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
}

fn strength_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Strong => Color::Green,
        StrengthLevel::Medium => Color::Yellow,
        StrengthLevel::Weak | StrengthLevel::VeryWeak => Color::Red,
    }
}

/// Bar and label for the password strength meter, e.g. "▰▰▱▱ Medium"
fn strength_line(strength: PasswordStrength) -> Line<'static> {
    let filled = (strength.score / 25).min(STRENGTH_SEGMENTS);
    let bar = format!(
        "{}{}",
        "▰".repeat(filled as usize),
        "▱".repeat((STRENGTH_SEGMENTS - filled) as usize)
    );
    let color = strength_color(strength.level);
    Line::from(vec![
        Span::styled(format!(" {bar} "), Style::default().fg(color)),
        Span::styled(
            format!("{} ", strength.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}
