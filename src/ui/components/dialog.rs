//! Modal dialog components

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

const MAX_DIALOG_WIDTH: u16 = 60;

/// Rows taken by borders, the blank line and the hint
const DIALOG_CHROME_HEIGHT: u16 = 4;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let screen = frame.area();
    let width = MAX_DIALOG_WIDTH.min(screen.width.saturating_sub(4)).max(20);
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let message_height = estimate_wrapped_height(error_message, inner_width);
    let area = centered(screen, width, message_height + DIALOG_CHROME_HEIGHT);

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = error_message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ]));

    let block = Block::default()
        .title(Span::styled(
            " Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block.padding(Padding::horizontal(1))),
        area,
    );
}

/// Rows a message needs when wrapped at `width` columns
fn estimate_wrapped_height(message: &str, width: usize) -> u16 {
    message
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum::<usize>()
        .max(1) as u16
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_one_row() {
        assert_eq!(estimate_wrapped_height("clipboard unavailable", 40), 1);
    }

    #[test]
    fn test_long_message_wraps() {
        let message = "x".repeat(90);
        assert_eq!(estimate_wrapped_height(&message, 40), 3);
    }

    #[test]
    fn test_each_line_counts() {
        assert_eq!(estimate_wrapped_height("first\n\nthird", 40), 3);
    }

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let dialog = centered(area, 60, 6);
        assert_eq!(dialog.width, 60);
        assert_eq!(dialog.height, 6);
        assert_eq!(dialog.x, 20);
        assert_eq!(dialog.y, 17);
    }
}
