//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Phase;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout::create_layout(frame.area());

    layout::draw_header(frame, layout.header, app);

    // Draw main content based on the registration phase
    match app.state.phase() {
        Phase::Editing => forms::draw_registration_form(frame, layout.content, app),
        Phase::Confirmed => confirmation::draw(frame, layout.content, app),
    }

    layout::draw_footer(frame, layout.footer, app);
    layout::draw_status_bar(frame, layout.status_bar, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
