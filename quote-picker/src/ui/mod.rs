pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::state::AppState;
use ratatui::Frame;

/// Render dispatcher. Reads state only, apart from recording the
/// typeahead geometry needed for mouse hit-testing.
pub fn render_app(f: &mut Frame, state: &AppState) {
    screens::quote_screen::render(f, state);
}
