//! Screen title with loading indicator.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::LoadingState;
use crate::ui::{layouts, theme};

use super::loading_indicator;

/// Render the title on the left and the loading spinner in the top-right corner.
pub fn render_screen_title(
    f: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    loading_state: &LoadingState,
) {
    let (title_area, indicator_area) = layouts::title_with_loading(area);

    let line = Line::from(vec![
        Span::styled(title, theme::title_style()),
        Span::raw("  "),
        Span::styled(subtitle, theme::help_text_style()),
    ]);
    f.render_widget(Paragraph::new(line), title_area);

    loading_indicator::render_loading_indicator(f, indicator_area, loading_state);
}
