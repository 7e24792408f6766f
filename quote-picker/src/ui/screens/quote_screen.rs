use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};
use typeahead::TypeaheadInput;

use crate::state::{format_amount, AppState, LoadingState, Quote};
use crate::ui::{
    components::{empty_state, help_bar, screen_title, status_line, totals},
    layouts, theme,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let areas = layouts::screen_layout(f.area());

    let subtitle = match &state.catalog_loading {
        LoadingState::Error(_) => "catalog unavailable".to_string(),
        _ => format!("{} tests in catalog", state.catalog_size()),
    };
    screen_title::render_screen_title(
        f,
        areas.title,
        "Quote Picker",
        &subtitle,
        &state.catalog_loading,
    );

    render_content(f, areas.content, state);
    status_line::render_status_line(
        f,
        areas.status,
        state.status.as_deref(),
        &state.catalog_loading,
    );
    help_bar::render_help_bar(f, areas.help, help_bar::HELP_TEXT_QUOTE);

    // Last, so the dropdown paints over the table
    render_search(f, areas.search, state);
}

fn render_search(f: &mut Frame, area: Rect, state: &AppState) {
    let view = state.typeahead.view(&state.query);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Search")
        .border_style(if state.typeahead.is_focused() {
            theme::accent_border_style()
        } else {
            Style::default()
        });

    let layout = TypeaheadInput::new(&state.query, &view)
        .focused(state.typeahead.is_focused())
        .block(block)
        .render(f, area);

    state.typeahead.set_region(Some(layout.region()));
    *state.layout.borrow_mut() = layout;
}

fn render_content(f: &mut Frame, area: Rect, state: &AppState) {
    let (table_area, totals_area) = layouts::content_with_totals(area);

    if matches!(state.catalog_loading, LoadingState::Loading(..)) && state.catalog_size() == 0 {
        empty_state::render_loading_state(f, table_area, "Quote", "Loading catalog...");
    } else if state.quote.is_empty() {
        empty_state::render_empty_state(
            f,
            table_area,
            "Quote",
            "No tests quoted yet",
            Some("Search by code, description or norm and press Enter"),
        );
    } else {
        render_quote_table(f, table_area, &state.quote);
    }

    totals::render_totals(f, totals_area, &state.quote);
}

fn render_quote_table(f: &mut Frame, area: Rect, quote: &Quote) {
    let header = Row::new(vec![
        Cell::from("Code"),
        Cell::from("Description"),
        Cell::from("Norm"),
        Cell::from(Text::from("Unit").right_aligned()),
        Cell::from(Text::from("Qty").right_aligned()),
        Cell::from(Text::from("Partial").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = quote
        .lines
        .iter()
        .map(|line| {
            let code = if line.accredited {
                Cell::from(line.code.clone()).style(theme::accredited_style())
            } else {
                Cell::from(line.code.clone())
            };

            Row::new(vec![
                code,
                Cell::from(line.label.clone()),
                Cell::from(line.norm.clone().unwrap_or_default()),
                Cell::from(Text::from(format_amount(line.unit_price)).right_aligned()),
                Cell::from(Text::from(line.quantity.to_string()).right_aligned()),
                Cell::from(Text::from(format_amount(line.partial())).right_aligned()),
            ])
        })
        .collect();

    let title = format!("Quote ({} lines)", quote.lines.len());

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Length(12),
            Constraint::Length(5),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(table, area);
}
