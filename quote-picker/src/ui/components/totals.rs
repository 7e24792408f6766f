use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{format_amount, Quote};
use crate::ui::theme;

/// Subtotal, IGV and total, right-aligned in a bordered block
pub fn render_totals(f: &mut Frame, area: Rect, quote: &Quote) {
    let igv_label = if quote.include_igv {
        "IGV (18%)"
    } else {
        "IGV (no incluido)"
    };

    let lines = vec![
        total_line("Subtotal", quote.subtotal(), theme::help_text_style()),
        total_line(igv_label, quote.igv(), theme::help_text_style()),
        total_line("Total", quote.total(), theme::total_style()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

fn total_line(label: &str, amount: f64, style: ratatui::style::Style) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("{label}  "), theme::help_text_style()),
        Span::styled(format_amount(amount), style),
    ])
}
