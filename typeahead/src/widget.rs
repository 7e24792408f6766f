use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme;
use crate::view::{SuggestionRow, TypeaheadView};

/// Screen geometry of a rendered typeahead, kept by the host for hit-testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeaheadLayout {
    pub input: Rect,
    pub dropdown: Option<Rect>,
    /// Rows that fit on screen, top to bottom
    pub rows: Vec<RowHit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    /// Position in the filtered set
    pub index: usize,
    pub area: Rect,
}

/// Cells treated as "inside" the widget for outside-click detection
///
/// The dropdown can be wider than the input, so this is the two rects and not
/// their bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub input: Rect,
    pub dropdown: Option<Rect>,
}

impl Region {
    pub fn contains(&self, position: Position) -> bool {
        self.input.contains(position)
            || self
                .dropdown
                .is_some_and(|dropdown| dropdown.contains(position))
    }
}

impl From<Rect> for Region {
    fn from(input: Rect) -> Self {
        Self {
            input,
            dropdown: None,
        }
    }
}

impl TypeaheadLayout {
    pub fn region(&self) -> Region {
        Region {
            input: self.input,
            dropdown: self.dropdown,
        }
    }

    pub fn row_at(&self, position: Position) -> Option<usize> {
        self.rows
            .iter()
            .find(|hit| hit.area.contains(position))
            .map(|hit| hit.index)
    }

    pub fn input_contains(&self, position: Position) -> bool {
        self.input.contains(position)
    }
}

/// A text input widget with a typeahead dropdown overlay
pub struct TypeaheadInput<'a, C> {
    /// The current input value
    value: &'a str,
    view: &'a TypeaheadView<'a, C>,
    /// Whether the input is focused
    is_focused: bool,
    block: Option<Block<'a>>,
}

impl<'a, C> TypeaheadInput<'a, C> {
    pub fn new(value: &'a str, view: &'a TypeaheadView<'a, C>) -> Self {
        Self {
            value,
            view,
            is_focused: false,
            block: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Render the input and, when visible, the dropdown overlay.
    /// Call last so the dropdown draws over the rest of the screen.
    pub fn render(self, f: &mut Frame, area: Rect) -> TypeaheadLayout {
        let style = if self.is_focused {
            theme::form_field_focused_style()
        } else {
            theme::form_field_style()
        };

        f.render_widget(Clear, area);
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                f.render_widget(block.clone(), area);
                inner
            }
            None => area,
        };

        let line = if self.value.is_empty() {
            Line::from(Span::styled(self.view.placeholder, theme::placeholder_style()))
        } else {
            Line::from(Span::styled(self.value, style))
        };
        f.render_widget(Paragraph::new(line), inner);

        if self.is_focused && !inner.is_empty() {
            let typed = u16::try_from(Line::from(self.value).width()).unwrap_or(u16::MAX);
            f.set_cursor_position(Position::new(
                inner.x + typed.min(inner.width - 1),
                inner.y,
            ));
        }

        let (dropdown, rows) = if self.view.visible {
            self.render_dropdown(f, area)
        } else {
            (None, Vec::new())
        };

        TypeaheadLayout {
            input: area,
            dropdown,
            rows,
        }
    }

    fn render_dropdown(&self, f: &mut Frame, input_area: Rect) -> (Option<Rect>, Vec<RowHit>) {
        // Summary line plus every row
        let content_height = self
            .view
            .rows
            .iter()
            .map(SuggestionRow::height)
            .fold(1u16, u16::saturating_add);
        let dropdown_height = content_height.saturating_add(2);

        // Below the input, or above when only that fits; truncated otherwise
        let frame_area = f.area();
        let below = input_area.bottom();
        let fits_below = below.saturating_add(dropdown_height) <= frame_area.bottom();
        let fits_above = input_area.y.saturating_sub(frame_area.y) >= dropdown_height;
        let y = if !fits_below && fits_above {
            input_area.y - dropdown_height
        } else {
            below
        };

        let width = input_area.width.max(theme::MIN_DROPDOWN_WIDTH);
        let dropdown_area = Rect::new(input_area.x, y, width, dropdown_height).intersection(frame_area);
        if dropdown_area.height < 3 || dropdown_area.width < 3 {
            return (None, Vec::new());
        }

        f.render_widget(Clear, dropdown_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::dropdown_border_style());
        let inner = block.inner(dropdown_area);
        f.render_widget(block, dropdown_area);

        let mut lines = vec![Line::from(Span::styled(
            self.view.summary(),
            theme::summary_style(),
        ))];
        let mut hits = Vec::new();
        let mut y = inner.y.saturating_add(1);
        for row in &self.view.rows {
            if y >= inner.bottom() {
                break;
            }
            let visible_height = row.height().min(inner.bottom() - y);
            hits.push(RowHit {
                index: row.index,
                area: Rect::new(inner.x, y, inner.width, visible_height),
            });
            lines.extend(row_lines(row));
            y = y.saturating_add(row.height());
        }

        f.render_widget(Paragraph::new(lines), inner);
        (Some(dropdown_area), hits)
    }
}

fn row_lines<'r, C>(row: &'r SuggestionRow<'_, C>) -> Vec<Line<'r>> {
    let base = if row.highlighted {
        theme::selection_style()
    } else {
        Style::default()
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(row.code, theme::code_style()),
            Span::raw(" - "),
            Span::raw(row.label),
        ])
        .style(base),
    ];

    if let Some(details) = &row.details {
        lines.push(
            Line::from(Span::styled(
                format!("{}{details}", theme::ROW_INDENT),
                theme::detail_style(),
            ))
            .style(base),
        );
    }

    if let Some(warning) = &row.warning {
        lines.push(
            Line::from(Span::styled(
                format!("{}{warning}", theme::ROW_INDENT),
                theme::warning_style(),
            ))
            .style(base),
        );
    }

    lines
}
