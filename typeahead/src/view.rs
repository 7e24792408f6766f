//! Presentation model: what the dropdown shows for a given state.

use itertools::Itertools;

use crate::candidate::{Candidate, FieldSelectors};

pub const DETAIL_SEPARATOR: &str = " · ";
pub const PRICE_PREFIX: &str = "S/.";
pub const ACCREDITED_BADGE: &str = "✓ Acreditado";
pub const REQUIRES_PREFIX: &str = "⚠ Requiere:";

#[derive(Debug, Clone)]
pub struct TypeaheadView<'a, C> {
    pub placeholder: &'a str,
    /// Dropdown shown: open with at least one row
    pub visible: bool,
    pub rows: Vec<SuggestionRow<'a, C>>,
}

impl<C> TypeaheadView<'_, C> {
    pub fn summary(&self) -> String {
        result_summary(self.rows.len())
    }

    pub fn highlighted_row(&self) -> Option<&SuggestionRow<'_, C>> {
        self.rows.iter().find(|row| row.highlighted)
    }
}

/// One dropdown entry
#[derive(Debug, Clone)]
pub struct SuggestionRow<'a, C> {
    /// Position in the filtered set
    pub index: usize,
    pub candidate: &'a C,
    pub code: &'a str,
    pub label: &'a str,
    /// Norm, price, duration and accreditation, whichever are present
    pub details: Option<String>,
    /// Related codes that must be quoted along with this one
    pub warning: Option<String>,
    pub highlighted: bool,
}

impl<'a, C: Candidate> SuggestionRow<'a, C> {
    pub fn new(
        index: usize,
        candidate: &'a C,
        selectors: FieldSelectors<'_>,
        highlighted: bool,
    ) -> Self {
        Self {
            index,
            candidate,
            code: selectors.code_of(candidate).unwrap_or_default(),
            label: selectors.label_of(candidate).unwrap_or_default(),
            details: row_details(candidate),
            warning: row_warning(candidate),
            highlighted,
        }
    }
}

impl<C> SuggestionRow<'_, C> {
    /// `code - label`
    pub fn title(&self) -> String {
        format!("{} - {}", self.code, self.label)
    }

    /// Terminal lines the row occupies
    pub fn height(&self) -> u16 {
        1 + u16::from(self.details.is_some()) + u16::from(self.warning.is_some())
    }
}

pub fn row_details<C: Candidate>(candidate: &C) -> Option<String> {
    let norm = candidate
        .norm()
        .filter(|norm| !norm.is_empty())
        .map(str::to_string);
    let price = candidate
        .price()
        .map(|price| format!("{PRICE_PREFIX} {price}"));
    let duration = candidate
        .duration()
        .filter(|duration| !duration.is_empty())
        .map(str::to_string);
    let accredited = candidate
        .accredited()
        .then(|| ACCREDITED_BADGE.to_string());

    let line = [norm, price, duration, accredited]
        .into_iter()
        .flatten()
        .join(DETAIL_SEPARATOR);
    (!line.is_empty()).then_some(line)
}

pub fn row_warning<C: Candidate>(candidate: &C) -> Option<String> {
    let codes = candidate.related_codes();
    if codes.is_empty() {
        return None;
    }
    Some(format!("{REQUIRES_PREFIX} {}", codes.join(", ")))
}

/// Dropdown header, e.g. "3 resultados encontrados"
pub fn result_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} resultado{plural} encontrado{plural}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Record;
    use crate::config::TypeaheadConfig;
    use crate::controller::Typeahead;
    use crate::input::Key;

    fn record(code: &str, label: &str) -> Record {
        Record::new()
            .with_text("codigo", code)
            .with_text("descripcion", label)
    }

    #[test]
    fn test_row_title() {
        let candidate = record("A1", "Cable");
        let row = SuggestionRow::new(0, &candidate, FieldSelectors::new("codigo", "descripcion"), false);
        assert_eq!(row.title(), "A1 - Cable");
        assert_eq!(row.height(), 1);
    }

    #[test]
    fn test_details_include_only_present_attributes() {
        let full = record("SU04", "Humedad")
            .with_norm("NTP 339.127")
            .with_price(30.0)
            .with_duration("3 dias");
        assert_eq!(
            row_details(&full).as_deref(),
            Some("NTP 339.127 · S/. 30 · 3 dias")
        );

        let price_only = record("SU05", "Limites").with_price("45,50");
        assert_eq!(row_details(&price_only).as_deref(), Some("S/. 45,50"));

        assert_eq!(row_details(&record("SU06", "Corte")), None);
    }

    #[test]
    fn test_empty_norm_and_duration_are_skipped() {
        let candidate = record("X1", "x").with_norm("").with_duration("");
        assert_eq!(row_details(&candidate), None);
    }

    #[test]
    fn test_accredited_badge() {
        let candidate = record("SU04", "Humedad").with_accredited(true);
        assert_eq!(row_details(&candidate).as_deref(), Some(ACCREDITED_BADGE));
    }

    #[test]
    fn test_warning_lists_related_codes() {
        let candidate = record("Q1", "Sulfatos").with_related_codes(["X9", "Y2"]);
        let warning = row_warning(&candidate).unwrap();
        assert!(warning.contains("X9, Y2"));

        assert_eq!(row_warning(&record("Q2", "Cloruros")), None);
    }

    #[test]
    fn test_row_height_counts_optional_lines() {
        let candidate = record("Q1", "Sulfatos")
            .with_price(80.0)
            .with_related_codes(["X9"]);
        let row = SuggestionRow::new(0, &candidate, FieldSelectors::new("codigo", "descripcion"), false);
        assert_eq!(row.height(), 3);
    }

    #[test]
    fn test_result_summary_pluralization() {
        assert_eq!(result_summary(1), "1 resultado encontrado");
        assert_eq!(result_summary(3), "3 resultados encontrados");
        assert_eq!(result_summary(0), "0 resultados encontrados");
    }

    #[test]
    fn test_view_marks_highlighted_row() {
        let mut ta = Typeahead::new(TypeaheadConfig::default())
            .with_candidates(vec![record("A1", "Cable"), record("A2", "Cable fino")]);
        ta.on_text_input("cable");
        ta.on_key_down(Key::Down, "cable");
        ta.on_key_down(Key::Down, "cable");

        let view = ta.view("cable");

        assert!(view.visible);
        assert_eq!(view.placeholder, "Buscar...");
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.highlighted_row().map(|row| row.code), Some("A2"));
        assert_eq!(view.summary(), "2 resultados encontrados");
    }

    #[test]
    fn test_view_hidden_while_closed() {
        let ta = Typeahead::new(TypeaheadConfig::default()).with_candidates(vec![record("A1", "Cable")]);

        let view = ta.view("a");

        assert!(!view.visible);
        assert_eq!(view.rows.len(), 1);
    }
}
