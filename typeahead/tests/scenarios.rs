use ratatui::layout::{Position, Rect};
use typeahead::{
    Candidate, Key, PointerHub, Record, Typeahead, TypeaheadConfig, TypeaheadEvent, filter_candidates,
};

fn record(code: &str, label: &str) -> Record {
    Record::new()
        .with_text("codigo", code)
        .with_text("descripcion", label)
}

fn cable_and_tube() -> Vec<Record> {
    vec![record("A1", "Cable"), record("B2", "Tubo")]
}

fn codes(filtered: &[&Record]) -> Vec<String> {
    filtered
        .iter()
        .filter_map(|candidate| candidate.text("codigo"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_scenario_case_insensitive_code_match() {
    let ta = Typeahead::new(TypeaheadConfig::default()).with_candidates(cable_and_tube());

    assert_eq!(codes(&ta.filtered("a1")), vec!["A1"]);
}

#[test]
fn test_scenario_label_match() {
    let ta = Typeahead::new(TypeaheadConfig::default()).with_candidates(cable_and_tube());

    assert_eq!(codes(&ta.filtered("tu")), vec!["B2"]);
}

#[test]
fn test_scenario_highlight_clamps_and_enter_commits_once() {
    let mut ta = Typeahead::new(TypeaheadConfig::default()).with_candidates(cable_and_tube());
    ta.on_text_input("a1");

    ta.on_key_down(Key::Down, "a1");
    ta.on_key_down(Key::Down, "a1");
    assert_eq!(ta.highlighted("a1"), Some(0));

    let response = ta.on_key_down(Key::Enter, "a1");
    let selected = match response.event {
        Some(TypeaheadEvent::Selected(record)) => record,
        other => panic!("Expected a selection, got {other:?}"),
    };
    assert_eq!(selected.text("codigo"), Some("A1"));

    // The dropdown closed with the commit: a second Enter selects nothing
    let again = ta.on_key_down(Key::Enter, "a1");
    assert_eq!(again.event, None);
}

#[test]
fn test_scenario_escape_keeps_stale_highlight_until_query_changes() {
    let mut ta = Typeahead::new(TypeaheadConfig::default()).with_candidates(cable_and_tube());
    ta.on_text_input("a");
    ta.on_key_down(Key::Down, "a");
    assert_eq!(ta.highlighted("a"), Some(0));

    ta.on_key_down(Key::Esc, "a");
    assert!(!ta.is_open());
    assert_eq!(ta.highlighted("a"), Some(0));

    ta.on_focus("a");
    assert!(ta.is_open());
    assert_eq!(codes(&ta.filtered("a")), vec!["A1"]);
    assert_eq!(ta.highlighted("a"), Some(0));

    ta.on_text_input("ab");
    assert_eq!(ta.highlighted("ab"), None);
}

#[test]
fn test_scenario_warning_lists_related_codes() {
    let candidate = record("Q1", "Sulfatos").with_related_codes(["X9", "Y2"]);
    let mut ta = Typeahead::new(TypeaheadConfig::default()).with_candidates(vec![candidate]);
    ta.on_text_input("q1");

    let view = ta.view("q1");
    let warning = view.rows[0].warning.as_deref().unwrap_or_default();

    assert!(warning.contains("X9, Y2"));
}

#[test]
fn test_filtered_set_is_ordered_subsequence_of_matches() {
    let candidates = vec![
        record("SU01", "Granulometria"),
        record("AG02", "Sulfatos en agua"),
        record("su03", "Contenido de humedad"),
        record("CO04", "Compresion"),
        record("AG05", "Cloruros"),
    ];
    let config = TypeaheadConfig::default();

    for query in ["", "su", "SU", "agua", "o", "zz", "Co"] {
        let expected: Vec<String> = candidates
            .iter()
            .filter(|candidate| {
                let needle = query.to_lowercase();
                candidate.text("codigo").unwrap_or_default().to_lowercase().contains(&needle)
                    || candidate.text("descripcion").unwrap_or_default().to_lowercase().contains(&needle)
            })
            .filter_map(|candidate| candidate.text("codigo"))
            .map(str::to_string)
            .collect();

        let first = filter_candidates(&candidates, query, &config);
        let second = filter_candidates(&candidates, query, &config);

        assert_eq!(codes(&first), expected, "query {query:?}");
        assert_eq!(first, second, "query {query:?}");
    }
}

#[test]
fn test_highlight_stays_in_bounds_for_any_key_sequence() {
    let candidates = vec![record("A1", "Cable"), record("A2", "Cable fino"), record("A3", "Cable grueso")];
    let mut ta = Typeahead::new(TypeaheadConfig::default()).with_candidates(candidates);
    ta.on_text_input("cable");

    let keys = [
        Key::Up,
        Key::Down,
        Key::Down,
        Key::Down,
        Key::Down,
        Key::Up,
        Key::Down,
        Key::Down,
        Key::Up,
        Key::Up,
        Key::Up,
        Key::Up,
    ];
    for key in keys {
        ta.on_key_down(key, "cable");
        let len = ta.filtered("cable").len();
        assert!(ta.highlighted("cable").is_none_or(|index| index < len));
    }
}

#[test]
fn test_selection_never_fires_on_navigation_or_typing() {
    let mut ta = Typeahead::new(TypeaheadConfig::default()).with_candidates(cable_and_tube());

    let changed = ta.on_text_input("a");
    assert_eq!(changed, TypeaheadEvent::Changed("a".to_string()));

    for key in [Key::Down, Key::Up, Key::Down, Key::Char('x'), Key::Esc] {
        assert_eq!(ta.on_key_down(key, "a").event, None);
    }
}

#[test]
fn test_outside_click_through_hub_closes_and_inside_keeps_open() {
    let hub = PointerHub::new();
    let mut ta = Typeahead::new(TypeaheadConfig::default()).with_candidates(cable_and_tube());
    ta.mount(&hub);
    ta.on_text_input("a");
    ta.set_region(Some(Rect::new(0, 0, 40, 8).into()));

    hub.dispatch(Position::new(39, 7));
    assert!(ta.is_open());

    hub.dispatch(Position::new(40, 7));
    assert!(!ta.is_open());

    drop(ta);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_original_widget_settings() {
    let config = TypeaheadConfig::default()
        .with_min_chars(2)
        .with_max_suggestions(1)
        .with_norm_matching(true);
    let candidates = vec![
        record("SU04", "Humedad").with_norm("NTP 339.127"),
        record("SU05", "Limites").with_norm("NTP 339.129"),
    ];

    assert!(filter_candidates(&candidates, "n", &config).is_empty());
    assert_eq!(codes(&filter_candidates(&candidates, "ntp", &config)), vec!["SU04"]);
}
