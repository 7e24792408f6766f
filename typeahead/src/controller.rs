//! Typeahead interaction state.
//!
//! The host owns the query string and passes it in with every event; the
//! controller never edits it and only returns [`TypeaheadEvent::Changed`]
//! requests for the host to echo back. The filtered set is derived from
//! `(query, candidates)` on every call and never stored.

use std::cell::Cell;
use std::rc::Rc;


use crate::candidate::Candidate;
use crate::config::TypeaheadConfig;
use crate::filter::filter_candidates;
use crate::input::Key;
use crate::pointer::{PointerHub, Subscription};
use crate::view::{SuggestionRow, TypeaheadView};
use crate::widget::Region;

/// Events emitted to the host
#[derive(Debug, Clone, PartialEq)]
pub enum TypeaheadEvent<C> {
    /// The user edited the text; the host should adopt this query
    Changed(String),
    /// A candidate was committed via Enter or a pointer click
    Selected(C),
}

/// Result of offering a key press to the typeahead
#[derive(Debug, Clone, PartialEq)]
pub struct KeyResponse<C> {
    /// The typeahead used the key; the host should skip its own handling
    pub consumed: bool,
    pub event: Option<TypeaheadEvent<C>>,
}

impl<C> KeyResponse<C> {
    fn pass_through() -> Self {
        Self {
            consumed: false,
            event: None,
        }
    }

    fn consumed() -> Self {
        Self {
            consumed: true,
            event: None,
        }
    }

    fn selected(candidate: C) -> Self {
        Self {
            consumed: true,
            event: Some(TypeaheadEvent::Selected(candidate)),
        }
    }
}

/// State shared with the outside-click listener
#[derive(Debug, Default)]
struct Shared {
    open: Cell<bool>,
    /// Input plus dropdown area from the last render
    region: Cell<Option<Region>>,
}

#[derive(Debug)]
pub struct Typeahead<C> {
    config: TypeaheadConfig,
    candidates: Vec<C>,
    /// Query the highlight belongs to
    observed_query: String,
    highlighted: Option<usize>,
    focused: bool,
    shared: Rc<Shared>,
    outside_click: Option<Subscription>,
}

impl<C: Candidate + Clone> Typeahead<C> {
    pub fn new(config: TypeaheadConfig) -> Self {
        Self {
            config,
            candidates: Vec::new(),
            observed_query: String::new(),
            highlighted: None,
            focused: false,
            shared: Rc::new(Shared::default()),
            outside_click: None,
        }
    }

    pub fn with_candidates(mut self, candidates: Vec<C>) -> Self {
        self.candidates = candidates;
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start listening for pointer-downs outside the widget.
    /// Mounting an already mounted typeahead keeps the existing listener.
    pub fn mount(&mut self, hub: &PointerHub) {
        if self.outside_click.is_some() {
            return;
        }

        let shared = Rc::clone(&self.shared);
        self.outside_click = Some(hub.subscribe(move |position| {
            let inside = shared
                .region
                .get()
                .is_some_and(|region| region.contains(position));
            if !inside && shared.open.replace(false) {
                tracing::debug!(?position, "Typeahead dismissed by outside pointer-down");
            }
        }));
        tracing::debug!("Typeahead mounted");
    }

    /// Stop listening for outside pointer-downs. Dropping the typeahead does the same.
    pub fn unmount(&mut self) {
        if self.outside_click.take().is_some() {
            tracing::debug!("Typeahead unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.outside_click.is_some()
    }

    // =========================================================================
    // Host inputs
    // =========================================================================

    /// Replace the candidate list; any highlight is dropped
    pub fn set_candidates(&mut self, candidates: Vec<C>) {
        tracing::debug!(count = candidates.len(), "Typeahead candidates replaced");
        self.candidates = candidates;
        self.highlighted = None;
    }

    /// Record the screen area covered by the input and dropdown
    pub fn set_region(&self, region: Option<Region>) {
        self.shared.region.set(region);
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Text edited in the input field
    pub fn on_text_input(&mut self, new_text: impl Into<String>) -> TypeaheadEvent<C> {
        let new_text = new_text.into();
        self.observed_query.clone_from(&new_text);
        self.highlighted = None;
        self.shared.open.set(true);
        TypeaheadEvent::Changed(new_text)
    }

    /// Input field gained focus; reopens the dropdown without touching the query
    pub fn on_focus(&mut self, query: &str) {
        self.sync_query(query);
        self.focused = true;
        if self.config.accepts_query(query) {
            self.shared.open.set(true);
        }
    }

    pub fn on_blur(&mut self) {
        self.focused = false;
    }

    /// Keyboard handling; keys only act while the dropdown is open
    pub fn on_key_down(&mut self, key: Key, query: &str) -> KeyResponse<C> {
        if !self.is_open() {
            return KeyResponse::pass_through();
        }
        self.sync_query(query);

        match key {
            Key::Down => {
                let len = self.filtered(query).len();
                self.highlighted = len
                    .checked_sub(1)
                    .map(|last| self.highlighted.map_or(0, |index| (index + 1).min(last)));
                KeyResponse::consumed()
            }
            Key::Up => {
                self.highlighted = self.highlighted.and_then(|index| index.checked_sub(1));
                KeyResponse::consumed()
            }
            Key::Enter => {
                // No implicit pick of the first row: Enter needs a highlight
                let Some(index) = self.highlighted else {
                    return KeyResponse::consumed();
                };
                match self.candidate_at(query, index) {
                    Some(candidate) => {
                        self.commit(&candidate);
                        KeyResponse::selected(candidate)
                    }
                    None => KeyResponse::consumed(),
                }
            }
            Key::Esc => {
                // Highlight survives until the next query or candidate change
                self.shared.open.set(false);
                KeyResponse::pass_through()
            }
            _ => KeyResponse::pass_through(),
        }
    }

    /// Any interaction that landed outside the input and dropdown
    pub fn on_outside_interaction(&mut self) {
        self.shared.open.set(false);
    }

    /// Click on a visible dropdown row; commits it and returns focus to the input
    pub fn on_pointer_select(&mut self, row: usize, query: &str) -> Option<TypeaheadEvent<C>> {
        if !self.is_dropdown_visible(query) {
            return None;
        }
        self.sync_query(query);

        let candidate = self.candidate_at(query, row)?;
        self.commit(&candidate);
        self.focused = true;
        Some(TypeaheadEvent::Selected(candidate))
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    pub fn filtered(&self, query: &str) -> Vec<&C> {
        filter_candidates(&self.candidates, query, &self.config)
    }

    /// Highlighted row for this query; a query the controller has not seen yet
    /// has no highlight
    pub fn highlighted(&self, query: &str) -> Option<usize> {
        if self.observed_query == query {
            self.highlighted
        } else {
            None
        }
    }

    pub fn is_open(&self) -> bool {
        self.shared.open.get()
    }

    pub fn is_dropdown_visible(&self, query: &str) -> bool {
        self.is_open() && !self.filtered(query).is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn candidates(&self) -> &[C] {
        &self.candidates
    }

    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    /// Presentation model for the current state
    pub fn view(&self, query: &str) -> TypeaheadView<'_, C> {
        let filtered = self.filtered(query);
        let highlighted = self.highlighted(query);
        let visible = self.is_open() && !filtered.is_empty();
        let selectors = self.config.selectors();

        let rows = filtered
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| {
                SuggestionRow::new(index, candidate, selectors, highlighted == Some(index))
            })
            .collect();

        TypeaheadView {
            placeholder: &self.config.placeholder,
            visible,
            rows,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Drop the highlight when the host changed the query behind our back
    fn sync_query(&mut self, query: &str) {
        if self.observed_query != query {
            self.observed_query = query.to_string();
            self.highlighted = None;
        }
    }

    fn candidate_at(&self, query: &str, index: usize) -> Option<C> {
        self.filtered(query).get(index).map(|candidate| (*candidate).clone())
    }

    fn commit(&mut self, candidate: &C) {
        self.shared.open.set(false);
        tracing::debug!(
            code = self.config.selectors().code_of(candidate).unwrap_or_default(),
            "Typeahead selection committed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Record;
    use ratatui::layout::{Position, Rect};

    // ============================================================================
    // Helper Functions
    // ============================================================================

    fn record(code: &str, label: &str) -> Record {
        Record::new()
            .with_text("codigo", code)
            .with_text("descripcion", label)
    }

    fn typeahead(candidates: Vec<Record>) -> Typeahead<Record> {
        Typeahead::new(TypeaheadConfig::default()).with_candidates(candidates)
    }

    fn three_cables() -> Vec<Record> {
        vec![
            record("C1", "Cable rojo"),
            record("C2", "Cable azul"),
            record("C3", "Cable verde"),
        ]
    }

    /// Typeahead with the dropdown opened by typing `query`
    fn opened(candidates: Vec<Record>, query: &str) -> Typeahead<Record> {
        let mut ta = typeahead(candidates);
        ta.on_text_input(query);
        ta
    }

    fn selected_code(response: &KeyResponse<Record>) -> Option<&str> {
        match &response.event {
            Some(TypeaheadEvent::Selected(record)) => record.text("codigo"),
            _ => None,
        }
    }

    // ============================================================================
    // Text input and focus
    // ============================================================================

    #[test]
    fn test_text_input_requests_change_and_opens() {
        let mut ta = typeahead(three_cables());
        assert!(!ta.is_open());

        let event = ta.on_text_input("cab");

        assert_eq!(event, TypeaheadEvent::Changed("cab".to_string()));
        assert!(ta.is_open());
        assert_eq!(ta.highlighted("cab"), None);
    }

    #[test]
    fn test_text_input_resets_highlight() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_key_down(Key::Down, "cable");
        ta.on_key_down(Key::Down, "cable");
        assert_eq!(ta.highlighted("cable"), Some(1));

        ta.on_text_input("cable ");

        assert_eq!(ta.highlighted("cable "), None);
    }

    #[test]
    fn test_host_query_change_without_text_input_drops_highlight() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_key_down(Key::Down, "cable");
        assert_eq!(ta.highlighted("cable"), Some(0));

        // The host replaced the query on its own
        assert_eq!(ta.highlighted("c"), None);
        ta.on_key_down(Key::Down, "c");
        assert_eq!(ta.highlighted("c"), Some(0));
    }

    #[test]
    fn test_focus_opens_without_clearing() {
        let mut ta = typeahead(three_cables());

        ta.on_focus("cab");

        assert!(ta.is_open());
        assert!(ta.is_focused());
        assert_eq!(ta.filtered("cab").len(), 3);
    }

    #[test]
    fn test_focus_respects_min_chars() {
        let mut ta = Typeahead::new(TypeaheadConfig::default().with_min_chars(2))
            .with_candidates(three_cables());

        ta.on_focus("c");
        assert!(!ta.is_open());

        ta.on_focus("ca");
        assert!(ta.is_open());
    }

    #[test]
    fn test_blur_keeps_dropdown_state() {
        let mut ta = opened(three_cables(), "c");
        ta.on_focus("c");

        ta.on_blur();

        assert!(!ta.is_focused());
        assert!(ta.is_open());
    }

    // ============================================================================
    // Keyboard navigation
    // ============================================================================

    #[test]
    fn test_keys_do_nothing_while_closed() {
        let mut ta = typeahead(three_cables());

        for key in [Key::Down, Key::Up, Key::Enter, Key::Esc] {
            let response = ta.on_key_down(key, "");
            assert!(!response.consumed);
            assert_eq!(response.event, None);
        }
        assert_eq!(ta.highlighted(""), None);
    }

    #[test]
    fn test_arrow_down_clamps_at_last_row() {
        let mut ta = opened(three_cables(), "cable");

        for expected in [0, 1, 2, 2, 2] {
            let response = ta.on_key_down(Key::Down, "cable");
            assert!(response.consumed);
            assert_eq!(ta.highlighted("cable"), Some(expected));
        }
    }

    #[test]
    fn test_arrow_up_stops_at_no_highlight() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_key_down(Key::Down, "cable");
        ta.on_key_down(Key::Down, "cable");

        ta.on_key_down(Key::Up, "cable");
        assert_eq!(ta.highlighted("cable"), Some(0));
        ta.on_key_down(Key::Up, "cable");
        assert_eq!(ta.highlighted("cable"), None);

        let response = ta.on_key_down(Key::Up, "cable");
        assert!(response.consumed);
        assert_eq!(ta.highlighted("cable"), None);
    }

    #[test]
    fn test_arrow_down_with_empty_set_keeps_no_highlight() {
        let mut ta = opened(three_cables(), "zzz");

        let response = ta.on_key_down(Key::Down, "zzz");

        assert!(response.consumed);
        assert_eq!(ta.highlighted("zzz"), None);
    }

    #[test]
    fn test_enter_without_highlight_is_noop() {
        let mut ta = opened(three_cables(), "cable");

        let response = ta.on_key_down(Key::Enter, "cable");

        assert!(response.consumed);
        assert_eq!(response.event, None);
        assert!(ta.is_open());
    }

    #[test]
    fn test_enter_commits_highlighted_candidate() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_key_down(Key::Down, "cable");
        ta.on_key_down(Key::Down, "cable");

        let response = ta.on_key_down(Key::Enter, "cable");

        assert!(response.consumed);
        assert_eq!(selected_code(&response), Some("C2"));
        assert!(!ta.is_open());
    }

    #[test]
    fn test_enter_after_commit_does_not_select_again() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_key_down(Key::Down, "cable");
        let first = ta.on_key_down(Key::Enter, "cable");
        assert!(first.event.is_some());

        let second = ta.on_key_down(Key::Enter, "cable");

        assert!(!second.consumed);
        assert_eq!(second.event, None);
    }

    #[test]
    fn test_escape_closes_but_keeps_stale_highlight() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_key_down(Key::Down, "cable");

        let response = ta.on_key_down(Key::Esc, "cable");

        assert!(!response.consumed);
        assert!(!ta.is_open());
        assert_eq!(ta.highlighted("cable"), Some(0));
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_key_down(Key::Down, "cable");

        for key in [Key::Char('x'), Key::Backspace, Key::Left, Key::Tab, Key::Other] {
            let response = ta.on_key_down(key, "cable");
            assert!(!response.consumed);
            assert_eq!(response.event, None);
        }
        assert!(ta.is_open());
        assert_eq!(ta.highlighted("cable"), Some(0));
    }

    // ============================================================================
    // Pointer selection
    // ============================================================================

    #[test]
    fn test_pointer_select_commits_and_refocuses() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_blur();

        let event = ta.on_pointer_select(2, "cable");

        match event {
            Some(TypeaheadEvent::Selected(record)) => assert_eq!(record.text("codigo"), Some("C3")),
            other => panic!("Expected a selection, got {other:?}"),
        }
        assert!(!ta.is_open());
        assert!(ta.is_focused());
    }

    #[test]
    fn test_pointer_select_does_not_move_highlight() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_key_down(Key::Down, "cable");

        ta.on_pointer_select(2, "cable");

        assert_eq!(ta.highlighted("cable"), Some(0));
    }

    #[test]
    fn test_pointer_select_requires_visible_dropdown() {
        let mut ta = typeahead(three_cables());
        assert_eq!(ta.on_pointer_select(0, "cable"), None);

        let mut ta = opened(three_cables(), "cable");
        assert_eq!(ta.on_pointer_select(3, "cable"), None);
        assert!(ta.is_open());
    }

    // ============================================================================
    // Candidate changes
    // ============================================================================

    #[test]
    fn test_set_candidates_resets_highlight() {
        let mut ta = opened(three_cables(), "cable");
        ta.on_key_down(Key::Down, "cable");
        ta.on_key_down(Key::Down, "cable");

        ta.set_candidates(vec![record("C9", "Cable nuevo")]);

        assert_eq!(ta.highlighted("cable"), None);
        ta.on_key_down(Key::Down, "cable");
        assert_eq!(ta.highlighted("cable"), Some(0));
    }

    #[test]
    fn test_empty_candidate_list_never_shows_dropdown() {
        let mut ta = typeahead(Vec::new());
        ta.on_text_input("a");

        assert!(ta.is_open());
        assert!(!ta.is_dropdown_visible("a"));
        assert!(!ta.view("a").visible);
    }

    // ============================================================================
    // Outside interaction
    // ============================================================================

    #[test]
    fn test_outside_interaction_closes() {
        let mut ta = opened(three_cables(), "c");

        ta.on_outside_interaction();

        assert!(!ta.is_open());
    }

    #[test]
    fn test_pointer_down_outside_region_closes() {
        let hub = PointerHub::new();
        let mut ta = opened(three_cables(), "c");
        ta.mount(&hub);
        ta.set_region(Some(Rect::new(0, 0, 20, 10).into()));

        hub.dispatch(Position::new(5, 5));
        assert!(ta.is_open());

        hub.dispatch(Position::new(30, 5));
        assert!(!ta.is_open());
    }

    #[test]
    fn test_pointer_down_beside_narrow_input_closes() {
        let hub = PointerHub::new();
        let mut ta = opened(three_cables(), "c");
        ta.mount(&hub);
        ta.set_region(Some(Region {
            input: Rect::new(0, 0, 10, 3),
            dropdown: Some(Rect::new(0, 3, 40, 6)),
        }));

        hub.dispatch(Position::new(30, 5));
        assert!(ta.is_open());

        hub.dispatch(Position::new(30, 1));
        assert!(!ta.is_open());
    }

    #[test]
    fn test_pointer_down_without_region_closes() {
        let hub = PointerHub::new();
        let mut ta = opened(three_cables(), "c");
        ta.mount(&hub);

        hub.dispatch(Position::new(0, 0));

        assert!(!ta.is_open());
    }

    #[test]
    fn test_mount_is_idempotent() {
        let hub = PointerHub::new();
        let mut ta = typeahead(three_cables());

        ta.mount(&hub);
        ta.mount(&hub);

        assert!(ta.is_mounted());
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn test_unmount_releases_listener() {
        let hub = PointerHub::new();
        let mut ta = opened(three_cables(), "c");
        ta.mount(&hub);

        ta.unmount();
        hub.dispatch(Position::new(100, 100));

        assert!(!ta.is_mounted());
        assert_eq!(hub.listener_count(), 0);
        assert!(ta.is_open());
    }

    #[test]
    fn test_drop_releases_listener() {
        let hub = PointerHub::new();
        {
            let mut ta = typeahead(three_cables());
            ta.mount(&hub);
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_panic_unwind_releases_listener() {
        let hub = PointerHub::new();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut ta = typeahead(three_cables());
            ta.mount(&hub);
            panic!("host blew up while the typeahead was mounted");
        }));

        assert!(result.is_err());
        assert_eq!(hub.listener_count(), 0);
    }
}
