pub mod quote;
pub mod reducer;

use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;
use typeahead::{PointerHub, Record, Typeahead, TypeaheadConfig, TypeaheadLayout};

pub use quote::{format_amount, Quote, QuoteLine};

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

#[derive(Debug)]
pub struct AppState {
    /// Search text; the typeahead only requests changes to it
    pub query: String,
    pub typeahead: Typeahead<Record>,
    /// Receives every pointer-down so the typeahead can notice outside clicks
    pub pointer_hub: PointerHub,
    pub quote: Quote,
    pub catalog_loading: LoadingState,
    /// One-line feedback shown above the help bar
    pub status: Option<String>,
    pub should_quit: bool,
    /// Typeahead geometry from the last render, for mouse hit-testing
    pub layout: RefCell<TypeaheadLayout>,
}

impl AppState {
    pub fn new(config: TypeaheadConfig, include_igv: bool) -> Self {
        let pointer_hub = PointerHub::new();
        let mut typeahead = Typeahead::new(config);
        typeahead.mount(&pointer_hub);
        // The search field is the only input, so it starts focused
        typeahead.on_focus("");

        Self {
            query: String::new(),
            typeahead,
            pointer_hub,
            quote: Quote::new(include_igv),
            catalog_loading: LoadingState::NotStarted,
            status: None,
            should_quit: false,
            layout: RefCell::new(TypeaheadLayout::default()),
        }
    }

    /// Spinner to advance while the catalog loads
    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match &mut self.catalog_loading {
            LoadingState::Loading(throbber_state) => Some(throbber_state),
            _ => None,
        }
    }

    pub fn catalog_size(&self) -> usize {
        self.typeahead.candidates().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TypeaheadConfig::default(), true)
    }
}
