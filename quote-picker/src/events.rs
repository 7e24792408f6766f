use ratatui::layout::Position;
use typeahead::{Key, Record};

/// Commands to execute (user actions → state changes or background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Query editing
    AppendQueryChar(char),
    DeleteQueryChar,
    ClearQuery,

    // Typeahead
    /// Offer a navigation key to the typeahead before the host acts on it
    OfferKey(Key),
    /// Left-button press anywhere on screen
    PointerDown(Position),

    // Quote
    RemoveLastLine,
    ToggleIgv,

    // Data loading
    LoadCatalog,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    CatalogLoaded { records: Vec<Record> },
    CatalogLoadFailed { error: String },
}
