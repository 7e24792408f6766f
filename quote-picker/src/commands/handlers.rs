use crate::events::AppCommand;
use crate::state::AppState;
use typeahead::{Key, KeyEvent};

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 1: Ctrl shortcuts never reach the search field
    if event.modifiers.ctrl {
        return match key {
            Key::Char('c') => Some(AppCommand::Quit),
            Key::Char('l') => Some(AppCommand::ClearQuery),
            Key::Char('d') => Some(AppCommand::RemoveLastLine),
            Key::Char('t') => Some(AppCommand::ToggleIgv),
            Key::Char('r') => Some(AppCommand::LoadCatalog),
            _ => None,
        };
    }

    // Priority 2: Esc with the dropdown already closed clears the search
    if matches!(key, Key::Esc) && !state.typeahead.is_open() {
        return Some(AppCommand::ClearQuery);
    }

    match key {
        // Navigation keys go to the typeahead first
        Key::Up | Key::Down | Key::Enter | Key::Esc => Some(AppCommand::OfferKey(key)),

        // Text editing
        Key::Backspace => Some(AppCommand::DeleteQueryChar),
        Key::Char(c) => Some(AppCommand::AppendQueryChar(c)),

        _ => None,
    }
}
