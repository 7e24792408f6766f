use crate::background::{catalog_loader::CatalogLoader, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::{AppState, LoadingState};
use ratatui::layout::Position;
use throbber_widgets_tui::ThrobberState;
use typeahead::{Candidate, Record, TypeaheadEvent};

/// Execute a command, spawning background tasks where it needs I/O
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    catalog_loader: &CatalogLoader,
) {
    match command {
        AppCommand::LoadCatalog => {
            state.catalog_loading = LoadingState::Loading(ThrobberState::default());

            let catalog_loader = catalog_loader.clone();
            let future = async move {
                catalog_loader.load_catalog().await;
            };

            task_manager.spawn_load_task("load_catalog".to_string(), future);
        }
        command => execute_command_sync(command, state),
    }
}

/// Execute a command without spawning tasks
///
/// Used directly by tests; production routes everything except loading here.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    match command {
        AppCommand::Quit => state.should_quit = true,

        // Query editing
        AppCommand::AppendQueryChar(c) => {
            let mut text = state.query.clone();
            text.push(c);
            edit_query(state, text);
        }
        AppCommand::DeleteQueryChar => {
            let mut text = state.query.clone();
            if text.pop().is_some() {
                edit_query(state, text);
            }
        }
        AppCommand::ClearQuery => {
            // Host-side reset: the typeahead drops its highlight when it sees the new query
            state.query.clear();
        }

        // Typeahead
        AppCommand::OfferKey(key) => {
            let response = state.typeahead.on_key_down(key, &state.query);
            if let Some(event) = response.event {
                apply_typeahead_event(state, event);
            }
        }
        AppCommand::PointerDown(position) => handle_pointer_down(state, position),

        // Quote
        AppCommand::RemoveLastLine => {
            state.status = match state.quote.remove_last() {
                Some(line) => Some(format!("Removed {}", line.code)),
                None => Some("Quote is empty".to_string()),
            };
        }
        AppCommand::ToggleIgv => {
            state.quote.include_igv = !state.quote.include_igv;
            tracing::debug!("IGV included: {}", state.quote.include_igv);
        }

        // Data loading (no task; tests inject the result as a DataEvent)
        AppCommand::LoadCatalog => {
            state.catalog_loading = LoadingState::Loading(ThrobberState::default());
        }
    }
}

/// Route a text edit through the typeahead and adopt the query it hands back
fn edit_query(state: &mut AppState, text: String) {
    if !state.typeahead.is_focused() {
        state.typeahead.on_focus(&state.query);
    }
    let event = state.typeahead.on_text_input(text);
    apply_typeahead_event(state, event);
}

fn apply_typeahead_event(state: &mut AppState, event: TypeaheadEvent<Record>) {
    match event {
        TypeaheadEvent::Changed(query) => state.query = query,
        TypeaheadEvent::Selected(record) => add_to_quote(state, &record),
    }
}

fn add_to_quote(state: &mut AppState, record: &Record) {
    let selectors = state.typeahead.config().selectors();
    let Some(line) = state.quote.add(record, selectors) else {
        tracing::warn!("Selected candidate has no code, not quoted");
        return;
    };

    tracing::info!("Quoted {} (quantity {})", line.code, line.quantity);
    let added = format!("Added {} - {}", line.code, line.label);
    let related = record.related_codes();
    state.status = Some(if related.is_empty() {
        added
    } else {
        format!("{}. Requiere: {}", added, related.join(", "))
    });

    state.query.clear();
}

/// Pointer-down: outside-click listeners first, then hit-test the last render
fn handle_pointer_down(state: &mut AppState, position: Position) {
    state.pointer_hub.dispatch(position);

    let layout = state.layout.borrow().clone();
    if let Some(row) = layout.row_at(position) {
        if let Some(event) = state.typeahead.on_pointer_select(row, &state.query) {
            apply_typeahead_event(state, event);
        }
    } else if layout.input_contains(position) {
        state.typeahead.on_focus(&state.query);
    } else {
        state.typeahead.on_blur();
    }
}
