use super::{AppState, LoadingState};
use crate::events::DataEvent;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::CatalogLoaded { records } => {
            tracing::info!("Catalog loaded with {} entries", records.len());
            state.status = Some(format!("Loaded {} catalog entries", records.len()));
            state.typeahead.set_candidates(records);
            state.catalog_loading = LoadingState::Loaded;
        }

        // Keep whatever catalog is already loaded
        DataEvent::CatalogLoadFailed { error } => {
            tracing::error!("Catalog load failed: {}", error);
            state.status = Some(format!("Could not load catalog: {}", error));
            state.catalog_loading = LoadingState::Error(error);
        }
    }
}
