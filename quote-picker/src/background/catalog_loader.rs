use crate::catalog;
use crate::events::DataEvent;
use std::path::PathBuf;
use tokio::sync::mpsc;
use typeahead::TypeaheadConfig;

/// Reads the catalog file off the UI task and reports the result as a DataEvent
#[derive(Clone)]
pub struct CatalogLoader {
    pub path: PathBuf,
    /// Supplies the field selectors every entry is checked against
    pub config: TypeaheadConfig,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl CatalogLoader {
    pub fn new(
        path: PathBuf,
        config: TypeaheadConfig,
        data_tx: mpsc::UnboundedSender<DataEvent>,
    ) -> Self {
        Self {
            path,
            config,
            data_tx,
        }
    }

    pub async fn load_catalog(&self) {
        tracing::info!("Loading catalog from {}", self.path.display());

        let event = match catalog::read_catalog(&self.path, self.config.selectors()).await {
            Ok(records) => {
                tracing::debug!("Parsed {} catalog entries", records.len());
                DataEvent::CatalogLoaded { records }
            }
            Err(e) => {
                tracing::error!("Failed to load catalog: {}", e);
                DataEvent::CatalogLoadFailed {
                    error: e.to_string(),
                }
            }
        };

        // Receiver gone means the app is shutting down
        let _ = self.data_tx.send(event);
    }
}
