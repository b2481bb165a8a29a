//! Shared request state.

use roster_ingest::RecordLoader;
use roster_model::Record;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Read-only state shared by all handlers.
///
/// Holds only the loader configuration; the roster itself is re-read on every
/// request and never shared between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    loader: RecordLoader,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            loader: RecordLoader::new(config.source.clone()),
        }
    }

    /// Loads the roster on the blocking pool.
    pub async fn load_roster(&self) -> Result<Vec<Record>, ServerError> {
        let loader = self.loader.clone();
        let records = tokio::task::spawn_blocking(move || loader.load()).await??;
        Ok(records)
    }
}
