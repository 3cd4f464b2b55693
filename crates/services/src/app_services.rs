use std::sync::Arc;

use storage::repository::Storage;

use crate::api::{ApiConfig, HttpProgressApi, ProgressApi};
use crate::checklist_service::ChecklistService;
use crate::error::AppServicesError;
use crate::tracker_service::TrackerService;

/// Assembles app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    tracker: Arc<TrackerService>,
    checklist: Arc<ChecklistService>,
}

impl AppServices {
    /// Build services talking HTTP to `api` and persisting locally in `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, api: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        tracing::info!(api = %api.base_url, "services configured");
        let api: Arc<dyn ProgressApi> = Arc::new(HttpProgressApi::new(api));
        Ok(Self::from_parts(api, storage))
    }

    /// Build services from already constructed parts.
    #[must_use]
    pub fn from_parts(api: Arc<dyn ProgressApi>, storage: Storage) -> Self {
        Self {
            tracker: Arc::new(TrackerService::new(api)),
            checklist: Arc::new(ChecklistService::new(storage.local)),
        }
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }

    #[must_use]
    pub fn checklist(&self) -> Arc<ChecklistService> {
        Arc::clone(&self.checklist)
    }
}
