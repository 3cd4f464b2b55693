use std::sync::Arc;

use storage::repository::KeyValueRepository;
use tokio::sync::Mutex;
use tracker_core::checklist::{CHECKLIST_STORAGE_KEY, ChecklistState};

use crate::error::ChecklistServiceError;

/// Reads and writes the device-local coding checklist.
#[derive(Clone)]
pub struct ChecklistService {
    repo: Arc<dyn KeyValueRepository>,
    /// Serializes read-modify-write cycles so concurrent toggles never drop each other.
    write_lock: Arc<Mutex<()>>,
}

impl ChecklistService {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            repo,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load persisted state.
    ///
    /// Missing, corrupt, or unreadable data yields an empty state; problems are
    /// only logged.
    pub async fn load(&self) -> ChecklistState {
        let raw = match self.repo.get_item(CHECKLIST_STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return ChecklistState::new(),
            Err(err) => {
                tracing::warn!(error = %err, "checklist storage unreadable");
                return ChecklistState::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "discarding corrupt checklist state");
            ChecklistState::new()
        })
    }

    /// Overwrite the persisted state wholesale.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistServiceError` if encoding or persistence fails.
    pub async fn save(&self, state: &ChecklistState) -> Result<(), ChecklistServiceError> {
        let _guard = self.write_lock.lock().await;
        self.write(state).await
    }

    async fn write(&self, state: &ChecklistState) -> Result<(), ChecklistServiceError> {
        let encoded = serde_json::to_string(state)?;
        self.repo.set_item(CHECKLIST_STORAGE_KEY, &encoded).await?;
        Ok(())
    }

    /// Re-read the stored state, change only `title`, and write it back.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistServiceError` if the write fails.
    pub async fn toggle(
        &self,
        title: &str,
        checked: bool,
    ) -> Result<ChecklistState, ChecklistServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut state = self.load().await;
        state.set(title, checked);
        self.write(&state).await?;
        tracing::debug!(title, checked, "checklist entry updated");
        Ok(state)
    }
}
