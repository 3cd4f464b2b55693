use std::sync::Arc;

use tracker_core::model::{ProgressSummary, RepoId, SubmittedLink, TaskId, TaskProgressUpdate};

use crate::api::ProgressApi;
use crate::error::{ApiError, TrackerError};

/// Fetches the progress hierarchy and applies task completions.
///
/// The backend is the only source of truth: every successful update is followed
/// by a full refetch, and the caller replaces its snapshot with the result.
#[derive(Clone)]
pub struct TrackerService {
    api: Arc<dyn ProgressApi>,
}

impl TrackerService {
    #[must_use]
    pub fn new(api: Arc<dyn ProgressApi>) -> Self {
        Self { api }
    }

    /// Fetch the full hierarchy.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the status is not a success.
    pub async fn load(&self) -> Result<ProgressSummary, ApiError> {
        let summary = self.api.fetch_progress().await.inspect_err(|err| {
            tracing::error!(error = %err, detail = ?err.detail(), "failed to load progress");
        })?;
        tracing::debug!(stages = summary.stages.len(), "progress loaded");
        Ok(summary)
    }

    /// Mark a task complete with `raw_link` as evidence, then refetch.
    ///
    /// No request is made when the trimmed link is empty. At most one attempt is
    /// made per call.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::EmptyLink` for blank input, `TrackerError::Update`
    /// when the post fails, and `TrackerError::Reload` when the post succeeded
    /// but the refetch did not.
    pub async fn complete_task(
        &self,
        repo_id: &RepoId,
        task_id: &TaskId,
        raw_link: &str,
    ) -> Result<ProgressSummary, TrackerError> {
        let link = SubmittedLink::parse(raw_link)?;
        let update = TaskProgressUpdate::complete(link);

        self.api
            .submit_completion(repo_id, task_id, &update)
            .await
            .map_err(|err| {
                tracing::error!(
                    %repo_id,
                    %task_id,
                    error = %err,
                    detail = ?err.detail(),
                    "task update rejected"
                );
                TrackerError::Update(err)
            })?;
        tracing::info!(%repo_id, %task_id, "task marked complete");

        self.load().await.map_err(TrackerError::Reload)
    }

    /// Probe the backend.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the health endpoint cannot be reached.
    pub async fn health(&self) -> Result<String, ApiError> {
        self.api.health().await
    }
}
