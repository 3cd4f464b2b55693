//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;
use tracker_core::model::LinkError;

/// Errors emitted by `ProgressApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("progress API returned status {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        /// `detail` message from the response body, when the backend sent one.
        detail: Option<String>,
    },
    #[error("progress API returned an unreadable body: {0}")]
    Decode(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::HttpStatus { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Errors emitted by `TrackerService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    #[error(transparent)]
    EmptyLink(#[from] LinkError),
    /// The completion post failed. Nothing changed on the client.
    #[error("task update failed: {0}")]
    Update(#[source] ApiError),
    /// The post succeeded but the follow-up fetch failed.
    #[error("reloading progress failed: {0}")]
    Reload(#[source] ApiError),
}

/// Errors emitted by `ChecklistService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChecklistServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
