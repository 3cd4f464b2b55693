use std::env;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use tracker_core::model::{ProgressSummary, RepoId, TaskId, TaskProgressUpdate};

use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Backend endpoint consumed by the tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `TRACKER_API_URL`, falling back to the local development server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("TRACKER_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self::new(base_url)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn progress_url(&self) -> String {
        self.endpoint("progress")
    }

    #[must_use]
    pub fn task_url(&self, repo_id: &RepoId, task_id: &TaskId) -> String {
        self.endpoint(&format!("progress/{repo_id}/{task_id}"))
    }

    #[must_use]
    pub fn health_url(&self) -> String {
        self.endpoint("health")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Network boundary to the progress backend.
#[async_trait]
pub trait ProgressApi: Send + Sync {
    /// Fetch the full stage → repository → task hierarchy.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, a non-success status, or an unreadable body.
    async fn fetch_progress(&self) -> Result<ProgressSummary, ApiError>;

    /// Post a completion update for one task. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn submit_completion(
        &self,
        repo_id: &RepoId,
        task_id: &TaskId,
        update: &TaskProgressUpdate,
    ) -> Result<(), ApiError>;

    /// Probe the backend health endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the backend is unreachable or unhealthy.
    async fn health(&self) -> Result<String, ApiError>;
}

#[derive(Clone)]
pub struct HttpProgressApi {
    client: Client,
    config: ApiConfig,
}

impl HttpProgressApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ProgressApi for HttpProgressApi {
    async fn fetch_progress(&self) -> Result<ProgressSummary, ApiError> {
        let url = self.config.progress_url();
        tracing::debug!(%url, "fetching progress");
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn submit_completion(
        &self,
        repo_id: &RepoId,
        task_id: &TaskId,
        update: &TaskProgressUpdate,
    ) -> Result<(), ApiError> {
        let url = self.config.task_url(repo_id, task_id);
        tracing::debug!(%url, completed = update.completed, "posting task progress");
        let response = self.client.post(url).json(update).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn health(&self) -> Result<String, ApiError> {
        let response = self.client.get(self.config.health_url()).send().await?;
        let response = ensure_success(response).await?;
        let body: HealthResponse = response.json().await?;
        Ok(body.status)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response
        .text()
        .await
        .ok()
        .and_then(|body| parse_detail(&body));
    Err(ApiError::HttpStatus { status, detail })
}

/// Extract the `detail` message from an error body, if any.
fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(message) => Some(message),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}
