use serde::{Deserialize, Serialize};

use crate::model::ids::{RepoId, StageId, TaskId};
use crate::model::progress::ProgressMetrics;
use crate::percent::deserialize_lenient;

/// A single completable unit. `completed` and `enabled` are decided by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ordering: i64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub link: Option<String>,
}

impl Task {
    /// Whether the UI may offer the "mark complete" action.
    #[must_use]
    pub fn can_complete(&self) -> bool {
        !self.completed && self.enabled
    }

    /// The submitted link, ignoring empty strings.
    #[must_use]
    pub fn submitted_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|link| !link.is_empty())
    }
}

/// A gated unit of work inside a stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: RepoId,
    /// Back reference to the owning stage. Lookup only.
    pub stage_id: StageId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ordering: i64,
    #[serde(default)]
    pub progress: ProgressMetrics,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Repository {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }
}

/// A curriculum phase. Stages arrive in the order they must be worked through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ordering: i64,
    #[serde(default)]
    pub progress: ProgressMetrics,
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

impl Stage {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }

    #[must_use]
    pub fn repository(&self, id: &RepoId) -> Option<&Repository> {
        self.repositories.iter().find(|repo| &repo.id == id)
    }
}

/// Full response of `GET /api/v1/progress`.
///
/// The client treats this as an immutable snapshot: every fetch replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub overall_progress: f64,
}
