mod hierarchy;
mod ids;
mod link;
mod progress;

pub use hierarchy::{ProgressSummary, Repository, Stage, Task};
pub use ids::{RepoId, StageId, TaskId};
pub use link::{LinkError, SubmittedLink, TaskProgressUpdate, safe_href};
pub use progress::ProgressMetrics;
