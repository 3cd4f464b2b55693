use tracker_core::model::{Repository, Stage};

use super::progress_vm::{ProgressBarVm, tasks_complete_label};

pub const NO_STAGE_SELECTION: &str = "Select a repository to view its stage.";
pub const STAGE_NOT_FOUND: &str = "Stage not found.";
pub const NO_REPO_SELECTION: &str = "Select a repository to view its metrics.";

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressCardVm {
    pub title: String,
    pub bar: ProgressBarVm,
    pub counts: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SummaryVm {
    Placeholder(&'static str),
    Card(ProgressCardVm),
}

/// Card for the stage owning the resolved repository.
#[must_use]
pub fn map_stage_summary(stages: &[Stage], repo: Option<&Repository>) -> SummaryVm {
    let Some(repo) = repo else {
        return SummaryVm::Placeholder(NO_STAGE_SELECTION);
    };
    let Some(stage) = stages.iter().find(|stage| stage.id == repo.stage_id) else {
        return SummaryVm::Placeholder(STAGE_NOT_FOUND);
    };
    SummaryVm::Card(ProgressCardVm {
        title: stage.title.clone(),
        bar: ProgressBarVm::from_percent(stage.progress.percent),
        counts: tasks_complete_label(&stage.progress),
    })
}

/// Card for the resolved repository itself.
#[must_use]
pub fn map_repo_summary(repo: Option<&Repository>) -> SummaryVm {
    let Some(repo) = repo else {
        return SummaryVm::Placeholder(NO_REPO_SELECTION);
    };
    SummaryVm::Card(ProgressCardVm {
        title: repo.title.clone(),
        bar: ProgressBarVm::from_percent(repo.progress.percent),
        counts: tasks_complete_label(&repo.progress),
    })
}
