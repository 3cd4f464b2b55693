use tracker_core::gating::selectable_repositories;
use tracker_core::model::{RepoId, Stage, StageId};

use super::progress_vm::ProgressBarVm;

/// One button in a stage's repository list.
#[derive(Clone, Debug, PartialEq)]
pub struct RepoEntryVm {
    pub id: RepoId,
    pub title: String,
    /// `completed/total`
    pub counts: String,
    pub active: bool,
    pub disabled: bool,
}

impl RepoEntryVm {
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("repo-entry");
        if self.active {
            class.push_str(" active");
        }
        if self.disabled {
            class.push_str(" disabled");
        }
        class
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageListItemVm {
    pub id: StageId,
    pub title: String,
    pub description: String,
    pub bar: ProgressBarVm,
    pub repos: Vec<RepoEntryVm>,
}

/// Map stages to list rows, applying the sequential unlock rule per stage.
#[must_use]
pub fn map_stage_list(stages: &[Stage], selected: Option<&RepoId>) -> Vec<StageListItemVm> {
    stages
        .iter()
        .map(|stage| {
            let repos = stage
                .repositories
                .iter()
                .zip(selectable_repositories(stage))
                .map(|(repo, selectable)| RepoEntryVm {
                    id: repo.id.clone(),
                    title: repo.title.clone(),
                    counts: format!("{}/{}", repo.progress.completed, repo.progress.total),
                    active: selected == Some(&repo.id),
                    disabled: !selectable,
                })
                .collect();
            StageListItemVm {
                id: stage.id.clone(),
                title: stage.title.clone(),
                description: stage.description.clone().unwrap_or_default(),
                bar: ProgressBarVm::from_percent(stage.progress.percent),
                repos,
            }
        })
        .collect()
}
