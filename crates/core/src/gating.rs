//! Sequential unlock rules and selection resolution.
//!
//! Within a stage, repository `n + 1` opens only once every repository before
//! it is complete. Across stages, a selection is honoured only if every stage
//! before the one holding it is complete.

use crate::model::{RepoId, Repository, Stage};

/// One flag per repository of `stage`, in order: `true` when it may be selected.
#[must_use]
pub fn selectable_repositories(stage: &Stage) -> Vec<bool> {
    let mut unlocked = true;
    stage
        .repositories
        .iter()
        .map(|repo| {
            let selectable = unlocked;
            unlocked = unlocked && repo.is_complete();
            selectable
        })
        .collect()
}

/// Whether the repository at `index` inside `stage` may be selected.
#[must_use]
pub fn is_repository_selectable(stage: &Stage, index: usize) -> bool {
    index < stage.repositories.len()
        && stage.repositories[..index]
            .iter()
            .all(Repository::is_complete)
}

/// Resolve the selected repository, stopping at the first incomplete stage.
///
/// A repository in a later stage does not resolve, even if the id exists.
#[must_use]
pub fn resolve_selected_repo<'a>(
    stages: &'a [Stage],
    selected: Option<&RepoId>,
) -> Option<&'a Repository> {
    let selected = selected?;
    for stage in stages {
        if let Some(repo) = stage.repository(selected) {
            return Some(repo);
        }
        if !stage.is_complete() {
            break;
        }
    }
    None
}

/// First repository of the first stage.
#[must_use]
pub fn default_selection(stages: &[Stage]) -> Option<RepoId> {
    stages
        .first()
        .and_then(|stage| stage.repositories.first())
        .map(|repo| repo.id.clone())
}

/// Keep `current` when it still resolves, otherwise fall back to the default.
#[must_use]
pub fn reconcile_selection(stages: &[Stage], current: Option<&RepoId>) -> Option<RepoId> {
    match resolve_selected_repo(stages, current) {
        Some(repo) => Some(repo.id.clone()),
        None => default_selection(stages),
    }
}
