use std::collections::HashMap;

use tracker_core::model::{RepoId, Repository, Task, TaskId};

use super::link_vm::LinkVm;
use super::task_form_vm::TaskFormState;

pub const NO_REPO_TITLE: &str = "Select a repository";
pub const NO_REPO_DESCRIPTION: &str =
    "Choose a repository from the left panel to see its checklist.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRowVm {
    pub id: TaskId,
    /// DOM id of the link input, used for focusing.
    pub input_id: String,
    pub title: String,
    pub description: String,
    pub link: Option<LinkVm>,
    pub action_label: &'static str,
    pub action_disabled: bool,
    pub expanded: bool,
    pub draft: String,
    /// Submit/Cancel are locked while this row's request runs.
    pub busy: bool,
}

impl TaskRowVm {
    fn new(task: &Task, form: Option<&TaskFormState>) -> Self {
        let form = form.cloned().unwrap_or_default();
        let actionable = task.can_complete();
        Self {
            id: task.id.clone(),
            input_id: task_input_id(&task.id),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            link: task.submitted_link().map(LinkVm::new),
            action_label: if task.completed {
                "Completed"
            } else {
                "Mark complete"
            },
            action_disabled: !actionable,
            expanded: actionable && form.expanded,
            draft: form.draft,
            busy: form.submitting,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoDetailsVm {
    pub repo_id: Option<RepoId>,
    pub title: String,
    pub description: String,
    pub tasks: Vec<TaskRowVm>,
}

#[must_use]
pub fn task_input_id(task_id: &TaskId) -> String {
    format!("task-link-{task_id}")
}

/// Details pane for the resolved repository, or the placeholder when none resolves.
#[must_use]
pub fn map_repo_details(
    repo: Option<&Repository>,
    forms: &HashMap<TaskId, TaskFormState>,
) -> RepoDetailsVm {
    let Some(repo) = repo else {
        return RepoDetailsVm {
            repo_id: None,
            title: NO_REPO_TITLE.to_owned(),
            description: NO_REPO_DESCRIPTION.to_owned(),
            tasks: Vec::new(),
        };
    };

    RepoDetailsVm {
        repo_id: Some(repo.id.clone()),
        title: repo.title.clone(),
        description: repo.description.clone().unwrap_or_default(),
        tasks: repo
            .tasks
            .iter()
            .map(|task| TaskRowVm::new(task, forms.get(&task.id)))
            .collect(),
    }
}
