mod checklist_vm;
mod link_vm;
mod links_vm;
mod panel_vm;
mod progress_vm;
mod repo_vm;
mod stage_vm;
mod summary_vm;
mod task_form_vm;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use checklist_vm::{ChecklistGroupVm, ChecklistRowVm, map_checklist_groups};
pub use link_vm::LinkVm;
pub use links_vm::{LinkEntryVm, LinkGroupVm, NO_LINKS, map_link_groups};
pub use panel_vm::{PanelId, PanelState};
pub use progress_vm::{ProgressBarVm, tasks_complete_label};
pub use repo_vm::{
    NO_REPO_DESCRIPTION, NO_REPO_TITLE, RepoDetailsVm, TaskRowVm, map_repo_details,
    task_input_id,
};
pub use stage_vm::{RepoEntryVm, StageListItemVm, map_stage_list};
pub use summary_vm::{
    NO_REPO_SELECTION, NO_STAGE_SELECTION, ProgressCardVm, STAGE_NOT_FOUND, SummaryVm,
    map_repo_summary, map_stage_summary,
};
pub use task_form_vm::{SubmitBlocked, TaskFormState};
