use dioxus::prelude::*;
use services::TrackerError;
use tracker_core::gating::is_repository_selectable;
use tracker_core::model::{RepoId, TaskId};

use crate::views::ViewError;
use crate::vm::{PanelId, SubmitBlocked};

use super::state::{DashboardServices, DashboardState};

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardIntent {
    SelectRepo(RepoId),
    ToggleTaskForm(TaskId),
    EditLink(TaskId, String),
    SubmitLink { repo_id: RepoId, task_id: TaskId },
    CancelLink(TaskId),
    TogglePanel(PanelId),
    ClosePanel,
    DismissNotice,
    SetChecklistItem { title: String, checked: bool },
    OpenLink(String),
}

#[derive(Clone, Copy)]
pub struct DashboardDispatcher {
    pub dispatch: Callback<DashboardIntent>,
    pub on_key: Callback<Key>,
}

pub fn use_dashboard_dispatcher(
    state: DashboardState,
    services: &DashboardServices,
) -> DashboardDispatcher {
    let services = services.clone();
    let dispatch = use_callback(move |intent: DashboardIntent| {
        dispatch_intent(intent, state, &services);
    });
    let on_key = use_callback(move |key: Key| {
        if key == Key::Escape {
            dispatch.call(DashboardIntent::ClosePanel);
        }
    });
    DashboardDispatcher { dispatch, on_key }
}

fn dispatch_intent(intent: DashboardIntent, state: DashboardState, services: &DashboardServices) {
    match intent {
        DashboardIntent::SelectRepo(repo_id) => select_repo(state, repo_id),
        DashboardIntent::ToggleTaskForm(task_id) => {
            let expanded = state.update_form(&task_id, |form| {
                form.toggle();
                form.expanded
            });
            if expanded {
                state.request_focus(&task_id);
            }
        }
        DashboardIntent::EditLink(task_id, value) => {
            state.update_form(&task_id, |form| form.edit(value));
        }
        DashboardIntent::SubmitLink { repo_id, task_id } => {
            submit_link(state, services, repo_id, task_id);
        }
        DashboardIntent::CancelLink(task_id) => {
            state.update_form(&task_id, |form| form.cancel());
        }
        DashboardIntent::TogglePanel(panel) => {
            let mut panels = state.panels;
            panels.write().toggle(panel);
        }
        DashboardIntent::ClosePanel => {
            let mut panels = state.panels;
            if panels.peek().overlay_visible() {
                panels.write().close_active();
            }
        }
        DashboardIntent::DismissNotice => {
            let mut notice = state.notice;
            notice.set(None);
        }
        DashboardIntent::SetChecklistItem { title, checked } => {
            set_checklist_item(state, services, title, checked);
        }
        DashboardIntent::OpenLink(url) => services.link_opener.open_url(&url),
    }
}

fn select_repo(state: DashboardState, repo_id: RepoId) {
    let selectable = state.summary.peek().as_ref().is_some_and(|summary| {
        summary.stages.iter().any(|stage| {
            stage
                .repositories
                .iter()
                .position(|repo| repo.id == repo_id)
                .is_some_and(|index| is_repository_selectable(stage, index))
        })
    });
    if !selectable {
        tracing::debug!(%repo_id, "ignoring selection of locked repository");
        return;
    }
    let mut selected_repo = state.selected_repo;
    selected_repo.set(Some(repo_id));
}

fn submit_link(
    state: DashboardState,
    services: &DashboardServices,
    repo_id: RepoId,
    task_id: TaskId,
) {
    let link = match state.update_form(&task_id, |form| form.begin_submit()) {
        Ok(link) => link,
        Err(SubmitBlocked::EmptyLink) => {
            state.request_focus(&task_id);
            return;
        }
        Err(SubmitBlocked::InFlight) => return,
    };

    let tracker = services.tracker.clone();
    spawn(async move {
        match tracker.complete_task(&repo_id, &task_id, link.as_str()).await {
            Ok(summary) => {
                state.clear_form(&task_id);
                state.apply_summary(summary);
            }
            Err(TrackerError::Reload(_)) => {
                state.update_form(&task_id, |form| form.finish_failed());
                state.mark_load_failed();
            }
            Err(TrackerError::EmptyLink(_)) => {
                state.update_form(&task_id, |form| form.finish_failed());
            }
            Err(_) => {
                state.update_form(&task_id, |form| form.finish_failed());
                let mut notice = state.notice;
                notice.set(Some(ViewError::UpdateFailed));
            }
        }
    });
}

fn set_checklist_item(
    state: DashboardState,
    services: &DashboardServices,
    title: String,
    checked: bool,
) {
    let mut checklist = state.checklist;
    checklist.write().set(title.clone(), checked);

    let service = services.checklist.clone();
    spawn(async move {
        match service.toggle(&title, checked).await {
            Ok(stored) => {
                let saved = stored.is_checked(&title);
                checklist.write().set(title, saved);
            }
            Err(err) => {
                tracing::warn!(error = %err, %title, "checklist entry not saved");
                checklist.write().set(title, !checked);
            }
        }
    });
}
