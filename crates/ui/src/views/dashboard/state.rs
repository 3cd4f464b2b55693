use std::collections::HashMap;
use std::sync::Arc;

use dioxus::prelude::*;
use services::{ChecklistService, TrackerService};
use tracker_core::checklist::ChecklistState;
use tracker_core::gating::reconcile_selection;
use tracker_core::model::{ProgressSummary, RepoId, TaskId};

use crate::platform::LinkOpenerRef;
use crate::views::{LoadState, ViewError};
use crate::vm::{PanelState, TaskFormState};

#[derive(Clone)]
pub struct DashboardServices {
    pub tracker: Arc<TrackerService>,
    pub checklist: Arc<ChecklistService>,
    pub link_opener: LinkOpenerRef,
}

/// Every piece of dashboard state, as copyable signal handles.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Last successfully fetched hierarchy. Replaced wholesale, never patched.
    pub summary: Signal<Option<ProgressSummary>>,
    pub load_state: Signal<LoadState>,
    pub selected_repo: Signal<Option<RepoId>>,
    pub task_forms: Signal<HashMap<TaskId, TaskFormState>>,
    pub panels: Signal<PanelState>,
    /// Blocking notice shown until dismissed.
    pub notice: Signal<Option<ViewError>>,
    pub checklist: Signal<ChecklistState>,
    /// Row whose link input should take focus after the next render.
    pub focus_task: Signal<Option<TaskId>>,
}

pub fn use_dashboard_state() -> DashboardState {
    DashboardState {
        summary: use_signal(|| None),
        load_state: use_signal(LoadState::default),
        selected_repo: use_signal(|| None),
        task_forms: use_signal(HashMap::new),
        panels: use_signal(PanelState::default),
        notice: use_signal(|| None),
        checklist: use_signal(ChecklistState::new),
        focus_task: use_signal(|| None),
    }
}

impl DashboardState {
    /// Install a freshly fetched snapshot and re-derive everything from it.
    ///
    /// Row forms reset, except those whose request is still in flight.
    pub fn apply_summary(&self, next: ProgressSummary) {
        let mut summary = self.summary;
        let mut load_state = self.load_state;
        let mut selected_repo = self.selected_repo;
        let mut task_forms = self.task_forms;

        let current = selected_repo.peek().clone();
        let reconciled = reconcile_selection(&next.stages, current.as_ref());
        if reconciled != current {
            selected_repo.set(reconciled);
        }
        summary.set(Some(next));
        task_forms.write().retain(|_, form| form.submitting);
        load_state.set(LoadState::Ready);
    }

    /// Flag the fetch as failed; the previous snapshot stays in place.
    pub fn mark_load_failed(&self) {
        let mut load_state = self.load_state;
        load_state.set(LoadState::Failed(ViewError::LoadFailed));
    }

    /// Drop one row's form once its request has finished.
    pub fn clear_form(&self, task_id: &TaskId) {
        let mut task_forms = self.task_forms;
        task_forms.write().remove(task_id);
    }

    pub fn request_focus(&self, task_id: &TaskId) {
        let mut focus_task = self.focus_task;
        focus_task.set(Some(task_id.clone()));
    }

    /// Run `f` on one row's form, creating it on first use.
    pub fn update_form<R>(&self, task_id: &TaskId, f: impl FnOnce(&mut TaskFormState) -> R) -> R {
        let mut task_forms = self.task_forms;
        let mut forms = task_forms.write();
        f(forms.entry(task_id.clone()).or_default())
    }
}
