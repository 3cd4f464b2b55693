use dioxus::prelude::*;
use tracker_core::checklist::CODING_CHECKLIST;
use tracker_core::gating::resolve_selected_repo;
use tracker_core::model::RepoId;
use tracker_core::percent::format_percent;

use crate::context::AppContext;
use crate::vm::{
    PanelId, map_checklist_groups, map_link_groups, map_repo_details, map_repo_summary,
    map_stage_list, map_stage_summary, task_input_id,
};

use super::actions::{DashboardIntent, use_dashboard_dispatcher};
use super::components::{
    ChecklistPanelBody, LinksPanelBody, NoticeModal, PanelOverlay, RepoDetails, SlidePanel,
    StageList, SummaryCard,
};
use super::scripts::focus_element;
use super::state::{DashboardServices, use_dashboard_state};

const DASHBOARD_ROOT_ID: &str = "dashboard";

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = DashboardServices {
        tracker: ctx.tracker(),
        checklist: ctx.checklist(),
        link_opener: ctx.link_opener(),
    };
    let state = use_dashboard_state();
    let dispatcher = use_dashboard_dispatcher(state, &services);
    let dispatch = dispatcher.dispatch;

    let tracker = services.tracker.clone();
    let _initial_load = use_resource(move || {
        let tracker = tracker.clone();
        async move {
            match tracker.load().await {
                Ok(summary) => state.apply_summary(summary),
                Err(_) => state.mark_load_failed(),
            }
        }
    });

    let checklist_service = services.checklist.clone();
    let _checklist_load = use_resource(move || {
        let checklist_service = checklist_service.clone();
        let mut checklist = state.checklist;
        async move {
            let stored = checklist_service.load().await;
            checklist.set(stored);
        }
    });

    // Escape is handled on the root, so it starts out focused.
    use_effect(|| focus_element(DASHBOARD_ROOT_ID));

    let mut focus_task = state.focus_task;
    use_effect(move || {
        let Some(task_id) = focus_task() else {
            return;
        };
        focus_task.set(None);
        focus_element(&task_input_id(&task_id));
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DashboardTestHandles>() {
                handles.register(dispatcher, state);
            }
        }
    }

    let load_state = *state.load_state.read();
    let panels = *state.panels.read();
    let notice = *state.notice.read();

    let (overall, stage_items, details, stage_summary, repo_summary, link_groups) = {
        let summary = state.summary.read();
        let selected = state.selected_repo.read();
        let forms = state.task_forms.read();
        let stages = summary.as_ref().map_or(&[][..], |s| s.stages.as_slice());
        let resolved = resolve_selected_repo(stages, selected.as_ref());
        (
            format_percent(summary.as_ref().map_or(0.0, |s| s.overall_progress)),
            map_stage_list(stages, selected.as_ref()),
            map_repo_details(resolved, &forms),
            map_stage_summary(stages, resolved),
            map_repo_summary(resolved),
            map_link_groups(stages),
        )
    };
    let checklist_groups = map_checklist_groups(CODING_CHECKLIST, &state.checklist.read());

    rsx! {
        div {
            id: DASHBOARD_ROOT_ID,
            class: "dashboard",
            tabindex: "0",
            onkeydown: move |evt: KeyboardEvent| dispatcher.on_key.call(evt.data.key()),
            header { class: "dashboard-header",
                div {
                    h1 { "Stage Tracker" }
                    p { class: "overall-progress",
                        "Overall progress: "
                        span { id: "overall-progress-value", "{overall}" }
                    }
                }
                nav { class: "panel-triggers",
                    for panel in PanelId::ALL {
                        button {
                            key: "{panel.dom_id()}",
                            r#type: "button",
                            class: if panels.is_open(panel) { "panel-trigger active" } else { "panel-trigger" },
                            "data-panel-trigger": "{panel.dom_id()}",
                            onclick: move |_| dispatch.call(DashboardIntent::TogglePanel(panel)),
                            "{panel.title()}"
                        }
                    }
                }
            }
            main { class: "dashboard-body",
                aside { class: "stage-column",
                    StageList {
                        items: stage_items,
                        load_state,
                        on_select: move |repo_id: RepoId| dispatch.call(DashboardIntent::SelectRepo(repo_id)),
                    }
                }
                div { class: "detail-column",
                    RepoDetails { vm: details, dispatch }
                }
                div { class: "summary-column",
                    SummaryCard {
                        heading: "Stage progress",
                        dom_id: "stage-progress",
                        vm: stage_summary,
                    }
                    SummaryCard {
                        heading: "Repository progress",
                        dom_id: "repo-progress",
                        vm: repo_summary,
                    }
                }
            }
            PanelOverlay {
                visible: panels.overlay_visible(),
                on_close: move |()| dispatch.call(DashboardIntent::ClosePanel),
            }
            SlidePanel {
                panel: PanelId::Links,
                open: panels.is_open(PanelId::Links),
                on_close: move |()| dispatch.call(DashboardIntent::ClosePanel),
                LinksPanelBody {
                    groups: link_groups,
                    on_open: move |url: String| dispatch.call(DashboardIntent::OpenLink(url)),
                }
            }
            SlidePanel {
                panel: PanelId::Checklist,
                open: panels.is_open(PanelId::Checklist),
                on_close: move |()| dispatch.call(DashboardIntent::ClosePanel),
                ChecklistPanelBody {
                    groups: checklist_groups,
                    on_toggle: move |(title, checked): (String, bool)| {
                        dispatch.call(DashboardIntent::SetChecklistItem { title, checked });
                    },
                }
            }
            if let Some(error) = notice {
                NoticeModal {
                    error,
                    on_dismiss: move |()| dispatch.call(DashboardIntent::DismissNotice),
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DashboardTestHandles {
    dispatcher: std::rc::Rc<std::cell::RefCell<Option<super::actions::DashboardDispatcher>>>,
    state: std::rc::Rc<std::cell::RefCell<Option<super::state::DashboardState>>>,
}

#[cfg(test)]
impl DashboardTestHandles {
    pub(crate) fn register(
        &self,
        dispatcher: super::actions::DashboardDispatcher,
        state: super::state::DashboardState,
    ) {
        *self.dispatcher.borrow_mut() = Some(dispatcher);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatcher(&self) -> super::actions::DashboardDispatcher {
        (*self.dispatcher.borrow()).expect("dashboard dispatch registered")
    }

    pub(crate) fn state(&self) -> super::state::DashboardState {
        (*self.state.borrow()).expect("dashboard state registered")
    }
}
