use dioxus::prelude::*;
use tracker_core::model::RepoId;

use crate::views::dashboard::actions::DashboardIntent;
use crate::vm::{RepoDetailsVm, TaskRowVm};

use super::link_anchor::LinkAnchor;

#[component]
pub fn RepoDetails(vm: RepoDetailsVm, dispatch: Callback<DashboardIntent>) -> Element {
    rsx! {
        section { class: "repo-details",
            h2 { id: "repo-title", "{vm.title}" }
            p { id: "repo-description", "{vm.description}" }
            ul { id: "task-list", class: "task-list",
                if let Some(repo_id) = vm.repo_id {
                    for task in vm.tasks {
                        TaskRow {
                            key: "{task.id}",
                            repo_id: repo_id.clone(),
                            task,
                            dispatch,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TaskRow(repo_id: RepoId, task: TaskRowVm, dispatch: Callback<DashboardIntent>) -> Element {
    let task_id = task.id.clone();
    let on_action = {
        let task_id = task_id.clone();
        move |_: MouseEvent| dispatch.call(DashboardIntent::ToggleTaskForm(task_id.clone()))
    };
    let on_input = {
        let task_id = task_id.clone();
        move |evt: FormEvent| dispatch.call(DashboardIntent::EditLink(task_id.clone(), evt.value()))
    };
    let on_submit = {
        let task_id = task_id.clone();
        move |_: MouseEvent| {
            dispatch.call(DashboardIntent::SubmitLink {
                repo_id: repo_id.clone(),
                task_id: task_id.clone(),
            });
        }
    };
    let on_cancel =
        move |_: MouseEvent| dispatch.call(DashboardIntent::CancelLink(task_id.clone()));
    let on_open = move |url: String| dispatch.call(DashboardIntent::OpenLink(url));
    let submitted = task.link.clone();

    rsx! {
        li {
            class: if task.expanded { "task-item expanded" } else { "task-item" },
            "data-task-id": "{task.id}",
            div { class: "task-meta",
                strong { "{task.title}" }
                p { "{task.description}" }
                if let Some(link) = submitted {
                    LinkAnchor { link, label: "View submitted link", on_open }
                }
            }
            button {
                r#type: "button",
                class: "task-action",
                disabled: task.action_disabled,
                onclick: on_action,
                "{task.action_label}"
            }
            if task.expanded {
                div { class: "link-form",
                    input {
                        id: "{task.input_id}",
                        r#type: "url",
                        name: "task-link",
                        placeholder: "Paste link to your work",
                        value: "{task.draft}",
                        disabled: task.busy,
                        oninput: on_input,
                    }
                    div { class: "form-actions",
                        button {
                            r#type: "button",
                            class: "submit-link",
                            disabled: task.busy,
                            onclick: on_submit,
                            "Submit"
                        }
                        button {
                            r#type: "button",
                            class: "cancel-link",
                            disabled: task.busy,
                            onclick: on_cancel,
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
