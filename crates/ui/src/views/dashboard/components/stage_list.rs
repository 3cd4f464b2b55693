use dioxus::prelude::*;
use tracker_core::model::RepoId;

use crate::views::LoadState;
use crate::vm::StageListItemVm;

use super::ProgressBar;

#[component]
pub fn StageList(
    items: Vec<StageListItemVm>,
    load_state: LoadState,
    on_select: Callback<RepoId>,
) -> Element {
    if let LoadState::Failed(error) = load_state {
        return rsx! {
            ul { id: "stage-list", class: "stage-list",
                li { class: "stage-item empty", "{error.message()}" }
            }
        };
    }
    if items.is_empty() {
        return rsx! {
            ul { id: "stage-list", class: "stage-list",
                li { class: "stage-item empty", "Loading checklist…" }
            }
        };
    }

    rsx! {
        ul { id: "stage-list", class: "stage-list",
            for stage in items {
                li { key: "{stage.id}", class: "stage-item",
                    div { class: "stage-heading",
                        div {
                            p { class: "stage-label", "{stage.title}" }
                            small { "{stage.description}" }
                        }
                        ProgressBar { bar: stage.bar.clone() }
                    }
                    div { class: "repo-list",
                        for repo in stage.repos {
                            button {
                                key: "{repo.id}",
                                r#type: "button",
                                class: "{repo.class()}",
                                disabled: repo.disabled,
                                onclick: {
                                    let repo_id = repo.id.clone();
                                    move |_: MouseEvent| on_select.call(repo_id.clone())
                                },
                                span { "{repo.title}" }
                                small { "{repo.counts}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
