use dioxus::prelude::*;

use crate::vm::{LinkGroupVm, NO_LINKS};

use super::link_anchor::LinkAnchor;

#[component]
pub fn LinksPanelBody(groups: Vec<LinkGroupVm>, on_open: Callback<String>) -> Element {
    if groups.is_empty() {
        return rsx! {
            div { id: "links-list", p { "{NO_LINKS}" } }
        };
    }

    rsx! {
        div { id: "links-list",
            for group in groups {
                section { class: "links-stage",
                    h4 { "{group.stage_title}" }
                    for entry in group.entries {
                        article { class: "link-entry",
                            div { class: "link-entry-header",
                                p { class: "link-task", "{entry.task_title}" }
                                small { "{entry.repo_title}" }
                            }
                            LinkAnchor {
                                link: entry.link.clone(),
                                label: entry.link.text.clone(),
                                on_open,
                            }
                        }
                    }
                }
            }
        }
    }
}
