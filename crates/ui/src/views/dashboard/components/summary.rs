use dioxus::prelude::*;

use crate::vm::SummaryVm;

use super::ProgressBar;

#[component]
pub fn SummaryCard(heading: String, dom_id: String, vm: SummaryVm) -> Element {
    let body = match vm {
        SummaryVm::Placeholder(message) => rsx! {
            p { "{message}" }
        },
        SummaryVm::Card(card) => rsx! {
            div { class: "progress-card",
                p { "{card.title}" }
                ProgressBar { bar: card.bar }
                small { "{card.counts}" }
            }
        },
    };

    rsx! {
        section { class: "summary-section",
            h3 { "{heading}" }
            div { id: "{dom_id}", {body} }
        }
    }
}
