use dioxus::prelude::*;

use crate::vm::ProgressBarVm;

#[component]
pub fn ProgressBar(bar: ProgressBarVm) -> Element {
    rsx! {
        div { class: "progress-bar",
            div { class: "progress-bar-fill", style: "{bar.style()}" }
            span { class: "progress-value", "{bar.label}" }
        }
    }
}
