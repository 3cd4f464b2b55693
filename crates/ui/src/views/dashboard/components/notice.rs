use dioxus::prelude::*;

use crate::views::ViewError;

/// Blocking notice; nothing behind it is clickable until dismissed.
#[component]
pub fn NoticeModal(error: ViewError, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div { class: "notice-overlay",
            div {
                class: "notice-modal",
                role: "alertdialog",
                onclick: move |evt| evt.stop_propagation(),
                p { class: "notice-body", "{error.message()}" }
                div { class: "notice-actions",
                    button {
                        r#type: "button",
                        class: "btn notice-dismiss",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
