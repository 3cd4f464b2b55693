use dioxus::prelude::*;

use crate::vm::LinkVm;

/// Anchor for safe links, plain text for anything else.
#[component]
pub fn LinkAnchor(link: LinkVm, label: String, on_open: Callback<String>) -> Element {
    match link.href {
        Some(href) => {
            let target = href.clone();
            rsx! {
                a {
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_open.call(target.clone());
                    },
                    "{label}"
                }
            }
        }
        None => rsx! {
            span { class: "unsafe-link", title: "{link.text}", "{label}" }
        },
    }
}
