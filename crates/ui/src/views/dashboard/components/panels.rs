use dioxus::prelude::*;

use crate::vm::PanelId;

#[component]
pub fn SlidePanel(panel: PanelId, open: bool, on_close: Callback<()>, children: Element) -> Element {
    rsx! {
        aside {
            id: "{panel.dom_id()}",
            class: if open { "slide-panel open" } else { "slide-panel" },
            header { class: "slide-panel-header",
                h3 { "{panel.title()}" }
                button {
                    r#type: "button",
                    class: "close-panel",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div { class: "slide-panel-body", {children} }
        }
    }
}

#[component]
pub fn PanelOverlay(visible: bool, on_close: Callback<()>) -> Element {
    rsx! {
        div {
            id: "panel-overlay",
            class: if visible { "panel-overlay visible" } else { "panel-overlay" },
            onclick: move |_| on_close.call(()),
        }
    }
}
