use dioxus::prelude::*;

use crate::vm::ChecklistGroupVm;

#[component]
pub fn ChecklistPanelBody(
    groups: Vec<ChecklistGroupVm>,
    on_toggle: Callback<(String, bool)>,
) -> Element {
    rsx! {
        div { id: "coding-checklist",
            for group in groups {
                section { class: "coding-group",
                    h4 { "{group.title}" }
                    ul {
                        for row in group.rows {
                            li { key: "{row.title}",
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: row.checked,
                                        onchange: move |evt: FormEvent| {
                                            on_toggle.call((row.title.to_owned(), evt.checked()));
                                        },
                                    }
                                    "{row.title}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
