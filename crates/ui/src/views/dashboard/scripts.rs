use dioxus::document::eval;

pub fn focus_element_script(element_id: &str) -> String {
    format!("document.getElementById({element_id:?})?.focus();")
}

pub fn focus_element(element_id: &str) {
    let _ = eval(&focus_element_script(element_id));
}
