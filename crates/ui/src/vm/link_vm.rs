use tracker_core::model::safe_href;

/// A user-submitted link. Only web URLs become clickable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkVm {
    pub text: String,
    pub href: Option<String>,
}

impl LinkVm {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.to_owned(),
            href: safe_href(raw),
        }
    }
}
