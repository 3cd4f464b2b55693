use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LinkError {
    #[error("link cannot be empty")]
    Empty,
}

/// Evidence link typed by the user, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedLink(String);

impl SubmittedLink {
    /// Trim and validate raw input.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Empty` when nothing but whitespace was entered.
    pub fn parse(raw: &str) -> Result<Self, LinkError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LinkError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Body of `POST /api/v1/progress/{repo_id}/{task_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProgressUpdate {
    pub completed: bool,
    pub link: String,
}

impl TaskProgressUpdate {
    #[must_use]
    pub fn complete(link: SubmittedLink) -> Self {
        Self {
            completed: true,
            link: link.into_inner(),
        }
    }
}

/// Return the link if it is safe to use as an anchor target (`http`/`https` only).
#[must_use]
pub fn safe_href(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url.into()),
        _ => None,
    }
}
