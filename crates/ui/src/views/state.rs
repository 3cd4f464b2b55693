/// Failures the dashboard surfaces to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Fetching the progress hierarchy failed.
    LoadFailed,
    /// The backend rejected a task completion.
    UpdateFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::LoadFailed => "Unable to load data.",
            ViewError::UpdateFailed => "Could not update task. Ensure prerequisites are met.",
        }
    }
}

/// Status of the most recent hierarchy fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(ViewError),
}
