use tracker_core::model::SubmittedLink;

/// Why a submit click did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Nothing but whitespace was typed; refocus the input.
    EmptyLink,
    /// This row already has a request in flight.
    InFlight,
}

/// Inline link form attached to a task row.
///
/// `Closed → Composing → Submitting → (reset on success | Composing on failure)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFormState {
    pub expanded: bool,
    pub draft: String,
    pub submitting: bool,
}

impl TaskFormState {
    /// The "Mark complete" button toggles the form open and closed.
    pub fn toggle(&mut self) {
        if self.submitting {
            return;
        }
        self.expanded = !self.expanded;
    }

    pub fn edit(&mut self, value: String) {
        if self.submitting {
            return;
        }
        self.draft = value;
    }

    /// Validate the draft and enter the submitting state.
    ///
    /// # Errors
    ///
    /// Returns `SubmitBlocked` when the draft is blank or a request is already running.
    pub fn begin_submit(&mut self) -> Result<SubmittedLink, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let link = SubmittedLink::parse(&self.draft).map_err(|_| SubmitBlocked::EmptyLink)?;
        self.submitting = true;
        Ok(link)
    }

    /// Request ended without replacing the rows; keep the draft for a retry.
    pub fn finish_failed(&mut self) {
        self.submitting = false;
    }

    /// Clear the draft and collapse. Ignored while a request is running.
    pub fn cancel(&mut self) {
        if self.submitting {
            return;
        }
        self.draft.clear();
        self.expanded = false;
    }
}
