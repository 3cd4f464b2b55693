use std::sync::Arc;

use services::{ChecklistService, TrackerService};

use crate::platform::LinkOpenerRef;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn tracker(&self) -> Arc<TrackerService>;
    fn checklist(&self) -> Arc<ChecklistService>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    tracker: Arc<TrackerService>,
    checklist: Arc<ChecklistService>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            tracker: app.tracker(),
            checklist: app.checklist(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }

    #[must_use]
    pub fn checklist(&self) -> Arc<ChecklistService> {
        Arc::clone(&self.checklist)
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
