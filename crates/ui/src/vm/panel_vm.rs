/// Slide-in panels that can be opened from the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    Links,
    Checklist,
}

impl PanelId {
    pub const ALL: [PanelId; 2] = [PanelId::Links, PanelId::Checklist];

    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            PanelId::Links => "links-panel",
            PanelId::Checklist => "checklist-panel",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            PanelId::Links => "Submitted links",
            PanelId::Checklist => "Coding checklist",
        }
    }
}

/// At most one panel is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    active: Option<PanelId>,
}

impl PanelState {
    #[must_use]
    pub fn active(self) -> Option<PanelId> {
        self.active
    }

    #[must_use]
    pub fn is_open(self, panel: PanelId) -> bool {
        self.active == Some(panel)
    }

    #[must_use]
    pub fn overlay_visible(self) -> bool {
        self.active.is_some()
    }

    /// Close `panel` if it is active, otherwise make it the only open panel.
    pub fn toggle(&mut self, panel: PanelId) {
        if self.is_open(panel) {
            self.close_active();
            return;
        }
        self.close_active();
        self.active = Some(panel);
    }

    /// Shared close path for the close button, the overlay, and Escape.
    pub fn close_active(&mut self) {
        self.active = None;
    }
}
