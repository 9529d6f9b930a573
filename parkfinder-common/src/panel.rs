/// Observable state of one filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    /// Open with an empty search box (full option list visible)
    OpenEmptySearch,
    /// Open with search text narrowing the list
    OpenSearching,
}

/// Transient per-instance UI state of a filter panel.
///
/// Selection is not stored here; its owner passes it in on every render.
/// Search text survives closing and reopening and is only reset by
/// `clear_search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    open: bool,
    search: String,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Trigger activation.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Apply an open state reported by the popover (light dismiss, Escape).
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Whether the clear affordance is shown.
    pub fn can_clear(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn state(&self) -> PanelState {
        match (self.open, self.search.is_empty()) {
            (false, _) => PanelState::Closed,
            (true, true) => PanelState::OpenEmptySearch,
            (true, false) => PanelState::OpenSearching,
        }
    }
}
