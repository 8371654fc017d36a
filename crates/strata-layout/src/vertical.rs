//! Vertical tab list view model
//!
//! Derived from the tab list on every layout update; never patched in place.

use serde::Serialize;

/// Label of the trailing new-tab control.
pub const NEW_TAB_LABEL: &str = "+ New Tab";

/// One tab as the strip presents it. Clicking the entry activates the tab,
/// clicking its close control closes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripItem {
    pub tab_id: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerticalStrip {
    pub entries: Vec<StripItem>,
    /// Trailing control that opens a tab
    pub new_tab_label: &'static str,
    /// Bumped on every rebuild so hosts know to re-render
    pub revision: u64,
}

impl VerticalStrip {
    pub fn build(items: impl IntoIterator<Item = StripItem>, revision: u64) -> Self {
        Self {
            entries: items.into_iter().collect(),
            new_tab_label: NEW_TAB_LABEL,
            revision,
        }
    }

    pub fn active_entry(&self) -> Option<&StripItem> {
        self.entries.iter().find(|entry| entry.active)
    }
}
