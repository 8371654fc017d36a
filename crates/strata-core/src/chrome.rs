//! Display state written back to the host UI

use serde::Serialize;

use strata_layout::{LayoutMode, StripItem, VerticalStrip};

/// Snapshot of everything the chrome shows. Hosts render from this after
/// each dispatched event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeState {
    /// Address bar text
    pub address_bar: String,
    /// The address bar text should be selected
    pub address_selected: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub active_tab_id: Option<String>,
    pub layout_mode: LayoutMode,
    pub vertical_visible: bool,
    /// Horizontal strip entries, display order
    pub tabs: Vec<StripItem>,
    /// Vertical list, present in vertical mode
    pub vertical: Option<VerticalStrip>,
}
