//! Tab data structure
//!
//! A tab displays:
//! - Title (best effort, host name when the page hides it)
//! - Active / background state
//!
//! and owns its history and render surface.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use strata_navigation::{host_label, InputResolver, SessionHistory};

use crate::error::{SurfaceError, TabError};
use crate::state::TabState;
use crate::surface::RenderSurface;
use crate::Result;

/// Label shown until a page load reports something better.
pub const NEW_TAB_TITLE: &str = "New Tab";

pub struct Tab {
    /// Unique identifier
    pub id: String,
    /// Current resolved address
    url: String,
    /// Page title, empty until a load completes
    title: String,
    /// Back/forward stack
    history: SessionHistory,
    /// Current state in the state machine
    state: TabState,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last time the tab was activated
    pub last_accessed_at: DateTime<Utc>,
    surface: Box<dyn RenderSurface>,
}

impl Tab {
    /// Create a background tab seeded with an already resolved address.
    /// Nothing is loaded until [`Tab::start`] is called.
    pub fn new(url: String, surface: Box<dyn RenderSurface>) -> Result<Self> {
        if url.is_empty() {
            return Err(TabError::InvalidUrl("URL cannot be empty".to_string()));
        }

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            history: SessionHistory::new(url.clone()),
            url,
            title: String::new(),
            state: TabState::Background,
            created_at: now,
            last_accessed_at: now,
            surface,
        })
    }

    /// Load the seeded address without touching history.
    pub fn start(&mut self) {
        tracing::debug!(tab_id = %self.id, url = %self.url, "Initial load");
        self.surface.load(&self.url);
    }

    /// Navigate to user input. The input is resolved (search or address),
    /// forward history is dropped and the new entry becomes current.
    /// Returns the resolved address.
    pub fn navigate(&mut self, input: &str, resolver: &InputResolver) -> &str {
        let url = resolver.resolve(input).into_url();
        self.history.push(url.clone());
        self.open(url);
        &self.url
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// Load the previous history entry. `None` when already at the start.
    pub fn go_back(&mut self) -> Option<&str> {
        let url = self.history.back()?.to_string();
        self.open(url);
        Some(&self.url)
    }

    /// Load the next history entry. `None` when already at the end.
    pub fn go_forward(&mut self) -> Option<&str> {
        let url = self.history.forward()?.to_string();
        self.open(url);
        Some(&self.url)
    }

    /// Request the current address again.
    pub fn reload(&mut self) {
        tracing::debug!(tab_id = %self.id, url = %self.url, "Reload");
        self.surface.load(&self.url);
    }

    /// The surface finished loading. Picks up the document title, or the
    /// host name when the document can't be read. Returns the new label.
    pub fn on_load_complete(&mut self) -> &str {
        match self.surface.document_title() {
            Ok(Some(title)) if !title.trim().is_empty() => self.title = title,
            Ok(_) => {}
            Err(SurfaceError::CrossOrigin(origin)) => {
                tracing::debug!(tab_id = %self.id, %origin, "Title unreadable, using host");
                self.title = host_label(&self.url);
            }
        }
        self.display_title()
    }

    /// Mark tab as active (user selected it)
    pub fn activate(&mut self) {
        self.transition_to(TabState::Active);
        self.last_accessed_at = Utc::now();
    }

    /// Move tab to background
    pub fn blur(&mut self) {
        self.transition_to(TabState::Background);
    }

    fn transition_to(&mut self, new_state: TabState) {
        if self.state == new_state {
            return;
        }

        tracing::debug!(
            tab_id = %self.id,
            from = %self.state,
            to = %new_state,
            "Tab state transition"
        );

        self.state = new_state;
    }

    fn open(&mut self, url: String) {
        tracing::debug!(tab_id = %self.id, url = %url, "Loading");
        self.url = url;
        self.title = String::new(); // Reset title until page loads
        self.surface.load(&self.url);
    }

    /// Release the render surface. The tab is gone afterwards.
    pub fn dispose(mut self) {
        tracing::debug!(tab_id = %self.id, "Releasing render surface");
        self.surface.release();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get display title (with fallback to the new-tab label)
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            NEW_TAB_TITLE
        } else {
            &self.title
        }
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn state(&self) -> TabState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

impl std::fmt::Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("title", &self.title)
            .field("history", &self.history)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        loads: Vec<String>,
        released: bool,
    }

    struct FakeSurface {
        log: Rc<RefCell<Recorder>>,
        title: std::result::Result<Option<String>, SurfaceError>,
    }

    impl RenderSurface for FakeSurface {
        fn load(&mut self, url: &str) {
            self.log.borrow_mut().loads.push(url.to_string());
        }

        fn document_title(&self) -> std::result::Result<Option<String>, SurfaceError> {
            self.title.clone()
        }

        fn release(&mut self) {
            self.log.borrow_mut().released = true;
        }
    }

    fn tab_with_title(
        title: std::result::Result<Option<String>, SurfaceError>,
    ) -> (Tab, Rc<RefCell<Recorder>>) {
        let log = Rc::new(RefCell::new(Recorder::default()));
        let surface = FakeSurface {
            log: Rc::clone(&log),
            title,
        };
        let tab = Tab::new("https://example.com/".to_string(), Box::new(surface)).unwrap();
        (tab, log)
    }

    fn new_tab() -> (Tab, Rc<RefCell<Recorder>>) {
        tab_with_title(Ok(None))
    }

    #[test]
    fn test_new_tab() {
        let (tab, log) = new_tab();
        assert_eq!(tab.state(), TabState::Background);
        assert_eq!(tab.url(), "https://example.com/");
        assert_eq!(tab.display_title(), NEW_TAB_TITLE);
        assert_eq!(tab.history().len(), 1);
        assert!(log.borrow().loads.is_empty());
    }

    #[test]
    fn test_empty_url_rejected() {
        let log = Rc::new(RefCell::new(Recorder::default()));
        let surface = FakeSurface { log, title: Ok(None) };
        assert!(Tab::new(String::new(), Box::new(surface)).is_err());
    }

    #[test]
    fn test_start_loads_without_history_entry() {
        let (mut tab, log) = new_tab();
        tab.start();
        assert_eq!(log.borrow().loads, vec!["https://example.com/"]);
        assert_eq!(tab.history().len(), 1);
    }

    #[test]
    fn test_navigate_resolves_and_loads() {
        let (mut tab, log) = new_tab();
        let resolver = InputResolver::new();

        assert_eq!(tab.navigate("example.org/page", &resolver), "https://example.org/page");
        assert_eq!(tab.history().current_index(), 1);
        assert_eq!(tab.history().current(), tab.url());
        assert_eq!(log.borrow().loads.last().unwrap(), "https://example.org/page");
        assert!(tab.can_go_back());
        assert!(!tab.can_go_forward());
    }

    #[test]
    fn test_traversal_keeps_forward_entries() {
        let (mut tab, log) = new_tab();
        let resolver = InputResolver::new();
        tab.navigate("a.example/1", &resolver);
        tab.navigate("b.example/2", &resolver);

        assert_eq!(tab.go_back(), Some("https://a.example/1"));
        assert!(tab.can_go_forward());
        assert_eq!(tab.history().len(), 3);

        assert_eq!(tab.go_forward(), Some("https://b.example/2"));
        assert_eq!(tab.go_forward(), None);
        assert_eq!(tab.history().len(), 3);
        assert_eq!(log.borrow().loads.len(), 4);
    }

    #[test]
    fn test_go_back_at_start_is_noop() {
        let (mut tab, log) = new_tab();
        assert_eq!(tab.go_back(), None);
        assert!(log.borrow().loads.is_empty());
    }

    #[test]
    fn test_reload_keeps_history() {
        let (mut tab, log) = new_tab();
        tab.reload();
        tab.reload();
        assert_eq!(log.borrow().loads.len(), 2);
        assert_eq!(tab.history().len(), 1);
        assert_eq!(tab.history().current_index(), 0);
    }

    #[test]
    fn test_title_from_document() {
        let (mut tab, _) = tab_with_title(Ok(Some("Example Domain".to_string())));
        assert_eq!(tab.on_load_complete(), "Example Domain");
    }

    #[test]
    fn test_title_cross_origin_falls_back_to_host() {
        let (mut tab, _) =
            tab_with_title(Err(SurfaceError::CrossOrigin("https://example.com".to_string())));
        assert_eq!(tab.on_load_complete(), "example.com");
    }

    #[test]
    fn test_blank_title_keeps_label() {
        let (mut tab, _) = tab_with_title(Ok(Some("  ".to_string())));
        assert_eq!(tab.on_load_complete(), NEW_TAB_TITLE);
    }

    #[test]
    fn test_state_transitions() {
        let (mut tab, _) = new_tab();
        tab.activate();
        assert!(tab.is_active());
        tab.blur();
        assert_eq!(tab.state(), TabState::Background);
    }

    #[test]
    fn test_dispose_releases_surface() {
        let (tab, log) = new_tab();
        tab.dispose();
        assert!(log.borrow().released);
    }
}
