//! Tab Manager
//!
//! Keeps open tabs in display order and the pointer to the active one.

use crate::error::TabError;
use crate::surface::RenderSurface;
use crate::tab::Tab;
use crate::Result;

/// What happened when a tab was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedTab {
    pub id: String,
    /// Position the tab had in the strip
    pub index: usize,
    pub was_active: bool,
    /// Tab activated in its place, if any
    pub activated: Option<String>,
}

#[derive(Debug, Default)]
pub struct TabManager {
    /// Open tabs, display order
    tabs: Vec<Tab>,
    /// Currently active tab ID
    active_tab_id: Option<String>,
}

impl TabManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a tab at the end of the strip, make it active and start loading
    /// its address. Returns the new tab's ID.
    pub fn create_tab(&mut self, url: String, surface: Box<dyn RenderSurface>) -> Result<String> {
        let tab = Tab::new(url, surface)?;
        let tab_id = tab.id.clone();

        tracing::info!(tab_id = %tab.id, url = %tab.url(), "Created new tab");

        self.tabs.push(tab);
        self.set_active_tab(&tab_id)?;

        if let Some(tab) = self.tabs.last_mut() {
            tab.start();
        }

        Ok(tab_id)
    }

    /// Activate a tab, moving the previously active one to the background.
    pub fn set_active_tab(&mut self, tab_id: &str) -> Result<&mut Tab> {
        let index = self.position(tab_id)?;

        if let Some(previous) = self.active_tab_id.take() {
            if previous != tab_id {
                if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == previous) {
                    tab.blur();
                }
            }
        }

        self.active_tab_id = Some(tab_id.to_string());
        let tab = &mut self.tabs[index];
        tab.activate();
        Ok(tab)
    }

    /// Close a tab and release its surface. When it was active, the tab
    /// before it (or the new first tab) becomes active. Closing the last
    /// tab leaves the manager empty; callers decide on a replacement.
    pub fn close_tab(&mut self, tab_id: &str) -> Result<ClosedTab> {
        let index = self.position(tab_id)?;
        let tab = self.tabs.remove(index);
        let was_active = self.active_tab_id.as_deref() == Some(tab_id);
        tab.dispose();

        tracing::info!(tab_id = %tab_id, index, "Closed tab");

        let mut activated = None;
        if self.tabs.is_empty() {
            self.active_tab_id = None;
        } else if was_active {
            self.active_tab_id = None;
            let next_id = self.tabs[index.saturating_sub(1)].id.clone();
            self.set_active_tab(&next_id)?;
            activated = Some(next_id);
        }

        Ok(ClosedTab {
            id: tab_id.to_string(),
            index,
            was_active,
            activated,
        })
    }

    /// Get a tab by ID
    pub fn get_tab(&self, tab_id: &str) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    pub fn get_tab_mut(&mut self, tab_id: &str) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        let id = self.active_tab_id.as_deref()?;
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let id = self.active_tab_id.as_deref()?;
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// Display index of a tab
    pub fn position(&self, tab_id: &str) -> Result<usize> {
        self.tabs
            .iter()
            .position(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    /// All tabs in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_ids(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
