//! Main browser state container
//!
//! Owns the tabs, the strip layout and the address bar. The host constructs
//! one `Browser`, calls [`Browser::initialize`], then feeds it events.

use strata_layout::{LayoutController, LayoutMode, StripItem};
use strata_navigation::InputResolver;
use strata_tabs::{ClosedTab, Tab, TabManager};

use crate::chrome::ChromeState;
use crate::config::Config;
use crate::events::{EventOutcome, Shortcut, UiEvent, CONFIRM_KEY};
use crate::host::ChromeHost;
use crate::Result;

pub struct Browser {
    /// Configuration
    config: Config,
    /// Open tabs and the active pointer
    tabs: TabManager,
    /// Strip layout mode and vertical view
    layout: LayoutController,
    /// Input resolver for address bar
    input_resolver: InputResolver,
    /// Platform surfaces, measurements and window
    host: Box<dyn ChromeHost>,
    /// Address bar text
    address_bar: String,
    address_selected: bool,
}

impl Browser {
    pub fn new(config: Config, host: Box<dyn ChromeHost>) -> Result<Self> {
        config.validate()?;

        let input_resolver = config.input_resolver()?;
        let layout = LayoutController::new(config.overflow_policy()?);

        Ok(Self {
            config,
            tabs: TabManager::new(),
            layout,
            input_resolver,
            host,
            address_bar: String::new(),
            address_selected: false,
        })
    }

    /// Open the first tab. Safe to call more than once.
    pub fn initialize(&mut self) -> Result<()> {
        if self.tabs.is_empty() {
            self.create_tab(None)?;
        }

        tracing::info!(tabs = self.tabs.len(), "Browser initialized");

        Ok(())
    }

    // === Tab operations ===

    /// Open a tab (the configured default address when `url` is `None`),
    /// make it active and start loading it. Returns the new tab's ID.
    pub fn create_tab(&mut self, url: Option<&str>) -> Result<String> {
        let input = url.unwrap_or(self.config.default_url.as_str());
        let url = self.input_resolver.resolve(input).into_url();

        let surface = self.host.create_surface();
        let tab_id = self.tabs.create_tab(url, surface)?;

        self.sync_address_bar();
        self.refresh_layout();
        self.reevaluate_overflow();

        Ok(tab_id)
    }

    pub fn set_active_tab(&mut self, tab_id: &str) -> Result<()> {
        self.tabs.set_active_tab(tab_id)?;
        self.sync_address_bar();
        self.refresh_layout();
        Ok(())
    }

    /// Close a tab. The last tab is always replaced by a fresh one.
    pub fn close_tab(&mut self, tab_id: &str) -> Result<ClosedTab> {
        let closed = self.tabs.close_tab(tab_id)?;

        if self.tabs.is_empty() {
            tracing::info!("Closed last tab, opening a replacement");
            self.create_tab(None)?;
        } else {
            if closed.activated.is_some() {
                self.sync_address_bar();
            }
            self.refresh_layout();
        }

        self.reevaluate_overflow();

        Ok(closed)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.active_tab()
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    // === Navigation operations ===

    /// Navigate the active tab. Returns the resolved address.
    pub fn navigate(&mut self, input: &str) -> Option<String> {
        let tab = self.tabs.active_tab_mut()?;
        let url = tab.navigate(input, &self.input_resolver).to_string();
        self.sync_address_bar();
        self.refresh_layout();
        Some(url)
    }

    pub fn go_back(&mut self) -> Option<String> {
        let url = self.tabs.active_tab_mut()?.go_back()?.to_string();
        self.sync_address_bar();
        self.refresh_layout();
        Some(url)
    }

    pub fn go_forward(&mut self) -> Option<String> {
        let url = self.tabs.active_tab_mut()?.go_forward()?.to_string();
        self.sync_address_bar();
        self.refresh_layout();
        Some(url)
    }

    pub fn reload(&mut self) -> bool {
        match self.tabs.active_tab_mut() {
            Some(tab) => {
                tab.reload();
                true
            }
            None => false,
        }
    }

    /// A surface finished loading. Completions for tabs that have since
    /// closed are dropped. Returns the tab's new label.
    pub fn handle_load_complete(&mut self, tab_id: &str) -> Option<String> {
        let Ok(tab) = self.tabs.get_tab_mut(tab_id) else {
            tracing::debug!(tab_id = %tab_id, "Load completion for closed tab");
            return None;
        };

        let label = tab.on_load_complete().to_string();
        self.refresh_layout();
        Some(label)
    }

    // === Layout operations ===

    pub fn toggle_vertical_tabs(&mut self) -> LayoutMode {
        let mode = self.layout.toggle();
        self.refresh_layout();
        mode
    }

    /// Measure the strip and switch to vertical tabs if it overflows.
    /// Returns true when the layout switched.
    pub fn check_overflow(&mut self) -> Result<bool> {
        let items = self.strip_items();
        let metrics = self.host.measure_strip(&items);
        let switched = self.layout.check_overflow(&metrics)?;

        if switched {
            self.layout.update(items);
        }

        Ok(switched)
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    // === Event routing ===

    pub fn dispatch(&mut self, event: UiEvent) -> EventOutcome {
        tracing::trace!(?event, "Dispatching UI event");

        match event {
            UiEvent::Back => outcome(self.go_back().is_some()),
            UiEvent::Forward => outcome(self.go_forward().is_some()),
            UiEvent::Reload => outcome(self.reload()),
            UiEvent::NewTab => {
                let result = self.create_tab(None);
                outcome(succeeded("open tab", result))
            }
            UiEvent::ActivateTab(tab_id) => {
                let result = self.set_active_tab(&tab_id);
                outcome(succeeded("activate tab", result))
            }
            UiEvent::CloseTab(tab_id) => {
                let result = self.close_tab(&tab_id);
                outcome(succeeded("close tab", result))
            }
            UiEvent::AddressKey { key, value } => {
                if key == CONFIRM_KEY {
                    outcome(self.navigate(&value).is_some())
                } else {
                    EventOutcome::ignored()
                }
            }
            UiEvent::KeyDown(press) => match Shortcut::from_key(&press) {
                Some(shortcut) => {
                    self.run_shortcut(shortcut);
                    EventOutcome::prevented()
                }
                None => EventOutcome::ignored(),
            },
            UiEvent::ToggleVerticalTabs => {
                self.toggle_vertical_tabs();
                EventOutcome::handled()
            }
            UiEvent::StripResized => {
                let result = self.check_overflow();
                outcome(succeeded("overflow check", result))
            }
            UiEvent::LoadComplete(tab_id) => outcome(self.handle_load_complete(&tab_id).is_some()),
            UiEvent::Window(command) => {
                command.apply(self.host.window());
                EventOutcome::handled()
            }
        }
    }

    fn run_shortcut(&mut self, shortcut: Shortcut) {
        tracing::debug!(?shortcut, "Shortcut");

        match shortcut {
            Shortcut::NewTab => {
                let result = self.create_tab(None);
                succeeded("open tab", result);
            }
            Shortcut::CloseTab => {
                if let Some(tab_id) = self.tabs.active_tab_id().map(str::to_string) {
                    let result = self.close_tab(&tab_id);
                    succeeded("close tab", result);
                }
            }
            Shortcut::Reload => {
                self.reload();
            }
            Shortcut::FocusAddressBar => self.address_selected = true,
        }
    }

    // === Display state ===

    pub fn chrome_state(&self) -> ChromeState {
        let active = self.tabs.active_tab();

        ChromeState {
            address_bar: self.address_bar.clone(),
            address_selected: self.address_selected,
            can_go_back: active.is_some_and(|tab| tab.can_go_back()),
            can_go_forward: active.is_some_and(|tab| tab.can_go_forward()),
            active_tab_id: self.tabs.active_tab_id().map(str::to_string),
            layout_mode: self.layout.mode(),
            vertical_visible: self.layout.is_vertical_visible(),
            tabs: self.strip_items(),
            vertical: self.layout.vertical_strip().cloned(),
        }
    }

    fn strip_items(&self) -> Vec<StripItem> {
        self.tabs
            .tabs()
            .iter()
            .map(|tab| StripItem {
                tab_id: tab.id.clone(),
                label: tab.display_title().to_string(),
                active: tab.is_active(),
            })
            .collect()
    }

    fn sync_address_bar(&mut self) {
        self.address_bar = self
            .tabs
            .active_tab()
            .map(|tab| tab.url().to_string())
            .unwrap_or_default();
        self.address_selected = false;
    }

    fn refresh_layout(&mut self) {
        let items = self.strip_items();
        self.layout.update(items);
    }

    fn reevaluate_overflow(&mut self) {
        let result = self.check_overflow();
        succeeded("overflow check", result);
    }
}

fn outcome(handled: bool) -> EventOutcome {
    if handled {
        EventOutcome::handled()
    } else {
        EventOutcome::ignored()
    }
}

/// Event routing never fails; errors are logged and the event dropped.
fn succeeded<T>(action: &str, result: Result<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to {}", action);
            false
        }
    }
}
