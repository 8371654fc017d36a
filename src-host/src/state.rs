//! Application state management

use std::cell::Cell;
use std::rc::Rc;

use strata_core::{Browser, ChromeState, Config, EventOutcome, Result, UiEvent, CONFIRM_KEY};

use crate::commands::{CommandError, HostCommand};
use crate::headless::{HeadlessHost, HeadlessWindow};

/// Owns the browser for the lifetime of the event loop.
pub struct AppState {
    browser: Browser,
    strip_width: Rc<Cell<f64>>,
    window: HeadlessWindow,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let host = HeadlessHost::new(&config);
        let strip_width = host.strip_width();
        let window = host.window_handle();
        let browser = Browser::new(config, Box::new(host))?;

        Ok(Self {
            browser,
            strip_width,
            window,
        })
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.browser.initialize()
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn chrome_state(&self) -> ChromeState {
        self.browser.chrome_state()
    }

    /// True once the window was closed.
    pub fn is_closed(&self) -> bool {
        self.window.is_closed()
    }

    /// Turn a command into a UI event and dispatch it. `state` and `quit`
    /// dispatch nothing.
    pub fn apply(&mut self, command: HostCommand) -> std::result::Result<EventOutcome, CommandError> {
        let event = match command {
            HostCommand::NewTab(None) => UiEvent::NewTab,
            HostCommand::NewTab(Some(url)) => {
                // The chrome itself only opens the default page
                return match self.browser.create_tab(Some(&url)) {
                    Ok(_) => Ok(EventOutcome::handled()),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to open tab");
                        Ok(EventOutcome::ignored())
                    }
                };
            }
            HostCommand::CloseTab(position) => UiEvent::CloseTab(self.tab_id(position)?),
            HostCommand::Activate(position) => UiEvent::ActivateTab(self.tab_id(Some(position))?),
            HostCommand::Go(input) => UiEvent::AddressKey {
                key: CONFIRM_KEY.to_string(),
                value: input,
            },
            HostCommand::Back => UiEvent::Back,
            HostCommand::Forward => UiEvent::Forward,
            HostCommand::Reload => UiEvent::Reload,
            HostCommand::Toggle => UiEvent::ToggleVerticalTabs,
            HostCommand::Resize(width) => {
                self.strip_width.set(width);
                UiEvent::StripResized
            }
            HostCommand::Key(press) => UiEvent::KeyDown(press),
            HostCommand::Loaded(position) => UiEvent::LoadComplete(self.tab_id(position)?),
            HostCommand::Window(command) => UiEvent::Window(command),
            HostCommand::State | HostCommand::Quit => return Ok(EventOutcome::ignored()),
        };

        Ok(self.browser.dispatch(event))
    }

    /// ID of the tab at a 1-based strip position, or of the active tab.
    fn tab_id(&self, position: Option<usize>) -> std::result::Result<String, CommandError> {
        let tabs = self.browser.tabs();
        let tab = match position {
            Some(n) => tabs.tabs().get(n - 1),
            None => tabs.active_tab(),
        };

        tab.map(|tab| tab.id.clone())
            .ok_or(CommandError::NoSuchTab(position.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{KeyPress, LayoutMode};

    fn state() -> AppState {
        let mut state = AppState::new(Config::default()).unwrap();
        state.initialize().unwrap();
        state
    }

    fn run(state: &mut AppState, line: &str) -> EventOutcome {
        state.apply(line.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_initialized_with_default_tab() {
        let state = state();
        let chrome = state.chrome_state();
        assert_eq!(chrome.tabs.len(), 1);
        assert_eq!(chrome.address_bar, "https://example.com");
    }

    #[test]
    fn test_go_back_forward() {
        let mut state = state();
        assert!(run(&mut state, "go rust-lang.org/learn").handled);
        assert_eq!(state.chrome_state().address_bar, "https://rust-lang.org/learn");

        assert!(run(&mut state, "back").handled);
        let chrome = state.chrome_state();
        assert_eq!(chrome.address_bar, "https://example.com");
        assert!(chrome.can_go_forward);

        assert!(run(&mut state, "forward").handled);
        assert_eq!(state.chrome_state().address_bar, "https://rust-lang.org/learn");
        assert!(!run(&mut state, "forward").handled);
    }

    #[test]
    fn test_positions_address_tabs() {
        let mut state = state();
        run(&mut state, "new");
        run(&mut state, "new docs.rs/serde");
        assert_eq!(state.browser().tabs().len(), 3);

        run(&mut state, "activate 1");
        let first = state.browser().tabs().tabs()[0].id.clone();
        assert_eq!(state.chrome_state().active_tab_id, Some(first));

        assert_eq!(
            state.apply(HostCommand::Activate(9)),
            Err(CommandError::NoSuchTab(9))
        );

        run(&mut state, "close 1");
        assert_eq!(state.browser().tabs().len(), 2);
    }

    #[test]
    fn test_shortcut_prevents_default() {
        let mut state = state();
        let outcome = state.apply(HostCommand::Key(KeyPress::ctrl("t"))).unwrap();
        assert!(outcome.default_prevented);
        assert_eq!(state.browser().tabs().len(), 2);
    }

    #[test]
    fn test_resize_switches_to_vertical() {
        let mut state = state();
        run(&mut state, "new");
        assert_eq!(state.browser().layout_mode(), LayoutMode::Horizontal);

        // 2 * (150 + 4) = 308 against 300 - 40
        run(&mut state, "resize 300");
        assert_eq!(state.browser().layout_mode(), LayoutMode::Vertical);

        run(&mut state, "resize 2000");
        assert_eq!(state.browser().layout_mode(), LayoutMode::Vertical);
    }

    #[test]
    fn test_close_window() {
        let mut state = state();
        assert!(!state.is_closed());
        run(&mut state, "close-window");
        assert!(state.is_closed());
    }
}
