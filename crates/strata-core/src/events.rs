//! UI events routed through the browser
//!
//! The host translates clicks and key presses into [`UiEvent`]s and feeds
//! them to [`crate::Browser::dispatch`] one at a time.

use crate::host::WindowCommand;

/// Key that submits the address bar.
pub const CONFIRM_KEY: &str = "Enter";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Back button
    Back,
    /// Forward button
    Forward,
    /// Reload button
    Reload,
    /// New-tab control (either strip)
    NewTab,
    /// Click on a tab entry
    ActivateTab(String),
    /// Click on a tab's close control
    CloseTab(String),
    /// Key pressed in the address bar, with the bar's current text
    AddressKey { key: String, value: String },
    /// Key pressed anywhere in the chrome
    KeyDown(KeyPress),
    /// Vertical tabs toggle button
    ToggleVerticalTabs,
    /// The horizontal strip changed size
    StripResized,
    /// A tab's surface finished loading
    LoadComplete(String),
    /// Window buttons
    Window(WindowCommand),
}

/// A key press with the modifiers shortcuts care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }

    pub fn meta(key: impl Into<String>) -> Self {
        Self {
            meta: true,
            ..Self::new(key)
        }
    }

    /// Parse a combo like `"Ctrl+T"` or `"Cmd+w"`. The last token is the
    /// key; `Cmd`, `Command`, `Meta` and `Super` all map to meta.
    pub fn parse(combo: &str) -> Option<Self> {
        let tokens: Vec<&str> = combo.split('+').map(str::trim).collect();
        let (key, modifiers) = tokens.split_last()?;
        if key.is_empty() {
            return None;
        }

        let mut press = Self::new(*key);
        for modifier in modifiers {
            match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => press.ctrl = true,
                "cmd" | "command" | "meta" | "super" => press.meta = true,
                _ => return None,
            }
        }

        Some(press)
    }

    fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Chrome keyboard shortcuts. Each one suppresses the platform default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+T
    NewTab,
    /// Ctrl/Cmd+W
    CloseTab,
    /// Ctrl/Cmd+R
    Reload,
    /// Ctrl/Cmd+L: select the address bar text
    FocusAddressBar,
}

impl Shortcut {
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        if !press.has_command_modifier() {
            return None;
        }

        match press.key.to_lowercase().as_str() {
            "t" => Some(Shortcut::NewTab),
            "w" => Some(Shortcut::CloseTab),
            "r" => Some(Shortcut::Reload),
            "l" => Some(Shortcut::FocusAddressBar),
            _ => None,
        }
    }
}

/// What the browser did with an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The browser acted on the event
    pub handled: bool,
    /// The host must not run its default handling for the event
    pub default_prevented: bool,
}

impl EventOutcome {
    pub fn handled() -> Self {
        Self {
            handled: true,
            default_prevented: false,
        }
    }

    pub fn prevented() -> Self {
        Self {
            handled: true,
            default_prevented: true,
        }
    }

    pub fn ignored() -> Self {
        Self::default()
    }
}
