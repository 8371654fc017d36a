//! Strata Core
//!
//! The browser chrome as a state machine: tabs, their histories, the tab
//! strip layout, and routing of UI events. The host owns the event loop and
//! the platform pieces (render surfaces, window, measurements) and plugs
//! them in through [`ChromeHost`].

mod browser;
mod chrome;
mod config;
mod error;
mod events;
mod host;

pub use browser::Browser;
pub use chrome::ChromeState;
pub use config::Config;
pub use error::CoreError;
pub use events::{EventOutcome, KeyPress, Shortcut, UiEvent, CONFIRM_KEY};
pub use host::{ChromeHost, WindowCommand, WindowControls};

// Re-export core components
pub use strata_layout::{
    LayoutController, LayoutError, LayoutMode, OverflowPolicy, StripItem, StripMetrics,
    VerticalStrip, NEW_TAB_LABEL,
};
pub use strata_navigation::{
    host_label, InputResolution, InputResolver, NavigationError, SessionHistory,
};
pub use strata_tabs::{
    ClosedTab, RenderSurface, SurfaceError, Tab, TabError, TabManager, TabState, NEW_TAB_TITLE,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
