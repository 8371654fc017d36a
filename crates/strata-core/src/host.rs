//! Host seams
//!
//! Everything platform-specific the chrome needs: render surfaces for new
//! tabs, measurements of the rendered tab strip, and the window itself.

use strata_layout::{StripItem, StripMetrics};
use strata_tabs::RenderSurface;

/// Platform window operations. The chrome adds no semantics of its own.
pub trait WindowControls {
    fn close(&mut self);
    fn minimize(&mut self);
    fn maximize(&mut self);
    fn unmaximize(&mut self);
    fn is_maximized(&self) -> bool;
}

pub trait ChromeHost {
    /// A fresh, unloaded surface for a new tab.
    fn create_surface(&mut self) -> Box<dyn RenderSurface>;

    /// Measure the horizontal strip as currently rendered for `tabs`.
    fn measure_strip(&self, tabs: &[StripItem]) -> StripMetrics;

    fn window(&mut self) -> &mut dyn WindowControls;
}

/// Window buttons in the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Close,
    Minimize,
    /// Maximize, or restore when already maximized
    ToggleMaximize,
}

impl WindowCommand {
    pub fn apply(self, window: &mut dyn WindowControls) {
        match self {
            WindowCommand::Close => window.close(),
            WindowCommand::Minimize => window.minimize(),
            WindowCommand::ToggleMaximize => {
                if window.is_maximized() {
                    window.unmaximize();
                } else {
                    window.maximize();
                }
            }
        }
    }
}
