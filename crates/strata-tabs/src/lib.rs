//! Strata Tab Management
//!
//! A tab is one browsing session: an address, its back/forward history and
//! the render surface showing it. The [`TabManager`] keeps tabs in display
//! order and tracks which one is active.

mod error;
mod manager;
mod state;
mod surface;
mod tab;

pub use error::{SurfaceError, TabError};
pub use manager::{ClosedTab, TabManager};
pub use state::TabState;
pub use surface::RenderSurface;
pub use tab::{Tab, NEW_TAB_TITLE};

pub type Result<T> = std::result::Result<T, TabError>;
