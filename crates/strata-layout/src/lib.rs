//! Strata Layout
//!
//! Tabs start in a horizontal strip. When the strip can no longer fit them
//! the shell switches to a vertical side list, and stays there until the
//! user toggles back.

mod controller;
mod error;
mod mode;
mod overflow;
mod vertical;

pub use controller::LayoutController;
pub use error::LayoutError;
pub use mode::LayoutMode;
pub use overflow::{OverflowPolicy, StripMetrics};
pub use vertical::{StripItem, VerticalStrip, NEW_TAB_LABEL};

pub type Result<T> = std::result::Result<T, LayoutError>;
