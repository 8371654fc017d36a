//! Strata Navigation
//!
//! Address bar input resolution:
//!   1. No `.` or no `/` → search query (blank input included)
//!   2. Missing scheme → `https://` prepended
//!
//! Plus the back/forward stack each tab keeps.

mod error;
mod history;
mod input;

pub use error::NavigationError;
pub use history::SessionHistory;
pub use input::{host_label, InputResolution, InputResolver, DEFAULT_SEARCH_TEMPLATE};

pub type Result<T> = std::result::Result<T, NavigationError>;
