//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] strata_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] strata_navigation::NavigationError),

    #[error("Layout error: {0}")]
    Layout(#[from] strata_layout::LayoutError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

// Config files are the only I/O the core performs
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
