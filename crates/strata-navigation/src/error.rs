//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Invalid search template: {0}")]
    InvalidSearchTemplate(String),
}
