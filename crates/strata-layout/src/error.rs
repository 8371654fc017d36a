//! Layout error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error("Invalid {name}: {value}")]
    InvalidMeasurement { name: &'static str, value: f64 },
}
