//! Line commands accepted by the headless host
//!
//! Tabs are addressed by 1-based strip position; commands that take an
//! optional position default to the active tab.

use std::str::FromStr;

use serde::Serialize;
use strata_core::{KeyPress, WindowCommand};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid tab position: {0}")]
    InvalidPosition(String),

    #[error("Invalid width: {0}")]
    InvalidWidth(String),

    #[error("Invalid key combination: {0}")]
    InvalidKey(String),

    #[error("No tab at position {0}")]
    NoSuchTab(usize),
}

/// Reply printed for every command line.
#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    NewTab(Option<String>),
    CloseTab(Option<usize>),
    Activate(usize),
    Go(String),
    Back,
    Forward,
    Reload,
    Toggle,
    Resize(f64),
    Key(KeyPress),
    Loaded(Option<usize>),
    Window(WindowCommand),
    State,
    Quit,
}

impl FromStr for HostCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let argument = (!rest.is_empty()).then_some(rest);

        let command = match name.to_lowercase().as_str() {
            "new" => HostCommand::NewTab(argument.map(str::to_string)),
            "close" => HostCommand::CloseTab(argument.map(position).transpose()?),
            "activate" => {
                let raw = argument.ok_or(CommandError::MissingArgument("activate"))?;
                HostCommand::Activate(position(raw)?)
            }
            // The bar's raw text, so blank input is allowed
            "go" => HostCommand::Go(rest.to_string()),
            "back" => HostCommand::Back,
            "forward" => HostCommand::Forward,
            "reload" => HostCommand::Reload,
            "toggle" => HostCommand::Toggle,
            "resize" => {
                let raw = argument.ok_or(CommandError::MissingArgument("resize"))?;
                let width = raw
                    .parse::<f64>()
                    .map_err(|_| CommandError::InvalidWidth(raw.to_string()))?;
                HostCommand::Resize(width)
            }
            "key" => {
                let raw = argument.ok_or(CommandError::MissingArgument("key"))?;
                let press =
                    KeyPress::parse(raw).ok_or_else(|| CommandError::InvalidKey(raw.to_string()))?;
                HostCommand::Key(press)
            }
            "loaded" => HostCommand::Loaded(argument.map(position).transpose()?),
            "max" => HostCommand::Window(WindowCommand::ToggleMaximize),
            "min" => HostCommand::Window(WindowCommand::Minimize),
            "close-window" => HostCommand::Window(WindowCommand::Close),
            "state" => HostCommand::State,
            "quit" | "exit" => HostCommand::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        Ok(command)
    }
}

fn position(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidPosition(raw.to_string())),
    }
}
