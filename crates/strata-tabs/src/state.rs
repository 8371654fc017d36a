//! Tab activation state
//!
//! ```text
//! Background
//!   ↓ activate      ↑ blur
//! Active
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Tab is displayed and receives navigation controls
    Active,
    /// Tab is open but not displayed
    Background,
}

impl TabState {
    pub fn is_active(&self) -> bool {
        matches!(self, TabState::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Active => "active",
            TabState::Background => "background",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(TabState::Active),
            "background" => Ok(TabState::Background),
            _ => Err(format!("Unknown tab state: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Active".parse::<TabState>().unwrap(), TabState::Active);
        assert_eq!("background".parse::<TabState>().unwrap(), TabState::Background);
        assert!("frozen".parse::<TabState>().is_err());
        assert_eq!(TabState::Active.to_string(), "active");
    }
}
