//! Layout mode

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Tabs in a strip above the content
    #[default]
    Horizontal,
    /// Tabs in a side list
    Vertical,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Horizontal => LayoutMode::Vertical,
            LayoutMode::Vertical => LayoutMode::Horizontal,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, LayoutMode::Vertical)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Horizontal => "horizontal",
            LayoutMode::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(LayoutMode::Horizontal),
            "vertical" => Ok(LayoutMode::Vertical),
            _ => Err(format!("Unknown layout mode: {}", s)),
        }
    }
}
