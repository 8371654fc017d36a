//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use strata_layout::{LayoutError, OverflowPolicy};
use strata_navigation::{InputResolver, DEFAULT_SEARCH_TEMPLATE};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address new tabs open with
    pub default_url: String,
    /// Search engine URL template
    pub search_engine: String,
    /// Gap allowance per tab when measuring the strip
    pub tab_gap: f64,
    /// Strip width kept free for padding and the new-tab control
    pub strip_padding: f64,
    /// Strip width assumed by hosts that can't measure
    pub strip_width: f64,
    /// Tab width assumed by hosts that can't measure
    pub tab_width: f64,
}

impl Config {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Reject values the resolver or layout would refuse.
    pub fn validate(&self) -> Result<()> {
        self.input_resolver()?;
        self.overflow_policy()?;

        for (name, value) in [("strip width", self.strip_width), ("tab width", self.tab_width)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidMeasurement { name, value }.into());
            }
        }

        if self.default_url.trim().is_empty() {
            return Err(crate::CoreError::Config(
                "Default URL cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn input_resolver(&self) -> Result<InputResolver> {
        Ok(InputResolver::with_search_engine(self.search_engine.clone())?)
    }

    pub fn overflow_policy(&self) -> Result<OverflowPolicy> {
        Ok(OverflowPolicy::new(self.tab_gap, self.strip_padding)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        let policy = OverflowPolicy::default();

        Self {
            default_url: "https://example.com".to_string(),
            search_engine: DEFAULT_SEARCH_TEMPLATE.to_string(),
            tab_gap: policy.tab_gap,
            strip_padding: policy.reserved_width,
            strip_width: 1280.0,
            tab_width: 150.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.overflow_policy().unwrap(), OverflowPolicy::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "search_engine": "https://duckduckgo.com/?q=%s" }"#)
                .unwrap();
        assert_eq!(config.search_engine, "https://duckduckgo.com/?q=%s");
        assert_eq!(config.default_url, "https://example.com");
        assert_eq!(config.tab_gap, 4.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = Config {
            search_engine: "https://example.com/search".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            strip_padding: -1.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            default_url: " ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_strip_measurements_rejected() {
        let config: Config = serde_json::from_str(r#"{ "tab_width": -1 }"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(crate::CoreError::Layout(LayoutError::InvalidMeasurement {
                name: "tab width",
                ..
            }))
        ));

        let config = Config {
            strip_width: f64::INFINITY,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/strata.json"));
        assert!(matches!(result, Err(crate::CoreError::Config(_))));
    }
}
