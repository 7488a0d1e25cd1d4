//! Component configuration file handling
//!
//! `stc.toml` overrides the defaults of individual components. Every section
//! and field is optional:
//!
//! ```toml
//! [currency]
//! thousand_separator = "."
//! decimal_separator = ","
//!
//! [select]
//! no_options_text = "Nothing found"
//!
//! [pagination]
//! sibling_count = 1
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use stc_widgets::CurrencyFormat;

use crate::components::{PaginationTexts, SelectTexts};
use crate::error::ConfigError;

/// Defaults applied when building components
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentsConfig {
    #[serde(default)]
    pub currency: CurrencyFormat,
    #[serde(default)]
    pub select: SelectTexts,
    #[serde(default)]
    pub pagination: PaginationTexts,
}

impl ComponentsConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded component config");
        Ok(config)
    }

    /// Parse and validate config text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.currency.validate()?;
        if self.pagination.sibling_count == 0 {
            return Err(ConfigError::Invalid {
                field: "pagination.sibling_count",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ComponentsConfig::from_toml_str("").unwrap();
        assert_eq!(config, ComponentsConfig::default());
        assert_eq!(config.currency.decimal_places, 2);
        assert_eq!(config.select.search_placeholder, "Search...");
        assert_eq!(config.select.no_options_text, "No options available");
        assert_eq!(config.pagination.sibling_count, 2);
    }

    #[test]
    fn test_partial_sections() {
        let config = ComponentsConfig::from_toml_str(
            r#"
            [currency]
            thousand_separator = "."
            decimal_separator = ","

            [pagination]
            next_label = "Forward"
            "#,
        )
        .unwrap();

        assert_eq!(config.currency.thousand_separator, ".");
        assert_eq!(config.currency.decimal_places, 2);
        assert_eq!(config.pagination.next_label, "Forward");
        assert_eq!(config.pagination.previous_label, "Previous");
    }

    #[test]
    fn test_invalid_values() {
        let err = ComponentsConfig::from_toml_str("[currency]\ndecimal_separator = \",\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Currency(_)));

        let err = ComponentsConfig::from_toml_str("[pagination]\nsibling_count = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let err = ComponentsConfig::from_toml_str("[currency]\ndecimal_places = \"two\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = ComponentsConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(ComponentsConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = ComponentsConfig::load(Path::new("/nonexistent/stc.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stc.toml"));
    }
}
