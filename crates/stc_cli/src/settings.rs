//! Configuration handling for the `stc` binary
//!
//! Settings come from an optional `stc.toml` and are then overridden by
//! command line flags.

use anyhow::{Context, Result};
use std::path::Path;

use stc_cn::ComponentsConfig;
use stc_widgets::CurrencyFormat;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "stc.toml";

/// Load the component configuration
///
/// An explicit path must exist. Without one, `stc.toml` in the working
/// directory is used when present, defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<ComponentsConfig> {
    match path {
        Some(path) => ComponentsConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                tracing::debug!(path = %fallback.display(), "using config from working directory");
                ComponentsConfig::load(fallback)
                    .with_context(|| format!("Failed to load config {}", fallback.display()))
            } else {
                Ok(ComponentsConfig::default())
            }
        }
    }
}

/// Currency flags shared by `format` and `parse`
#[derive(clap::Args, Debug, Default, Clone)]
pub struct CurrencyArgs {
    /// Number of decimal places kept
    #[arg(long)]
    pub decimal_places: Option<usize>,

    /// Thousand separator
    #[arg(long)]
    pub thousand_separator: Option<String>,

    /// Decimal separator
    #[arg(long)]
    pub decimal_separator: Option<String>,
}

impl CurrencyArgs {
    /// Apply the flags on top of the configured format
    pub fn resolve(&self, base: &CurrencyFormat) -> Result<CurrencyFormat> {
        let mut format = base.clone();
        if let Some(places) = self.decimal_places {
            format = format.decimal_places(places);
        }
        if let Some(ref separator) = self.thousand_separator {
            format = format.thousand_separator(separator.as_str());
        }
        if let Some(ref separator) = self.decimal_separator {
            format = format.decimal_separator(separator.as_str());
        }
        format.validate().context("Invalid currency format")?;
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = CurrencyArgs {
            decimal_places: Some(0),
            thousand_separator: Some(".".to_string()),
            decimal_separator: Some(",".to_string()),
        };
        let format = args.resolve(&CurrencyFormat::default()).unwrap();
        assert_eq!(format.decimal_places, 0);
        assert_eq!(format.thousand_separator, ".");
        assert_eq!(format.decimal_separator, ",");
    }

    #[test]
    fn test_conflicting_separators_rejected() {
        let args = CurrencyArgs {
            decimal_separator: Some(",".to_string()),
            ..Default::default()
        };
        assert!(args.resolve(&CurrencyFormat::default()).is_err());
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let err = load(Some(Path::new("/nonexistent/stc.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stc.toml"));
    }
}
