//! Component and configuration errors

use std::path::PathBuf;

use stc_core::CoreError;
use stc_widgets::WidgetError;
use thiserror::Error;

/// Invalid component construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("spin speed {0} is outside 1..=10")]
    InvalidSpinSpeed(u8),

    #[error("items per page must be greater than zero")]
    ZeroItemsPerPage,

    #[error("invalid instance id: {0}")]
    Id(#[from] CoreError),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}

pub type Result<T> = std::result::Result<T, ComponentError>;

/// Failure loading or validating `stc.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid currency settings: {0}")]
    Currency(#[from] WidgetError),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
