use thiserror::Error;

/// Widget configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("invalid {field}: {reason}")]
    InvalidSeparator { field: &'static str, reason: String },

    #[error("invalid step {0}: must be a positive finite number")]
    InvalidStep(String),

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },
}

pub type Result<T> = std::result::Result<T, WidgetError>;
