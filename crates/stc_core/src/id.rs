//! Component instance identifiers
//!
//! Instance ids tie a trigger to its popup (`aria-controls`) and option rows
//! to the trigger (`aria-activedescendant`). Hosts may supply their own id;
//! otherwise one is generated from a prefix and a process-wide counter.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{CoreError, Result};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of a mounted component instance
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    /// Use a host-supplied id verbatim
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive a child element id, e.g. `select-3-option-us`
    pub fn child(&self, suffix: &str) -> String {
        format!("{}-{}", self.0, suffix)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a unique id such as `select-7`
///
/// The prefix may carry a trailing dash (`"select-"`); one is added otherwise.
pub fn next_instance_id(prefix: &str) -> Result<InstanceId> {
    let base = prefix.trim_end_matches('-');
    if base.is_empty() || base.chars().any(char::is_whitespace) {
        return Err(CoreError::InvalidIdPrefix(prefix.to_string()));
    }
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    Ok(InstanceId(format!("{}-{}", base, n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = next_instance_id("select-").unwrap();
        let b = next_instance_id("select").unwrap();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("select-"));
        assert!(b.as_str().starts_with("select-"));
        assert!(!b.as_str().starts_with("select--"));
    }

    #[test]
    fn test_invalid_prefix() {
        assert_eq!(
            next_instance_id(""),
            Err(CoreError::InvalidIdPrefix(String::new()))
        );
        assert!(next_instance_id("my select").is_err());
    }

    #[test]
    fn test_child_id() {
        let id = InstanceId::new("fruit");
        assert_eq!(id.child("option-apple"), "fruit-option-apple");
    }
}
