use rustc_hash::FxHashMap;
use serde::Serialize;
use std::borrow::Cow;
use std::str::FromStr;
use std::sync::RwLock;
use thiserror::Error;

use crate::icons;

/// Errors raised while resolving an icon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// No glyph is known under this name
    #[error("unknown icon: {0}")]
    Unknown(String),

    /// A glyph source reported a failure for this name
    #[error("failed to load icon {name}: {reason}")]
    Failed { name: String, reason: String },
}

/// Result type for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Names of the icons shipped with the component library
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconName {
    CaretDown,
    CaretUp,
    Check,
    Close,
    Cross,
    Info,
}

impl IconName {
    pub const ALL: [IconName; 6] = [
        IconName::CaretDown,
        IconName::CaretUp,
        IconName::Check,
        IconName::Close,
        IconName::Cross,
        IconName::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::CaretDown => "caretdown",
            IconName::CaretUp => "caretup",
            IconName::Check => "check",
            IconName::Close => "close",
            IconName::Cross => "cross",
            IconName::Info => "info",
        }
    }

    /// Built-in glyph content for this name
    pub fn glyph(&self) -> &'static str {
        match self {
            IconName::CaretDown => icons::CARET_DOWN,
            IconName::CaretUp => icons::CARET_UP,
            IconName::Check => icons::CHECK,
            IconName::Close => icons::CLOSE,
            IconName::Cross => icons::CROSS,
            IconName::Info => icons::INFO,
        }
    }
}

impl FromStr for IconName {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        IconName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| IconError::Unknown(s.to_string()))
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a named icon
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconState {
    /// The glyph source has not delivered the glyph yet
    Loading,
    /// SVG inner content for the glyph
    Resolved(Cow<'static, str>),
    /// The glyph is unknown or failed to load
    Error(IconError),
}

impl IconState {
    pub fn is_loading(&self) -> bool {
        matches!(self, IconState::Loading)
    }

    /// Glyph content when resolved
    pub fn glyph(&self) -> Option<&str> {
        match self {
            IconState::Resolved(glyph) => Some(&**glyph),
            _ => None,
        }
    }
}

/// Capability: resolve a named icon
pub trait IconResolver: Send + Sync {
    fn resolve(&self, name: &str) -> IconState;
}

/// Resolver over the glyphs compiled into this crate
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinIcons;

impl IconResolver for BuiltinIcons {
    fn resolve(&self, name: &str) -> IconState {
        match name.parse::<IconName>() {
            Ok(icon) => IconState::Resolved(Cow::Borrowed(icon.glyph())),
            Err(e) => IconState::Error(e),
        }
    }
}

#[derive(Clone, Debug)]
enum Entry {
    Pending,
    Ready(String),
    Failed(String),
}

/// Runtime-populated icon set
///
/// Hosts that fetch glyphs asynchronously mark a name pending, then insert
/// the glyph (or a failure) once it arrives. Components re-resolve on their
/// next render.
#[derive(Debug, Default)]
pub struct IconRegistry {
    entries: RwLock<FxHashMap<String, Entry>>,
    builtin_fallback: bool,
}

impl IconRegistry {
    /// Empty registry; unregistered names resolve to an error
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that falls back to [`BuiltinIcons`] for unregistered names
    pub fn with_builtins() -> Self {
        Self {
            entries: RwLock::default(),
            builtin_fallback: true,
        }
    }

    /// Record that a glyph is being fetched
    pub fn mark_pending(&self, name: impl Into<String>) {
        self.entries
            .write()
            .unwrap()
            .insert(name.into(), Entry::Pending);
    }

    /// Provide the glyph content for a name
    pub fn insert(&self, name: impl Into<String>, glyph: impl Into<String>) {
        let name = name.into();
        tracing::debug!(icon = %name, "icon registered");
        self.entries
            .write()
            .unwrap()
            .insert(name, Entry::Ready(glyph.into()));
    }

    /// Record that fetching a glyph failed
    pub fn fail(&self, name: impl Into<String>, reason: impl Into<String>) {
        self.entries
            .write()
            .unwrap()
            .insert(name.into(), Entry::Failed(reason.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IconResolver for IconRegistry {
    fn resolve(&self, name: &str) -> IconState {
        match self.entries.read().unwrap().get(name) {
            Some(Entry::Pending) => IconState::Loading,
            Some(Entry::Ready(glyph)) => IconState::Resolved(Cow::Owned(glyph.clone())),
            Some(Entry::Failed(reason)) => IconState::Error(IconError::Failed {
                name: name.to_string(),
                reason: reason.clone(),
            }),
            None if self.builtin_fallback => BuiltinIcons.resolve(name),
            None => IconState::Error(IconError::Unknown(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name_round_trip_names() {
        for icon in IconName::ALL {
            assert_eq!(icon.as_str().parse::<IconName>(), Ok(icon));
        }
        assert_eq!(
            "spinner".parse::<IconName>(),
            Err(IconError::Unknown("spinner".to_string()))
        );
    }

    #[test]
    fn test_builtin_resolver() {
        assert_eq!(BuiltinIcons.resolve("close").glyph(), Some(icons::CLOSE));
        assert!(matches!(
            BuiltinIcons.resolve("CLOSE"),
            IconState::Error(IconError::Unknown(_))
        ));
    }

    #[test]
    fn test_registry_lifecycle() {
        let registry = IconRegistry::new();
        assert!(matches!(registry.resolve("star"), IconState::Error(_)));

        registry.mark_pending("star");
        assert!(registry.resolve("star").is_loading());

        registry.insert("star", "<path d=\"M1 1\"/>");
        assert_eq!(registry.resolve("star").glyph(), Some("<path d=\"M1 1\"/>"));

        registry.fail("star", "404");
        assert_eq!(
            registry.resolve("star"),
            IconState::Error(IconError::Failed {
                name: "star".to_string(),
                reason: "404".to_string()
            })
        );
    }

    #[test]
    fn test_registry_builtin_fallback() {
        let registry = IconRegistry::with_builtins();
        assert_eq!(registry.resolve("check").glyph(), Some(icons::CHECK));
        assert!(registry.is_empty());
    }
}
