//! Accessibility attributes exposed by component views
//!
//! Views carry their ARIA contract as an ordered attribute list so a host can
//! apply it verbatim to whatever element it renders.
//!
//! ```ignore
//! let attrs = AriaAttributes::with_role(Role::Combobox)
//!     .attr("aria-haspopup", "listbox")
//!     .flag("aria-expanded", is_open);
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

/// ARIA roles used by the component library
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Combobox,
    Listbox,
    Option,
    Searchbox,
    Search,
    Button,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Combobox => "combobox",
            Role::Listbox => "listbox",
            Role::Option => "option",
            Role::Searchbox => "searchbox",
            Role::Search => "search",
            Role::Button => "button",
        }
    }
}

/// Ordered set of element attributes
///
/// Setting an attribute that already exists replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AriaAttributes {
    attrs: Vec<(String, String)>,
}

impl AriaAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an attribute set with `role`
    pub fn with_role(role: Role) -> Self {
        Self::new().attr("role", role.as_str())
    }

    /// Set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a boolean attribute rendered as `"true"` / `"false"`
    pub fn flag(self, name: impl Into<String>, value: bool) -> Self {
        self.attr(name, if value { "true" } else { "false" })
    }

    /// Set an attribute only when `value` is present
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Set an attribute in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Look up an attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Read a boolean attribute
    pub fn is_true(&self, name: &str) -> bool {
        self.get(name) == Some("true")
    }

    /// The element's role, if any
    pub fn role(&self) -> Option<&str> {
        self.get("role")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl Serialize for AriaAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attrs.len()))?;
        for (k, v) in &self.attrs {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_order_and_replace() {
        let attrs = AriaAttributes::with_role(Role::Combobox)
            .attr("aria-haspopup", "listbox")
            .flag("aria-expanded", false)
            .flag("aria-expanded", true);

        let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["role", "aria-haspopup", "aria-expanded"]);
        assert!(attrs.is_true("aria-expanded"));
        assert_eq!(attrs.role(), Some("combobox"));
    }

    #[test]
    fn test_attr_opt() {
        let attrs = AriaAttributes::new()
            .attr_opt("aria-activedescendant", None::<String>)
            .attr_opt("id", Some("select-1"));
        assert_eq!(attrs.get("aria-activedescendant"), None);
        assert_eq!(attrs.get("id"), Some("select-1"));
    }

    #[test]
    fn test_serializes_as_map() {
        let attrs = AriaAttributes::with_role(Role::Listbox).flag("aria-multiselectable", true);
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"role":"listbox","aria-multiselectable":"true"}"#);
    }
}
