//! Icon component rendering named glyphs
//!
//! Glyphs come from an [`IconResolver`]. The built-in set resolves
//! synchronously; an [`IconRegistry`] lets the host supply glyphs later, in
//! which case the icon renders empty while loading and `?` on failure.
//!
//! # Example
//!
//! ```ignore
//! use stc_cn::prelude::*;
//!
//! cn::icon(IconName::Check).size(IconSize::Px(24.0)).color("green")
//! ```

use serde::Serialize;
use std::sync::Arc;

use stc_icons::{to_svg, BuiltinIcons, IconName, IconResolver, IconState};

use crate::size::ComponentSize;

/// Named or pixel icon size
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IconSize {
    Named(ComponentSize),
    Px(f32),
}

impl Default for IconSize {
    fn default() -> Self {
        IconSize::Named(ComponentSize::Medium)
    }
}

impl IconSize {
    fn px(&self) -> f32 {
        match self {
            IconSize::Named(size) => size.icon_px(),
            IconSize::Px(px) => *px,
        }
    }

    /// Size keyword, `custom` for pixel sizes
    pub fn keyword(&self) -> &'static str {
        match self {
            IconSize::Named(size) => size.as_str(),
            IconSize::Px(_) => "custom",
        }
    }
}

/// What an icon renders
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum IconContent {
    /// Glyph not available yet; an empty element
    Loading,
    /// Glyph unknown or failed; a `?` placeholder
    Error { text: String },
    /// SVG markup
    Resolved { svg: String },
}

/// Render description of an [`Icon`]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IconView {
    pub name: String,
    pub size: &'static str,
    pub color: String,
    #[serde(rename = "data-height", skip_serializing_if = "Option::is_none")]
    pub data_height: Option<f32>,
    #[serde(rename = "data-width", skip_serializing_if = "Option::is_none")]
    pub data_width: Option<f32>,
    pub content: IconContent,
}

/// Icon component
#[derive(Clone)]
pub struct Icon {
    name: String,
    size: IconSize,
    color: String,
    resolver: Arc<dyn IconResolver>,
}

impl std::fmt::Debug for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Icon")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Icon {
    /// Icon looked up by an arbitrary name through `resolver`
    pub fn named(name: impl Into<String>, resolver: Arc<dyn IconResolver>) -> Self {
        Self {
            name: name.into(),
            size: IconSize::default(),
            color: "currentColor".to_string(),
            resolver,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the glyph and describe the icon
    pub fn view(&self) -> IconView {
        let content = match self.resolver.resolve(&self.name) {
            IconState::Loading => IconContent::Loading,
            IconState::Error(err) => {
                tracing::warn!(icon = %self.name, error = %err, "failed to load icon");
                IconContent::Error {
                    text: "?".to_string(),
                }
            }
            IconState::Resolved(glyph) => IconContent::Resolved {
                svg: to_svg(&glyph, self.size.px()),
            },
        };

        let pixel = match self.size {
            IconSize::Px(px) => Some(px),
            IconSize::Named(_) => None,
        };

        IconView {
            name: self.name.clone(),
            size: self.size.keyword(),
            color: self.color.clone(),
            data_height: pixel,
            data_width: pixel,
            content,
        }
    }
}

/// Create a built-in icon
pub fn icon(name: IconName) -> Icon {
    Icon::named(name.as_str(), Arc::new(BuiltinIcons))
}
