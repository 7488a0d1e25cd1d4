//! Icons for stc components
//!
//! Components refer to icons by name (`close`, `caretdown`, `check`, ...).
//! Resolving a name is a synchronous capability returning an explicit
//! [`IconState`]: a glyph may still be loading, resolved, or failed.
//!
//! ```rust
//! use stc_icons::{BuiltinIcons, IconResolver, IconState};
//!
//! let icons = BuiltinIcons;
//! assert!(matches!(icons.resolve("check"), IconState::Resolved(_)));
//! assert!(matches!(icons.resolve("rocket"), IconState::Error(_)));
//! ```

pub mod icons;
mod resolve;

pub use resolve::{BuiltinIcons, IconError, IconName, IconRegistry, IconResolver, IconState, Result};

/// Wrap glyph content in a complete SVG tag
///
/// Stroke uses `currentColor` so the glyph follows the surrounding text color.
pub fn to_svg(content: &str, size: f32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{content}</svg>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_svg_wraps_content() {
        let svg = to_svg(icons::CHECK, 16.0);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="16""#));
        assert!(svg.contains(icons::CHECK));
        assert!(svg.ends_with("</svg>"));
    }
}
