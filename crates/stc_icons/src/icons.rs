//! Glyph constants for the named icons
//!
//! Each glyph is a `&'static str` containing the SVG inner elements on a
//! 24x24 Lucide grid. Use [`crate::to_svg`] to wrap one in a complete tag.

/// caret down (chevron down)
pub const CARET_DOWN: &str = r#"<path d="m6 9 6 6 6-6"/>"#;

/// caret up (chevron up)
pub const CARET_UP: &str = r#"<path d="m18 15-6-6-6 6"/>"#;

/// check
pub const CHECK: &str = r#"<path d="M20 6 9 17l-5-5"/>"#;

/// close (x)
pub const CLOSE: &str = r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#;

/// cross (circle x)
pub const CROSS: &str =
    r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#;

/// info
pub const INFO: &str =
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#;
