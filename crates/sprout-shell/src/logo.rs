//! Branding component: logo glyph and wordmark.
//!
//! A single component replaces the scattered near-duplicate renderings this
//! grew out of. Width, height, and alt text are required constructor
//! arguments with no silent fallback, so every call site supplies explicit
//! intrinsic dimensions and accessible alt text.

use std::fmt::Write;

use crate::html::escape_html;

/// Asset path of the logo glyph under the public-assets root.
pub const LOGO_SRC: &str = "/react-sprout.png";

/// Wordmark text rendered next to the logo glyph.
pub const WORDMARK: &str = "React Sprout";

/// Logo glyph and wordmark, rendered side by side.
///
/// Pure and stateless; rendering cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Logo {
    width: u32,
    height: u32,
    alt: String,
}

impl Logo {
    /// Create a logo with explicit intrinsic dimensions and alt text.
    #[must_use]
    pub fn new(width: u32, height: u32, alt: impl Into<String>) -> Self {
        Self {
            width,
            height,
            alt: alt.into(),
        }
    }

    /// The canonical 32x32 logo with accessible alt text.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(32, 32, "react sprout")
    }

    /// Render the logo to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(160);
        write!(
            out,
            r#"<div class="flex items-center gap-4"><img src="{LOGO_SRC}" width="{}" height="{}" alt="{}">"#,
            self.width,
            self.height,
            escape_html(&self.alt)
        )
        .unwrap();
        write!(
            out,
            r#"<span class="text-xl font-semibold">{WORDMARK}</span></div>"#
        )
        .unwrap();
        out
    }
}
