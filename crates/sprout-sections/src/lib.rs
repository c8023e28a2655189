//! Section descriptor types and extraction for the Sprout documentation
//! scaffold.
//!
//! Every content file exports a **section list**: the ordered sequence of
//! navigation descriptors for its second-level headings. The layout
//! collaborator consumes these to build in-page navigation; this crate only
//! produces them.
//!
//! # Example
//!
//! ```
//! use sprout_sections::extract_sections;
//!
//! let markdown = "# Guide\n\n## Installation\n\n## First Steps\n";
//! let sections = extract_sections(markdown);
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[0].title, "Installation");
//! assert_eq!(sections[0].anchor, "installation");
//! ```

mod extract;

pub use extract::extract_sections;

/// Navigation descriptor for one section of a content page.
///
/// Carries the heading text and a URL-safe anchor slug. The scaffold forwards
/// these opaquely; only the layout collaborator interprets them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Heading text as written in the content file.
    pub title: String,
    /// URL-safe anchor derived from the heading text.
    pub anchor: String,
}

impl Section {
    /// Create a section descriptor, deriving the anchor from the title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let anchor = extract::slugify(&title);
        Self { title, anchor }
    }
}
