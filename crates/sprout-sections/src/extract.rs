//! Section extraction from markdown content.
//!
//! Walks the pulldown-cmark event stream and collects second-level headings
//! as [`Section`] descriptors. Content with no such headings yields an empty
//! list; that is the normal case for short pages, not an error.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::Section;

/// Extract the section list from markdown content.
///
/// Each `##` heading becomes one [`Section`], in document order. Inline
/// formatting inside the heading is flattened to plain text.
#[must_use]
pub fn extract_sections(markdown: &str) -> Vec<Section> {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options);

    let mut sections = Vec::new();
    let mut heading_text: Option<String> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => {
                heading_text = Some(String::new());
            }
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                if let Some(text) = heading_text.take() {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        sections.push(Section::new(trimmed));
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(buf) = heading_text.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(buf) = heading_text.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    sections
}

/// Derive a URL-safe anchor slug from heading text.
///
/// Lowercases, maps runs of non-alphanumeric characters to single hyphens,
/// and trims leading/trailing hyphens.
#[must_use]
pub(crate) fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_hyphen = true;

    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    slug.trim_end_matches('-').to_owned()
}
