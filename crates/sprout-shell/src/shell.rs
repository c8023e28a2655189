//! The document shell: static skeleton around every page.
//!
//! The shell composes two collaborator seams: [`Provider`]s, which wrap the
//! rendered body with cross-cutting context (theme, state), and a [`Layout`],
//! which receives the navigation index and renders the actual chrome. Their
//! internals are out of scope here; the shell only assembles the document.

use sprout_config::Config;
use sprout_site::{DiscoveryError, SectionIndex, discover};
use sprout_storage::{FsStorage, Storage};

use crate::head::render_head;

/// Cross-cutting context provider.
///
/// Wraps already-rendered children with provider markup (theme scopes, state
/// containers). Providers are applied in registration order, first added
/// outermost.
pub trait Provider: Send + Sync {
    /// Wrap rendered children.
    fn wrap(&self, children: String) -> String;
}

/// Page layout collaborator.
///
/// Receives the discovered navigation index and the page body; renders the
/// chrome (sidebar, search, breadcrumbs) around it.
pub trait Layout: Send + Sync {
    /// Render the layout around the page body.
    fn render(&self, sections: &SectionIndex, children: &str) -> String;
}

/// Static document shell.
///
/// Renders the fixed skeleton (doctype, `<html>`, head, body classes) and
/// delegates the body to the provider chain and layout.
pub struct Shell {
    providers: Vec<Box<dyn Provider>>,
    layout: Box<dyn Layout>,
}

impl Shell {
    /// Create a shell around a layout.
    #[must_use]
    pub fn new(layout: Box<dyn Layout>) -> Self {
        Self {
            providers: Vec::new(),
            layout,
        }
    }

    /// Add a provider. Providers wrap the layout in registration order,
    /// first added outermost.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Provider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Render the full document for an already-discovered navigation index.
    #[must_use]
    pub fn render(
        &self,
        sections: &SectionIndex,
        children: &str,
        page_title: Option<&str>,
    ) -> String {
        let mut body = format!(
            r#"<div class="w-full">{}</div>"#,
            self.layout.render(sections, children)
        );
        for provider in self.providers.iter().rev() {
            body = provider.wrap(body);
        }

        let mut out = String::with_capacity(body.len() + 1024);
        out.push_str("<!DOCTYPE html>");
        out.push_str(r#"<html lang="en" class="h-full">"#);
        out.push_str(&render_head(page_title));
        out.push_str(r#"<body class="flex min-h-full bg-white antialiased dark:bg-zinc-900">"#);
        out.push_str(&body);
        out.push_str("</body></html>");
        out
    }

    /// Run the discovery pass against a content root and render the document.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if the discovery pass fails; the render is
    /// abandoned outright, there is no fallback document.
    pub fn render_root(
        &self,
        storage: &dyn Storage,
        children: &str,
        page_title: Option<&str>,
    ) -> Result<String, DiscoveryError> {
        let sections = discover(storage)?;
        tracing::debug!(page_count = sections.len(), "Rendering document shell");
        Ok(self.render(&sections, children, page_title))
    }

    /// Render the document using the configured content root.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if the discovery pass fails.
    pub fn render_with_config(
        &self,
        config: &Config,
        children: &str,
        page_title: Option<&str>,
    ) -> Result<String, DiscoveryError> {
        let storage = FsStorage::with_pattern(
            config.content_resolved.source_dir.clone(),
            &config.content_resolved.pattern,
        );
        self.render_root(&storage, children, page_title)
    }
}

#[cfg(test)]
mod tests {
    // Ensure Shell is Send + Sync for use across threads
    static_assertions::assert_impl_all!(super::Shell: Send, Sync);

    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use sprout_storage::MockStorage;

    use super::*;

    struct PlainLayout;

    impl Layout for PlainLayout {
        fn render(&self, sections: &SectionIndex, children: &str) -> String {
            format!(r#"<main data-pages="{}">{children}</main>"#, sections.len())
        }
    }

    struct TaggedProvider(&'static str);

    impl Provider for TaggedProvider {
        fn wrap(&self, children: String) -> String {
            format!(r#"<div data-provider="{}">{children}</div>"#, self.0)
        }
    }

    fn shell() -> Shell {
        Shell::new(Box::new(PlainLayout))
    }

    #[test]
    fn test_render_document_skeleton() {
        let html = shell().render(&SectionIndex::new(), "<p>Hi</p>", None);

        assert!(html.starts_with(r#"<!DOCTYPE html><html lang="en" class="h-full"><head>"#));
        assert!(html.contains(
            r#"<body class="flex min-h-full bg-white antialiased dark:bg-zinc-900">"#
        ));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn test_render_forwards_sections_and_children_to_layout() {
        let mut sections = SectionIndex::new();
        sections.insert("/guide".to_owned(), Vec::new());
        sections.insert("/api".to_owned(), Vec::new());

        let html = shell().render(&sections, "<p>Body</p>", None);

        assert!(html.contains(r#"<main data-pages="2"><p>Body</p></main>"#));
    }

    #[test]
    fn test_render_wraps_layout_in_providers_first_added_outermost() {
        let shell = shell()
            .with_provider(TaggedProvider("outer"))
            .with_provider(TaggedProvider("inner"));

        let html = shell.render(&SectionIndex::new(), "", None);

        let outer = html.find(r#"data-provider="outer""#).unwrap();
        let inner = html.find(r#"data-provider="inner""#).unwrap();
        assert!(outer < inner);
    }

    #[test]
    fn test_render_root_with_content() {
        let storage = MockStorage::new()
            .with_file("index.md", "# Home\n\n## Intro\n")
            .with_file("guides/setup.md", "# Setup\n\n## Install\n");

        let html = shell()
            .render_root(&storage, "<p>Body</p>", Some("Home"))
            .unwrap();

        assert!(html.contains(r#"<main data-pages="2">"#));
        assert!(html.contains("<title>Home - React sprout</title>"));
    }

    #[test]
    fn test_render_root_fails_when_discovery_fails() {
        let storage = MockStorage::new()
            .with_file("good.md", "## Fine\n")
            .with_failing_file("broken.md");

        let result = shell().render_root(&storage, "", None);

        assert!(matches!(result, Err(DiscoveryError::Load { .. })));
    }

    #[test]
    fn test_render_with_config_uses_configured_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("pages");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("guide.md"), "# Guide\n\n## Basics\n").unwrap();
        let config_path = temp_dir.path().join("sprout.toml");
        fs::write(&config_path, "[content]\nsource_dir = \"pages\"\n").unwrap();

        let config = Config::load(Some(Path::new(&config_path))).unwrap();

        let html = shell()
            .render_with_config(&config, "<p>Body</p>", None)
            .unwrap();

        assert!(html.contains(r#"<main data-pages="1">"#));
    }

    #[test]
    fn test_render_is_pure_for_same_inputs() {
        let mut sections = SectionIndex::new();
        sections.insert("/guide".to_owned(), Vec::new());

        let first = shell().render(&sections, "<p>Body</p>", Some("Guide"));
        let second = shell().render(&sections, "<p>Body</p>", Some("Guide"));

        assert_eq!(first, second);
    }
}
