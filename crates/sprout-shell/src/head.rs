//! Document head metadata.
//!
//! Everything here is declared statically: the title template, icon links,
//! and meta tags are constants, not data-driven. The icon and manifest paths
//! point at the conventional public-assets location.

use std::fmt::Write;

use crate::html::escape_html;

/// Default document title, used when a page supplies none.
pub const DEFAULT_TITLE: &str = "React sprout";

/// Suffix appended to page titles.
const TITLE_SUFFIX: &str = " - React sprout";

/// Fixed icon/manifest link tags emitted in every document head.
pub const ICON_LINKS: &[IconLink] = &[
    IconLink {
        rel: "apple-touch-icon",
        sizes: Some("180x180"),
        link_type: None,
        href: "/apple-touch-icon.png",
        color: None,
    },
    IconLink {
        rel: "icon",
        sizes: Some("32x32"),
        link_type: Some("image/png"),
        href: "/favicon-32x32.png",
        color: None,
    },
    IconLink {
        rel: "icon",
        sizes: Some("16x16"),
        link_type: Some("image/png"),
        href: "/favicon-16x16.png",
        color: None,
    },
    IconLink {
        rel: "manifest",
        sizes: None,
        link_type: None,
        href: "/site.webmanifest",
        color: None,
    },
    IconLink {
        rel: "mask-icon",
        sizes: None,
        link_type: None,
        href: "/safari-pinned-tab.svg",
        color: Some("#12c974"),
    },
];

/// Fixed meta tags emitted in every document head.
pub const META_TAGS: &[MetaTag] = &[
    MetaTag {
        name: "apple-mobile-web-app-title",
        content: "React Sprout",
    },
    MetaTag {
        name: "application-name",
        content: "React Sprout",
    },
    MetaTag {
        name: "msapplication-TileColor",
        content: "#00aba9",
    },
    MetaTag {
        name: "theme-color",
        content: "#ffffff",
    },
];

/// One `<link>` tag in the document head.
#[derive(Debug)]
pub struct IconLink {
    /// Link relation (e.g., "icon", "manifest").
    pub rel: &'static str,
    /// Icon dimensions attribute, if any.
    pub sizes: Option<&'static str>,
    /// MIME type attribute, if any.
    pub link_type: Option<&'static str>,
    /// Asset path under the public-assets root.
    pub href: &'static str,
    /// Mask icon color attribute, if any.
    pub color: Option<&'static str>,
}

/// One `<meta name=...>` tag in the document head.
#[derive(Debug)]
pub struct MetaTag {
    /// Meta tag name.
    pub name: &'static str,
    /// Meta tag content.
    pub content: &'static str,
}

/// Resolve the document title for a page.
///
/// A page title is rendered through the title template; `None` falls back to
/// the default title.
#[must_use]
pub fn document_title(page_title: Option<&str>) -> String {
    match page_title {
        Some(title) => format!("{title}{TITLE_SUFFIX}"),
        None => DEFAULT_TITLE.to_owned(),
    }
}

/// Render the full `<head>` element.
#[must_use]
pub fn render_head(page_title: Option<&str>) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("<head>");

    write!(
        out,
        "<title>{}</title>",
        escape_html(&document_title(page_title))
    )
    .unwrap();

    for link in ICON_LINKS {
        out.push_str("<link rel=\"");
        out.push_str(link.rel);
        out.push('"');
        if let Some(link_type) = link.link_type {
            write!(out, " type=\"{link_type}\"").unwrap();
        }
        if let Some(sizes) = link.sizes {
            write!(out, " sizes=\"{sizes}\"").unwrap();
        }
        write!(out, " href=\"{}\"", link.href).unwrap();
        if let Some(color) = link.color {
            write!(out, " color=\"{color}\"").unwrap();
        }
        out.push('>');
    }

    for meta in META_TAGS {
        write!(
            out,
            "<meta name=\"{}\" content=\"{}\">",
            meta.name, meta.content
        )
        .unwrap();
    }

    out.push_str("</head>");
    out
}
