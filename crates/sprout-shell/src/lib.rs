//! Presentation shell and branding for the Sprout documentation scaffold.
//!
//! The shell is the static outer document structure wrapping every page: it
//! emits the document head (title, icon links, meta tags), runs the content
//! discovery pass, and hands the resulting navigation index to the layout
//! collaborator inside the provider chain. The shell has no behavior of its
//! own beyond this composition; all interactivity lives in the [`Provider`]
//! and [`Layout`] implementations supplied by the caller.
//!
//! # Example
//!
//! ```
//! use sprout_shell::{Layout, Shell};
//! use sprout_site::SectionIndex;
//!
//! struct Sidebar;
//!
//! impl Layout for Sidebar {
//!     fn render(&self, sections: &SectionIndex, children: &str) -> String {
//!         format!("<main data-pages=\"{}\">{children}</main>", sections.len())
//!     }
//! }
//!
//! let shell = Shell::new(Box::new(Sidebar));
//! let html = shell.render(&SectionIndex::new(), "<p>Hello</p>", None);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod head;
mod html;
mod logo;
mod shell;

pub use html::escape_html;
pub use logo::{LOGO_SRC, Logo, WORDMARK};
pub use shell::{Layout, Provider, Shell};
