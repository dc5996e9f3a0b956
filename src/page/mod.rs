//! Content index: enumerate the site's publicly addressable pages.
//!
//! Walks the configured content directory and maps every content source
//! file to its site-relative route, carrying frontmatter metadata along.
//! Drafts never reach the sitemap.

mod meta;
mod scan;

pub use meta::PageMeta;
pub use scan::scan_pages;

use crate::core::RoutePath;
use serde::Serialize;

/// A page enumerated by the content index
///
/// Pairs the computed route with the page's frontmatter metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ContentPage {
    /// Site-relative route (e.g., `/docs/intro`).
    pub route: RoutePath,
    /// Frontmatter metadata (flattened in JSON output).
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl ContentPage {
    pub fn new(route: RoutePath, meta: PageMeta) -> Self {
        Self { route, meta }
    }

    /// Check if this page is a draft.
    #[inline]
    pub fn is_draft(&self) -> bool {
        self.meta.draft
    }

    /// Last modification date from frontmatter, if any.
    pub fn lastmod(&self) -> Option<&str> {
        self.meta.date.as_deref()
    }
}
