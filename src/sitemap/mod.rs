//! Sitemap entry construction.
//!
//! The site's sitemap is the fixed static-route table followed by one
//! entry per content page. Construction is a pure function of the base
//! URL and the page list: no partial output, no hidden state, identical
//! inputs produce identical entries.

pub mod xml;

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::core::RoutePath;
use crate::page::ContentPage;

/// Expected update cadence hint for a sitemap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A single `<url>` record of the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Absolute URL of the page.
    pub loc: String,
    /// Last modification date, when the page carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    pub change_frequency: ChangeFrequency,
    /// Relative importance hint in `[0.0, 1.0]`.
    pub priority: f32,
}

/// A hand-declared top-level route with its cadence and priority.
struct StaticRoute {
    path: &'static str,
    change_frequency: ChangeFrequency,
    priority: f32,
}

/// Top-level routes every sitemap carries, in emission order.
const STATIC_ROUTES: &[StaticRoute] = &[
    StaticRoute {
        path: "/",
        change_frequency: ChangeFrequency::Monthly,
        priority: 1.0,
    },
    StaticRoute {
        path: "/docs",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    },
    StaticRoute {
        path: "/blog",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    },
];

/// Cadence assigned to every content-index page.
const PAGE_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Weekly;
/// Priority assigned to every content-index page.
const PAGE_PRIORITY: f32 = 0.5;

/// Sitemap construction errors. Any failure aborts the whole build;
/// no partial entry list is ever returned.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("base URL `{url}` is not a valid absolute base URL")]
    Domain {
        url: String,
        #[source]
        source: Option<url::ParseError>,
    },

    #[error("route `{route}` cannot be resolved against the base URL")]
    RoutePath {
        route: RoutePath,
        #[source]
        source: url::ParseError,
    },
}

/// Build the full entry list for a site.
///
/// Static routes come first, in declared order; content pages follow in
/// the order given. Every route resolves against `domain`, and a single
/// unresolvable route fails the whole build.
pub fn build_entries(
    domain: &str,
    pages: &[ContentPage],
) -> Result<Vec<SitemapEntry>, SitemapError> {
    let base = Url::parse(domain).map_err(|source| SitemapError::Domain {
        url: domain.to_string(),
        source: Some(source),
    })?;

    // Parseable but non-base URLs (mailto:, data:) are a configuration
    // defect of the domain, not of any individual route.
    if base.cannot_be_a_base() {
        return Err(SitemapError::Domain {
            url: domain.to_string(),
            source: None,
        });
    }

    let mut entries = Vec::with_capacity(STATIC_ROUTES.len() + pages.len());

    for route in STATIC_ROUTES {
        entries.push(SitemapEntry {
            loc: resolve(&base, &RoutePath::new(route.path))?,
            lastmod: None,
            change_frequency: route.change_frequency,
            priority: route.priority,
        });
    }

    // Each page resolves independently; the parallel map preserves input
    // order, so output order always equals page order.
    let dynamic = pages
        .par_iter()
        .map(|page| {
            Ok(SitemapEntry {
                loc: resolve(&base, &page.route)?,
                lastmod: page.lastmod().map(str::to_string),
                change_frequency: PAGE_CHANGE_FREQUENCY,
                priority: PAGE_PRIORITY,
            })
        })
        .collect::<Result<Vec<_>, SitemapError>>()?;

    entries.extend(dynamic);
    Ok(entries)
}

/// Resolve a route against the base URL.
fn resolve(base: &Url, route: &RoutePath) -> Result<String, SitemapError> {
    base.join(route.as_str())
        .map(|url| url.to_string())
        .map_err(|source| SitemapError::RoutePath {
            route: route.clone(),
            source,
        })
}
