//! Configuration section definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// [site]
// ============================================================================

/// Site metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title.
    pub title: String,

    /// Base site URL all routes resolve against (e.g., "https://example.com").
    pub url: Option<String>,
}

// ============================================================================
// [build]
// ============================================================================

/// Build settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Content directory scanned for pages (relative to project root).
    pub content: PathBuf,

    /// Output directory the sitemap file is written under.
    pub output: PathBuf,

    /// Strip whitespace from the generated XML.
    pub minify: bool,

    /// Sitemap output settings.
    pub sitemap: SitemapConfig,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "dist".into(),
            minify: false,
            sitemap: SitemapConfig::default(),
        }
    }
}

/// Sitemap generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for sitemap file.
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}
