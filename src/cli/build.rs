//! Build command implementation.

use std::fs;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::log;
use crate::page::scan_pages;
use crate::sitemap::{self, xml};
use crate::utils::plural_count;

/// Generate the sitemap file.
///
/// Scans the content index, builds the entry list, and writes the
/// rendered urlset under the output directory. Any failure aborts
/// without writing partial output.
pub fn build_sitemap(config: &SiteConfig) -> Result<()> {
    if !config.build.sitemap.enable {
        log!("sitemap"; "generation disabled in config");
        return Ok(());
    }

    let pages = scan_pages(config)?;
    let entries = sitemap::build_entries(config.domain(), &pages)?;

    let rendered = xml::render(&entries);
    let rendered = xml::minify_xml(&rendered, config.build.minify);

    let sitemap_path = config.sitemap_path();
    if let Some(parent) = sitemap_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&sitemap_path, rendered.as_bytes())
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

    log!(
        "sitemap";
        "{} ({})",
        sitemap_path.file_name().unwrap_or_default().to_string_lossy(),
        plural_count(entries.len(), "url")
    );
    Ok(())
}
