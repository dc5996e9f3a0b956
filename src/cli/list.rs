//! List command implementation.
//!
//! Prints the full entry table as JSON, for piping into other tools.

use std::io::Write;

use anyhow::Result;

use crate::config::SiteConfig;
use crate::page::scan_pages;
use crate::sitemap;

/// Execute list command
pub fn list_entries(config: &SiteConfig) -> Result<()> {
    let pages = scan_pages(config)?;
    let entries = sitemap::build_entries(config.domain(), &pages)?;

    let json = serde_json::to_string_pretty(&entries)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
