//! Page metadata from TOML frontmatter.

use serde::{Deserialize, Serialize};

/// Frontmatter delimiter line.
const FENCE: &str = "+++";

/// Page metadata parsed from a `+++`-fenced TOML frontmatter block
///
/// | Field   | Type     | Description                    |
/// |---------|----------|--------------------------------|
/// | `title` | `String` | Page title                     |
/// | `date`  | `String` | Last modification date (W3C)   |
/// | `draft` | `bool`   | Draft status (default: false)  |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: Option<String>,
    /// Last modification date, emitted as the sitemap `<lastmod>`.
    pub date: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
}

impl PageMeta {
    /// Extract metadata from a content source.
    ///
    /// Returns the default (empty) metadata when the source carries no
    /// frontmatter block, or `Err` when the block is not valid TOML.
    pub fn from_source(source: &str) -> Result<Self, toml::de::Error> {
        match extract_frontmatter(source) {
            Some(block) => toml::from_str(block),
            None => Ok(Self::default()),
        }
    }
}

/// Extract the raw TOML between the opening and closing `+++` fences.
///
/// The opening fence must be the first non-empty line of the file.
fn extract_frontmatter(source: &str) -> Option<&str> {
    let trimmed = source.trim_start();
    let rest = trimmed.strip_prefix(FENCE)?;

    // Fence must be a full line
    let rest = rest.strip_prefix('\n').or_else(|| {
        rest.strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\r'))
    })?;

    let end = rest.find(&format!("\n{FENCE}"))?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_frontmatter() {
        let meta = PageMeta::from_source("# Hello\n\nBody text.").unwrap();
        assert_eq!(meta.title, None);
        assert_eq!(meta.date, None);
        assert!(!meta.draft);
    }

    #[test]
    fn test_full_frontmatter() {
        let source = "+++\ntitle = \"Intro\"\ndate = \"2026-01-15\"\ndraft = true\n+++\n\nBody.";
        let meta = PageMeta::from_source(source).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Intro"));
        assert_eq!(meta.date.as_deref(), Some("2026-01-15"));
        assert!(meta.draft);
    }

    #[test]
    fn test_partial_frontmatter_keeps_defaults() {
        let meta = PageMeta::from_source("+++\ndate = \"2026-02-01\"\n+++\n").unwrap();
        assert_eq!(meta.date.as_deref(), Some("2026-02-01"));
        assert!(!meta.draft);
    }

    #[test]
    fn test_unclosed_fence_is_not_frontmatter() {
        let meta = PageMeta::from_source("+++\ntitle = \"x\"\nno closing fence").unwrap();
        assert_eq!(meta.title, None);
    }

    #[test]
    fn test_invalid_toml_errors() {
        assert!(PageMeta::from_source("+++\ntitle = \n+++\n").is_err());
    }

    #[test]
    fn test_fence_must_open_the_file() {
        let meta = PageMeta::from_source("intro line\n+++\ntitle = \"x\"\n+++\n").unwrap();
        assert_eq!(meta.title, None);
    }
}
