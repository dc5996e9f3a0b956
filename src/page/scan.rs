//! Content directory scanning.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use jwalk::WalkDir;
use rayon::prelude::*;

use super::{ContentPage, PageMeta};
use crate::config::SiteConfig;
use crate::core::RoutePath;
use crate::debug;

/// Content source extensions the index recognizes.
const CONTENT_EXTENSIONS: &[&str] = &["md", "typ"];

/// Enumerate all content pages under the configured content directory.
///
/// Routes derive from the file path relative to the content root:
/// extensions are stripped, and `index.*` collapses to its directory
/// (`docs/intro.md` -> `/docs/intro`, `blog/index.md` -> `/blog`).
/// Drafts and hidden files are skipped. The result is sorted by route
/// and deduplicated, so repeated scans of the same tree are identical.
pub fn scan_pages(config: &SiteConfig) -> Result<Vec<ContentPage>> {
    let content_dir = config.content_dir();
    if !content_dir.exists() {
        debug!("scan"; "content directory {} does not exist", content_dir.display());
        return Ok(Vec::new());
    }

    // jwalk parallelizes the directory walk itself; per-file work below
    // runs on the rayon pool.
    let files: Vec<_> = WalkDir::new(&content_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| is_content_file(path))
        .collect();

    let mut pages = files
        .par_iter()
        .map(|path| {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let meta = match PageMeta::from_source(&source) {
                Ok(meta) => meta,
                Err(e) => {
                    crate::log!("warning"; "ignoring bad frontmatter in {}: {}", path.display(), e);
                    PageMeta::default()
                }
            };
            Ok(ContentPage::new(route_for(&content_dir, path), meta))
        })
        .collect::<Result<Vec<_>>>()?;

    let total = pages.len();
    pages.retain(|page| !page.is_draft());
    let drafts = total - pages.len();
    if drafts > 0 {
        debug!("scan"; "skipped {} draft(s)", drafts);
    }

    // Deterministic output: sorted by route, one page per route
    pages.sort_by(|a, b| a.route.cmp(&b.route));
    pages.dedup_by(|a, b| a.route == b.route);

    Ok(pages)
}

/// Check whether a path is a recognized content source.
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

/// Compute the site-relative route for a content file.
///
/// `index` files take their parent directory's route; everything else
/// keeps its stem as the final segment.
fn route_for(content_dir: &Path, path: &Path) -> RoutePath {
    let relative = path.strip_prefix(content_dir).unwrap_or(path);
    let stripped = relative.with_extension("");

    let segments: Vec<&str> = stripped
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    let joined = match segments.split_last() {
        Some((last, parents)) if *last == "index" => parents.join("/"),
        Some(_) => segments.join("/"),
        None => String::new(),
    };

    RoutePath::new(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn site_with_content(content: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = Some("https://example.com".to_string());
        config.root = content.parent().unwrap().to_path_buf();
        config.build.content = PathBuf::from(content.file_name().unwrap());
        config
    }

    fn write_page(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_route_for_plain_file() {
        let root = Path::new("/site/content");
        assert_eq!(
            route_for(root, Path::new("/site/content/docs/intro.md")).as_str(),
            "/docs/intro"
        );
    }

    #[test]
    fn test_route_for_index_collapses() {
        let root = Path::new("/site/content");
        assert_eq!(
            route_for(root, Path::new("/site/content/blog/index.md")).as_str(),
            "/blog"
        );
        assert_eq!(
            route_for(root, Path::new("/site/content/index.md")).as_str(),
            "/"
        );
    }

    #[test]
    fn test_route_for_nested_index() {
        let root = Path::new("/site/content");
        assert_eq!(
            route_for(root, Path::new("/site/content/blog/post-1/index.typ")).as_str(),
            "/blog/post-1"
        );
    }

    #[test]
    fn test_is_content_file() {
        assert!(is_content_file(Path::new("a/b.md")));
        assert!(is_content_file(Path::new("a/b.typ")));
        assert!(!is_content_file(Path::new("a/b.png")));
        assert!(!is_content_file(Path::new("a/b")));
    }

    #[test]
    fn test_scan_missing_content_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = site_with_content(&dir.path().join("content"));
        assert!(scan_pages(&config).unwrap().is_empty());
    }

    #[test]
    fn test_scan_collects_sorted_routes() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write_page(&content, "docs/intro.md", "# Intro");
        write_page(&content, "blog/post-1.md", "+++\ndate = \"2026-03-01\"\n+++\nHello");
        write_page(&content, "notes.txt", "ignored");

        let config = site_with_content(&content);
        let pages = scan_pages(&config).unwrap();

        let routes: Vec<&str> = pages.iter().map(|p| p.route.as_str()).collect();
        assert_eq!(routes, vec!["/blog/post-1", "/docs/intro"]);
        assert_eq!(pages[0].lastmod(), Some("2026-03-01"));
        assert_eq!(pages[1].lastmod(), None);
    }

    #[test]
    fn test_scan_skips_drafts() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write_page(&content, "blog/wip.md", "+++\ndraft = true\n+++\nWIP");
        write_page(&content, "blog/done.md", "Done");

        let config = site_with_content(&content);
        let pages = scan_pages(&config).unwrap();
        let routes: Vec<&str> = pages.iter().map(|p| p.route.as_str()).collect();
        assert_eq!(routes, vec!["/blog/done"]);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write_page(&content, "docs/a.md", "A");
        write_page(&content, "docs/b.md", "B");

        let config = site_with_content(&content);
        let first: Vec<String> = scan_pages(&config)
            .unwrap()
            .iter()
            .map(|p| p.route.to_string())
            .collect();
        let second: Vec<String> = scan_pages(&config)
            .unwrap()
            .iter()
            .map(|p| p.route.to_string())
            .collect();
        assert_eq!(first, second);
    }
}
