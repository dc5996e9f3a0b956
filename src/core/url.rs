//! Route path type for type-safe URL handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Output boundary: the `url` crate percent-encodes at resolution time

use std::borrow::Borrow;
use std::sync::Arc;

/// Decoded site-relative route path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - No query string or fragment
///
/// Trailing slashes are preserved as given: `/docs` and `/docs/` are
/// distinct routes and resolve to distinct locations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Create a route path. Normalizes the leading slash, trims
    /// whitespace, strips query string and fragment.
    pub fn new(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = Self::strip_query_fragment(trimmed);

        // Add leading slash if missing
        let normalized = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        Self(Arc::from(normalized))
    }

    /// Strip query string and fragment from a path using url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // Use a dummy base URL to parse the path
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

        match base.join(path) {
            Ok(parsed) => {
                // url crate returns percent-encoded path, decode it
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            // Fallback to simple split if url parsing fails
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded route path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RoutePath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl serde::Serialize for RoutePath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RoutePath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_normalization() {
        assert_eq!(RoutePath::new("").as_str(), "/");
        assert_eq!(RoutePath::new("/").as_str(), "/");
        assert_eq!(RoutePath::new("  /  ").as_str(), "/");
    }

    #[test]
    fn test_leading_slash_added() {
        assert_eq!(RoutePath::new("docs").as_str(), "/docs");
        assert_eq!(RoutePath::new("blog/post-1").as_str(), "/blog/post-1");
    }

    #[test]
    fn test_trailing_slash_preserved() {
        assert_eq!(RoutePath::new("/docs").as_str(), "/docs");
        assert_eq!(RoutePath::new("/docs/").as_str(), "/docs/");
    }

    #[test]
    fn test_query_and_fragment_stripped() {
        assert_eq!(RoutePath::new("/docs?version=2").as_str(), "/docs");
        assert_eq!(RoutePath::new("/docs#intro").as_str(), "/docs");
        assert_eq!(RoutePath::new("/a/b?x=1#y").as_str(), "/a/b");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut routes = vec![
            RoutePath::new("/docs/z"),
            RoutePath::new("/blog/a"),
            RoutePath::new("/docs/a"),
        ];
        routes.sort();
        assert_eq!(routes[0].as_str(), "/blog/a");
        assert_eq!(routes[1].as_str(), "/docs/a");
        assert_eq!(routes[2].as_str(), "/docs/z");
    }
}
