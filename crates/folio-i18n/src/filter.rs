//! Which request paths the locale interceptor handles
//!
//! Static assets and framework-internal paths are served as-is; only page
//! paths are forced into the locale-prefixed URL space.

use crate::routing::segment_prefix;

/// Internal prefixes excluded when nothing else is configured
pub const DEFAULT_INTERNAL_PREFIXES: &[&str] = &["/_next", "/_static", "/health"];

/// Path exclusion rules for the locale interceptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    internal_prefixes: Vec<String>,
    skip_file_paths: bool,
}

impl PathFilter {
    /// Create a filter.
    ///
    /// Prefixes are normalized to a single leading slash and no trailing
    /// slash; empty prefixes are ignored.
    pub fn new<I, S>(internal_prefixes: I, skip_file_paths: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let internal_prefixes = internal_prefixes
            .into_iter()
            .map(|p| p.as_ref().trim().trim_matches('/').to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            internal_prefixes,
            skip_file_paths,
        }
    }

    /// Whether the interceptor should run for `path`.
    ///
    /// Paths containing a `.` anywhere are treated as files when
    /// `skip_file_paths` is set.
    pub fn should_intercept(&self, path: &str) -> bool {
        if self.skip_file_paths && path.contains('.') {
            return false;
        }
        !self
            .internal_prefixes
            .iter()
            .any(|prefix| segment_prefix(path, prefix).is_some())
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(DEFAULT_INTERNAL_PREFIXES.iter().copied(), true)
    }
}
