//! Path normalization
//!
//! Navigation targets are normalized before matching:
//! - query strings and fragments are dropped: `/a?x=1#top` → `/a`
//! - backslashes become slashes: `\a\b` → `/a/b`
//! - empty segments vanish: `//a///b/` → `/a/b`

use std::borrow::Cow;

/// Returns the canonical form of `path`, borrowing when it is already canonical
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let path = path
        .find(['?', '#'])
        .map_or(path, |end| &path[..end]);

    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let segments: Vec<&str> = path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect();
    Cow::Owned(format!("/{}", segments.join("/")))
}

/// Splits a normalized path into its segments; `/` has none
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

fn is_canonical(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    path.starts_with('/')
        && !path.ends_with('/')
        && !path.contains("//")
        && !path.contains('\\')
}
