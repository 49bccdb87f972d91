//! URL-to-page resolution
//!
//! Every page the quiz can show is derived from the current URL. Resolution
//! is a pure function of the path; query strings and fragments are ignored.
//!
//! ```
//! use libvocab::route::{resolve_path, Page};
//!
//! assert_eq!(resolve_path("/word/7"), Page::Word(7));
//! assert_eq!(resolve_path("/result"), Page::Result);
//! assert_eq!(resolve_path("/nope"), Page::NotFound);
//! ```

use reqwest::Url;

/// Pages reachable by URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    NotFound,
    Word(i64),
    Result,
}

impl Page {
    /// Canonical path for this page, `None` for [`Page::NotFound`]
    pub fn path(&self) -> Option<String> {
        match self {
            Page::NotFound => None,
            Page::Word(id) => Some(word_path(*id)),
            Page::Result => Some(RESULT_PATH.to_string()),
        }
    }
}

pub const RESULT_PATH: &str = "/result";

/// Path of the word page for `id`
pub fn word_path(id: i64) -> String {
    format!("/word/{}", id)
}

/// Resolve a parsed URL to a page.
pub fn resolve(url: &Url) -> Page {
    resolve_path(url.path())
}

/// Resolve a bare path (optionally carrying `?query` or `#fragment`).
///
/// The root path has no page of its own and resolves to [`Page::NotFound`].
pub fn resolve_path(path: &str) -> Page {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    // A single trailing slash is tolerated, but "/" itself stays the root.
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };

    // Exactly one leading slash; "//result" is not "/result"
    let Some(rest) = path.strip_prefix('/') else {
        return Page::NotFound;
    };
    if rest.is_empty() {
        return Page::NotFound;
    }

    let mut segments = rest.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some("word"), Some(id), None) => parse_id(id).map_or(Page::NotFound, Page::Word),
        (Some("result"), None, None) => Page::Result,
        _ => Page::NotFound,
    }
}

/// Base-10 integer with an optional leading minus sign and nothing else.
fn parse_id(segment: &str) -> Option<i64> {
    let digits = segment.strip_prefix('-').unwrap_or(segment);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
