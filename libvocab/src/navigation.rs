//! Client-side navigation: link classification and session history
//!
//! Links inside the app's origin are followed without leaving the app;
//! anything pointing at another origin is reported as external.

use reqwest::Url;

/// Where a link leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Same origin as the app, followed client-side
    Internal(Url),
    /// Another origin, left to the outside world
    External(Url),
}

/// Session history of visited URLs with back/forward movement.
#[derive(Debug, Clone)]
pub struct History {
    origin: Url,
    entries: Vec<Url>,
    index: usize,
}

impl History {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            entries: Vec::new(),
            index: 0,
        }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Classify `href`, which may be absolute or relative to the origin.
    ///
    /// Returns `None` when `href` cannot be parsed as a URL reference.
    pub fn classify(&self, href: &str) -> Option<Link> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        let url = self.origin.join(href).ok()?;
        if url.origin() == self.origin.origin() {
            Some(Link::Internal(url))
        } else {
            Some(Link::External(url))
        }
    }

    /// Record a navigation, dropping any forward entries.
    pub fn push(&mut self, url: Url) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url);
        self.index = self.entries.len() - 1;
    }

    pub fn current(&self) -> Option<&Url> {
        self.entries.get(self.index)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Step back, returning the new current entry
    pub fn back(&mut self) -> Option<&Url> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        self.current()
    }

    /// Step forward, returning the new current entry
    pub fn forward(&mut self) -> Option<&Url> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        self.current()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
