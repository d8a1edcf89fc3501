//! Lazy mount bookkeeping
//!
//! Append-only set of every key that has been active. Keys of removed
//! panes stay behind; tab counts are small enough that this never matters.

use indexmap::IndexSet;

#[derive(Debug, Clone, Default)]
pub struct LazyMountSet {
    visited: IndexSet<String>,
}

impl LazyMountSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with the initial active key, if any
    pub fn seeded(initial: Option<&str>) -> Self {
        let mut set = Self::new();
        if let Some(key) = initial {
            set.record_visit(key);
        }
        set
    }

    /// Idempotent; returns true the first time a key is seen
    pub fn record_visit(&mut self, key: &str) -> bool {
        if self.visited.contains(key) {
            return false;
        }
        tracing::debug!(key = %key, "Pane mounted for the first time");
        self.visited.insert(key.to_string())
    }

    pub fn has_visited(&self, key: &str) -> bool {
        self.visited.contains(key)
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Visited keys in first-visit order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.visited.iter().map(String::as_str)
    }
}
