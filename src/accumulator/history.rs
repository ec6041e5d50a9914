//! Chronological log of applied operations.

use std::ops::Index;
use std::slice;

use serde::Serialize;

/// Append-only list of human-readable operation descriptions.
///
/// Entries are only ever pushed by [`Accumulator`](super::Accumulator), one
/// per applied operation. The public API is read-only: there is no way to
/// remove, reorder or clear entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Returns the most recent entry.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Iterates over entries in the order they were recorded.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Returns all entries as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl Index<usize> for History {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
