use chrono::{DateTime, Utc};
use log::debug;

use crate::common::CommentEntry;

/// Ordered comments of one post, oldest first
///
/// Entries are identified by their text: removing a text drops every entry
/// that carries it, and applause goes to the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentCollection {
    entries: Vec<CommentEntry>,
}

impl CommentCollection {
    /// A collection holding only the seed comment every post starts with
    pub fn seeded(seed: &str, created_at: DateTime<Utc>) -> Self {
        let mut collection = Self::default();
        collection.append(seed.to_string(), created_at);
        collection
    }

    pub fn append(&mut self, text: String, created_at: DateTime<Utc>) -> &CommentEntry {
        debug!("appending comment #{}: {:?}", self.entries.len() + 1, text);
        self.entries.push(CommentEntry::new(text, created_at));
        &self.entries[self.entries.len() - 1]
    }

    /// Remove every entry with exactly this text and return how many went
    pub fn remove(&mut self, text: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.matches(text));
        let removed = before - self.entries.len();
        debug!("removed {} comment(s) matching {:?}", removed, text);
        removed
    }

    pub fn find_mut(&mut self, text: &str) -> Option<&mut CommentEntry> {
        self.entries.iter_mut().find(|entry| entry.matches(text))
    }

    pub fn list(&self) -> &[CommentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(unused)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
