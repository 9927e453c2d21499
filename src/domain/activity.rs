//! Console-style activity feed: a bounded, newest-first ring buffer.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter};

/// Entries kept before the oldest is evicted.
pub const ACTIVITY_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr, Serialize, Deserialize)]
pub enum ActivityCategory {
    #[strum(serialize = "cache")]
    Cache,
    #[strum(serialize = "database")]
    Database,
    #[strum(serialize = "other")]
    Other,
}

impl ActivityCategory {
    /// Maps the backend `type` tag (`redis`, `sql`, `sim`, `info`, ...).
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "redis" | "cache" => Self::Cache,
            "sql" | "mysql" | "database" | "db" => Self::Database,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub category: ActivityCategory,
    pub message: String,
    pub icon: Option<String>,
}

impl ActivityEntry {
    pub fn new(timestamp: impl Into<String>, category: ActivityCategory, message: impl Into<String>) -> Self {
        Self { timestamp: timestamp.into(), category, message: message.into(), icon: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(ACTIVITY_CAPACITY)
    }
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity + 1), capacity }
    }

    /// Prepend, evicting the oldest entry past capacity.
    pub fn push(&mut self, entry: ActivityEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Replace the whole feed with a backend copy (already newest first).
    pub fn replace(&mut self, entries: Vec<ActivityEntry>) {
        self.entries = entries.into_iter().take(self.capacity).collect();
    }

    /// Non-mutating view over the live buffer, newest first.
    pub fn filter_by_category(&self, category: ActivityCategory) -> impl Iterator<Item = &ActivityEntry> + '_ {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
