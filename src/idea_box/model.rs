use crate::error::{IdeaBoxError, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Format used for `created_at`, in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A single stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
}

impl Idea {
    /// `tags` are expected to be normalized already (see [`crate::tags::normalize_tags`]).
    pub fn new(id: u64, text: String, tags: Vec<String>) -> Self {
        Self {
            id,
            text,
            tags,
            created_at: now_timestamp(),
        }
    }

    /// Comma-joined tags, or `(none)`.
    pub fn tags_label(&self) -> String {
        if self.tags.is_empty() {
            "(none)".to_string()
        } else {
            self.tags.join(", ")
        }
    }

    /// Text and tags joined by a space, lowercased. This is what search matches against.
    pub fn haystack(&self) -> String {
        format!("{} {}", self.text, self.tags.join(" ")).to_lowercase()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// The persisted document: the id counter plus every idea in append order.
///
/// `last_id` only ever grows. Removing an idea never gives its id back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub last_id: u64,
    pub items: Vec<Idea>,
}

impl Collection {
    /// Reserves the next id and bumps the counter.
    pub fn next_id(&mut self) -> Result<u64> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| IdeaBoxError::Store("id counter exhausted".to_string()))?;
        Ok(self.last_id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut Idea> {
        self.items.iter_mut().find(|idea| idea.id == id)
    }

    /// Removes the idea with `id`, returning it if it was present.
    pub fn remove(&mut self, id: u64) -> Option<Idea> {
        let pos = self.items.iter().position(|idea| idea.id == id)?;
        Some(self.items.remove(pos))
    }
}
