use crate::model::Idea;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod add;
pub mod addtag;
pub mod export;
pub mod list;
pub mod remove;
pub mod search;
pub mod stats;
pub mod tag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Aggregate counts reported by `stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStats {
    pub total: usize,
    /// Lowercased tag to number of ideas carrying it, sorted by tag.
    pub by_tag: BTreeMap<String, usize>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_ideas: Vec<Idea>,
    pub listed_ideas: Vec<Idea>,
    pub stats: Option<TagStats>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_ideas(mut self, ideas: Vec<Idea>) -> Self {
        self.affected_ideas = ideas;
        self
    }

    pub fn with_listed_ideas(mut self, ideas: Vec<Idea>) -> Self {
        self.listed_ideas = ideas;
        self
    }

    pub fn with_stats(mut self, stats: TagStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }
}
