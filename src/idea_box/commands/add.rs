use crate::commands::{CmdMessage, CmdResult};
use crate::error::{IdeaBoxError, Result};
use crate::model::Idea;
use crate::store::DataStore;
use crate::tags::normalize_tags;
use tracing::debug;

pub const USAGE: &str = r#"Nothing to add. Usage: add "your idea" --tags ai,tools"#;

pub fn run<S: DataStore, I: AsRef<str>>(store: &mut S, text: &str, tags: &[I]) -> Result<CmdResult> {
    let tags = normalize_tags(tags);
    let text = text.trim();
    if text.is_empty() {
        return Err(IdeaBoxError::Usage(USAGE.to_string()));
    }

    let mut collection = store.load();
    let id = collection.next_id()?;
    let idea = Idea::new(id, text.to_string(), tags);
    collection.items.push(idea.clone());
    store.save(&collection)?;
    debug!(id, tags = ?idea.tags, "added idea");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "✅ Saved idea #{} with tags: {}",
        id,
        idea.tags_label()
    )));
    Ok(result.with_affected_ideas(vec![idea]))
}
