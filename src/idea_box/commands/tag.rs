use crate::commands::{CmdMessage, CmdResult};
use crate::error::{IdeaBoxError, Result};
use crate::store::DataStore;

pub const USAGE: &str = "Provide a tag. Example: tag ai";

/// Ideas carrying exactly `tag` (case-insensitive), in storage order.
pub fn run<S: DataStore>(store: &S, tag: &str) -> Result<CmdResult> {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return Err(IdeaBoxError::Usage(USAGE.to_string()));
    }

    let matches: Vec<_> = store
        .load()
        .items
        .into_iter()
        .filter(|idea| idea.has_tag(&tag))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning(format!("No ideas with tag: {}", tag)));
    }
    Ok(result.with_listed_ideas(matches))
}
