use crate::commands::{CmdMessage, CmdResult};
use crate::error::{IdeaBoxError, Result};
use crate::store::DataStore;

pub const USAGE: &str = "Provide a search term. Example: search prototype";

/// Case-insensitive substring search over each idea's text and tags.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Err(IdeaBoxError::Usage(USAGE.to_string()));
    }

    let matches: Vec<_> = store
        .load()
        .items
        .into_iter()
        .filter(|idea| idea.haystack().contains(&query))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning("No matches."));
    }
    Ok(result.with_listed_ideas(matches))
}
