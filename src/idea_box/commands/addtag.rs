//! Adding tags to an existing idea.
//!
//! New tags are normalized, then merged with [`merge_tags`]: existing tags stay
//! where they are and new ones go at the end. The merged list is not re-sorted,
//! so an idea's tags are only guaranteed sorted until its first `addtag`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{IdeaBoxError, Result};
use crate::store::DataStore;
use crate::tags::{merge_tags, normalize_tags};
use tracing::debug;

pub fn run<S: DataStore, I: AsRef<str>>(store: &mut S, id: i64, tags: &[I]) -> Result<CmdResult> {
    let extra = normalize_tags(tags);
    let mut collection = store.load();

    let target = u64::try_from(id).map_err(|_| IdeaBoxError::NotFound(id.to_string()))?;
    let idea = collection
        .find_mut(target)
        .ok_or_else(|| IdeaBoxError::NotFound(id.to_string()))?;
    idea.tags = merge_tags(&idea.tags, &extra);
    let updated = idea.clone();

    store.save(&collection)?;
    debug!(id, tags = ?updated.tags, "updated tags");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "✅ Updated tags for idea #{}",
        id
    )));
    Ok(result.with_affected_ideas(vec![updated]))
}
