use crate::commands::{CmdMessage, CmdResult};
use crate::error::{IdeaBoxError, Result};
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let mut collection = store.load();
    let target = u64::try_from(id).map_err(|_| IdeaBoxError::NotFound(id.to_string()))?;
    let removed = collection
        .remove(target)
        .ok_or_else(|| IdeaBoxError::NotFound(id.to_string()))?;

    store.save(&collection)?;
    debug!(id, remaining = collection.items.len(), "removed idea");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("🗑️ Removed idea #{}", id)));
    Ok(result.with_affected_ideas(vec![removed]))
}
