use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{write_document, DataStore};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_EXPORT_PATH: &str = "ideas_export.json";

/// Writes the whole collection, unmodified, to `dest`.
pub fn run<S: DataStore>(store: &S, dest: &Path) -> Result<CmdResult> {
    let collection = store.load();
    write_document(dest, &collection)?;

    let resolved = std::path::absolute(dest)?;
    debug!(path = %resolved.display(), items = collection.items.len(), "exported");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "📦 Exported to {}",
        resolved.display()
    )));
    Ok(result.with_export_path(resolved))
}
