use super::DataStore;
use crate::error::{IdeaBoxError, Result};
use crate::model::Collection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Collection> {
        let content = fs::read_to_string(&self.path).map_err(IdeaBoxError::Io)?;
        let collection: Collection =
            serde_json::from_str(&content).map_err(IdeaBoxError::Serialization)?;
        Ok(collection)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Collection {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no document yet, starting empty");
            return Collection::default();
        }

        match self.read_document() {
            Ok(collection) => {
                debug!(
                    path = %self.path.display(),
                    items = collection.items.len(),
                    last_id = collection.last_id,
                    "loaded document"
                );
                collection
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable document, starting empty");
                Collection::default()
            }
        }
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        write_document(&self.path, collection)?;
        debug!(
            path = %self.path.display(),
            items = collection.items.len(),
            "saved document"
        );
        Ok(())
    }
}

/// Writes `collection` as indented JSON to `path`, overwriting it.
pub fn write_document(path: &Path, collection: &Collection) -> Result<()> {
    let content = serde_json::to_string_pretty(collection).map_err(IdeaBoxError::Serialization)?;
    fs::write(path, content).map_err(IdeaBoxError::Io)?;
    Ok(())
}
