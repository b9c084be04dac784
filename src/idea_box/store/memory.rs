use super::DataStore;
use crate::error::{IdeaBoxError, Result};
use crate::model::Collection;

/// In-memory store for testing.
#[derive(Default)]
pub struct InMemoryStore {
    collection: Collection,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection,
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Collection {
        self.collection.clone()
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        if self.simulate_write_error {
            return Err(IdeaBoxError::Store("Simulated write error".to_string()));
        }
        self.collection = collection.clone();
        self.saves += 1;
        Ok(())
    }
}
