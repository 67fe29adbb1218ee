use std::collections::HashMap;
use std::sync::Mutex;

use super::{SliceKey, SnapshotStore};
use crate::error::AppResult;

/// In-memory snapshot store
///
/// Holds slices in a map with no durability. Used by tests and by runs that
/// do not want state to outlive the process.
#[derive(Default)]
pub struct MemoryStore {
    slices: Mutex<HashMap<SliceKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, slice: SliceKey) -> AppResult<Option<String>> {
        Ok(self.slices.lock().unwrap().get(&slice).cloned())
    }

    fn save(&self, slice: SliceKey, snapshot: &str) -> AppResult<()> {
        self.slices.lock().unwrap().insert(slice, snapshot.to_string());
        Ok(())
    }
}
