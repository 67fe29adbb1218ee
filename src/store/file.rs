use std::fs;
use std::io;
use std::path::PathBuf;

use super::{SliceKey, SnapshotStore};
use crate::error::AppResult;

/// File-backed snapshot store
///
/// Each slice lives in its own JSON file under the root directory, named
/// after the slice key. Writes replace the whole file.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates the store, creating the root directory if needed
    pub fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn slice_path(&self, slice: SliceKey) -> PathBuf {
        self.root.join(format!("{}.json", slice))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self, slice: SliceKey) -> AppResult<Option<String>> {
        match fs::read_to_string(self.slice_path(slice)) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, slice: SliceKey, snapshot: &str) -> AppResult<()> {
        fs::write(self.slice_path(slice), snapshot)?;
        Ok(())
    }
}
