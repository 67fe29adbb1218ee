use std::fmt::Display;

use crate::error::AppResult;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Keys for the three independently persisted state slices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceKey {
    Movies,
    UserInteractions,
    CategoryRecommendations,
}

impl Display for SliceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceKey::Movies => write!(f, "movies"),
            SliceKey::UserInteractions => write!(f, "userInteractions"),
            SliceKey::CategoryRecommendations => write!(f, "categoryRecommendations"),
        }
    }
}

/// Keyed snapshot storage for catalog state
///
/// Each slice is stored whole: `save` overwrites the previous snapshot, and
/// `load` returns `None` when no snapshot has been written yet. Snapshots
/// are opaque serialized strings; parsing is the caller's concern.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore: Send + Sync {
    /// Returns the stored snapshot for a slice, or `None` if absent
    fn load(&self, slice: SliceKey) -> AppResult<Option<String>>;

    /// Overwrites the stored snapshot for a slice
    fn save(&self, slice: SliceKey, snapshot: &str) -> AppResult<()>;
}
