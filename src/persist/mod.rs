//! Durable snapshots of selected slice fragments.

mod snapshot;
mod storage;

pub use snapshot::{SnapshotAdapter, BOOKINGS_KEY, SESSION_KEY, USERS_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
