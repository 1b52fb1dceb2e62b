//! Serializes slice fragments to storage and reads them back at start.
//!
//! Failures never propagate: a broken or unreadable snapshot is logged and
//! treated as absent, a failed write is logged and dropped.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::identity::{SessionUser, User};
use crate::reservations::Booking;

use super::storage::{KeyValueStorage, MemoryStorage};

pub const USERS_KEY: &str = "users";
pub const SESSION_KEY: &str = "currentUser";
pub const BOOKINGS_KEY: &str = "bookings";

#[derive(Clone)]
pub struct SnapshotAdapter {
    storage: Arc<dyn KeyValueStorage>,
}

impl SnapshotAdapter {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Adapter over fresh process-local storage.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn storage(&self) -> &Arc<dyn KeyValueStorage> {
        &self.storage
    }

    pub fn load_users(&self) -> Vec<User> {
        self.load(USERS_KEY).unwrap_or_default()
    }

    pub fn load_session(&self) -> Option<SessionUser> {
        self.load(SESSION_KEY)
    }

    pub fn load_bookings(&self) -> Vec<Booking> {
        self.load(BOOKINGS_KEY).unwrap_or_default()
    }

    pub fn save_users(&self, users: &[User]) {
        self.save(USERS_KEY, users);
    }

    /// Persist the signed-in user, or forget it on sign-out.
    pub fn save_session(&self, user: Option<&SessionUser>) {
        match user {
            Some(user) => self.save(SESSION_KEY, user),
            None => {
                if let Err(err) = self.storage.remove(SESSION_KEY) {
                    tracing::warn!(key = SESSION_KEY, error = %err, "Could not clear snapshot");
                }
            }
        }
    }

    pub fn save_bookings(&self, bookings: &[Booking]) {
        self.save(BOOKINGS_KEY, bookings);
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "Could not read snapshot, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "Malformed snapshot, using defaults");
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, error = %err, "Could not serialize snapshot");
                return;
            }
        };
        if let Err(err) = self.storage.set(key, &raw) {
            tracing::warn!(key, error = %err, "Could not write snapshot");
        }
    }
}
