//! Process-wide state container.
//!
//! Every slice is reduced under one write lock, so a dispatch is applied to
//! completion before the next one starts. Subscribers are woken through a
//! version counter after each commit.

mod action;
mod state;

pub use action::Action;
pub use state::AppState;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::catalog::MenuItem;
use crate::persist::SnapshotAdapter;

/// Cloneable handle to the shared application state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

struct Inner {
    state: RwLock<AppState>,
    snapshots: SnapshotAdapter,
    version: watch::Sender<u64>,
}

impl Store {
    /// Store with an empty menu and the persisted fragments restored.
    pub fn new(snapshots: SnapshotAdapter) -> Self {
        Self::with_catalog(Vec::new(), snapshots)
    }

    pub fn with_catalog(items: Vec<MenuItem>, snapshots: SnapshotAdapter) -> Self {
        let state = AppState::restore(items, &snapshots);
        let (version, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(state),
                snapshots,
                version,
            }),
        }
    }

    /// Copy of the full state.
    pub fn state(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Read a projection without cloning the whole state.
    pub fn select<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let state = self.inner.state.read();
        f(&*state)
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        self.commit(|_| vec![action.into()]);
    }

    /// Decide on actions from the current state and apply them under the
    /// same lock, so nothing can slip in between the check and the commit.
    pub fn dispatch_with<F>(&self, decide: F)
    where
        F: FnOnce(&AppState) -> Vec<Action>,
    {
        self.commit(decide);
    }

    /// Receiver that changes after every commit.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.version.subscribe()
    }

    /// Number of commits so far.
    pub fn version(&self) -> u64 {
        *self.inner.version.borrow()
    }

    fn commit<F>(&self, decide: F)
    where
        F: FnOnce(&AppState) -> Vec<Action>,
    {
        let mut state = self.inner.state.write();
        let actions = decide(&*state);
        if actions.is_empty() {
            return;
        }

        let before = Persisted::of(&*state);
        for action in actions {
            tracing::debug!(slice = action.slice(), "Dispatch");
            state.apply(action);
        }
        before.save_changes(&*state, &self.inner.snapshots);
        drop(state);

        self.inner.version.send_modify(|version| *version += 1);
    }
}

/// The fragments mirrored to storage, captured before a commit.
struct Persisted {
    users: usize,
    session: Option<crate::identity::SessionUser>,
    bookings: Vec<crate::reservations::Booking>,
}

impl Persisted {
    fn of(state: &AppState) -> Self {
        Self {
            users: state.identity.users.len(),
            session: state.identity.current_user().cloned(),
            bookings: state.reservations.bookings.clone(),
        }
    }

    fn save_changes(self, state: &AppState, snapshots: &SnapshotAdapter) {
        // Users are append-only, so a length change is the only possible change.
        if state.identity.users.len() != self.users {
            snapshots.save_users(&state.identity.users);
        }
        let session = state.identity.current_user();
        if session != self.session.as_ref() {
            snapshots.save_session(session);
        }
        if state.reservations.bookings != self.bookings {
            snapshots.save_bookings(&state.reservations.bookings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::FavoritesMutation;
    use crate::identity::{IdentityMutation, User};
    use crate::persist::{SESSION_KEY, USERS_KEY};

    #[test]
    fn dispatch_bumps_version_and_notifies() {
        let store = Store::new(SnapshotAdapter::in_memory());
        let mut rx = store.subscribe();
        assert_eq!(store.version(), 0);

        let item = crate::catalog::reference_menu().remove(0);
        store.dispatch(FavoritesMutation::Add(item));

        assert_eq!(store.version(), 1);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);
        assert_eq!(store.select(|s| s.favorites.len()), 1);
    }

    #[test]
    fn empty_decision_is_not_a_commit() {
        let store = Store::new(SnapshotAdapter::in_memory());
        store.dispatch_with(|_| Vec::new());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn identity_changes_are_snapshotted() {
        let snapshots = SnapshotAdapter::in_memory();
        let store = Store::new(snapshots.clone());
        let user = User::new("a@x.com".into(), "Anna".into(), "hash".into());
        let session = user.session_user();

        store.dispatch(IdentityMutation::RegisterSuccess(user));
        store.dispatch(IdentityMutation::LoginSuccess(session.clone()));
        assert_eq!(snapshots.load_users().len(), 1);
        assert_eq!(snapshots.load_session(), Some(session));

        store.dispatch(IdentityMutation::Logout);
        assert_eq!(snapshots.storage().get(SESSION_KEY).unwrap(), None);
        assert!(snapshots.storage().get(USERS_KEY).unwrap().is_some());
    }

    #[test]
    fn restored_store_sees_persisted_session() {
        let snapshots = SnapshotAdapter::in_memory();
        let user = User::new("a@x.com".into(), "Anna".into(), "hash".into());
        snapshots.save_users(std::slice::from_ref(&user));
        snapshots.save_session(Some(&user.session_user()));

        let store = Store::new(snapshots);
        assert!(store.select(|s| s.identity.is_authenticated()));
        assert_eq!(store.select(|s| s.identity.users.len()), 1);
    }
}
