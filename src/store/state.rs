use std::mem;

use crate::catalog::{CatalogReducer, CatalogState, MenuItem};
use crate::favorites::{FavoritesReducer, FavoritesState};
use crate::identity::{IdentityReducer, IdentityState};
use crate::persist::SnapshotAdapter;
use crate::reservations::{ReservationReducer, ReservationState};
use crate::slice::Reducer;

use super::action::Action;

/// The four slices. Each is only ever replaced by its own reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub favorites: FavoritesState,
    pub identity: IdentityState,
    pub reservations: ReservationState,
}

impl AppState {
    /// Initial state: the given menu plus whatever storage holds.
    pub fn restore(items: Vec<MenuItem>, snapshots: &SnapshotAdapter) -> Self {
        Self {
            catalog: CatalogState::with_items(items),
            favorites: FavoritesState::default(),
            identity: IdentityState::restore(snapshots.load_users(), snapshots.load_session()),
            reservations: ReservationState::restore(snapshots.load_bookings()),
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Catalog(m) => {
                self.catalog = CatalogReducer::reduce(mem::take(&mut self.catalog), m);
            }
            Action::Favorites(m) => {
                self.favorites = FavoritesReducer::reduce(mem::take(&mut self.favorites), m);
            }
            Action::Identity(m) => {
                self.identity = IdentityReducer::reduce(mem::take(&mut self.identity), m);
            }
            Action::Reservations(m) => {
                self.reservations =
                    ReservationReducer::reduce(mem::take(&mut self.reservations), m);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{reference_menu, CatalogMutation};

    #[test]
    fn slices_are_independent() {
        let mut state = AppState::restore(reference_menu(), &SnapshotAdapter::in_memory());
        let before = state.clone();
        state.apply(CatalogMutation::SetSearch("pepperoni".into()).into());
        assert_eq!(state.favorites, before.favorites);
        assert_eq!(state.identity, before.identity);
        assert_eq!(state.reservations, before.reservations);
        assert_ne!(state.catalog, before.catalog);
    }
}
