mod common;

use pizzeria::catalog::reference_menu;
use pizzeria::favorites::{FavoritesMutation, FavoritesReducer, FavoritesState};
use pizzeria::slice::Reducer;

#[test]
fn adding_twice_keeps_one_entry() {
    let item = reference_menu().remove(0);
    let state = FavoritesReducer::reduce(
        FavoritesState::default(),
        FavoritesMutation::Add(item.clone()),
    );
    let state = FavoritesReducer::reduce(state, FavoritesMutation::Add(item.clone()));
    assert_eq!(state.len(), 1);
    assert!(state.contains(item.id));
}

#[test]
fn remove_drops_only_that_item() {
    let menu = reference_menu();
    let mut state = FavoritesState::default();
    for item in menu.iter().take(3) {
        state = FavoritesReducer::reduce(state, FavoritesMutation::Add(item.clone()));
    }
    let state = FavoritesReducer::reduce(state, FavoritesMutation::Remove(menu[1].id));
    let ids: Vec<_> = state.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![menu[0].id, menu[2].id]);
}

#[test]
fn favorites_are_not_persisted() {
    let app = {
        let storage = std::sync::Arc::new(pizzeria::persist::MemoryStorage::new());
        let first = common::app_with_storage(storage.clone());
        first
            .store()
            .dispatch(FavoritesMutation::Add(reference_menu().remove(0)));
        common::app_with_storage(storage)
    };
    assert!(app.store().select(|s| s.favorites.is_empty()));
}
