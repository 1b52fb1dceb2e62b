use crate::catalog::{MenuItem, MenuItemId};
use crate::slice::SliceState;

/// Favorite menu items, unique by id, in the order they were added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    pub items: Vec<MenuItem>,
}

impl SliceState for FavoritesState {}

impl FavoritesState {
    pub fn contains(&self, id: MenuItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
