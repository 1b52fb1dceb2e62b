use crate::catalog::{MenuItem, MenuItemId};
use crate::slice::Mutation;

#[derive(Debug, Clone)]
pub enum FavoritesMutation {
    /// Add an item; no-op when an item with the same id is already present.
    Add(MenuItem),
    Remove(MenuItemId),
    Clear,
}

impl Mutation for FavoritesMutation {}
