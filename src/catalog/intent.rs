//! Mutations for the catalog slice.

use crate::slice::Mutation;

use super::filter::{CategoryFilter, PriceBracket};
use super::model::{MenuItem, MenuItemId};

#[derive(Debug, Clone)]
pub enum CatalogMutation {
    /// Replace the menu (reference data reload).
    SetItems(Vec<MenuItem>),
    /// Open an item in the detail view, or close it with `None`.
    Select(Option<MenuItemId>),
    SetLoading(bool),
    SetCategory(CategoryFilter),
    SetPriceBracket(PriceBracket),
    SetSearch(String),
    ToggleIngredient(String),
    /// Reset every filter to its default.
    ClearFilters,
}

impl Mutation for CatalogMutation {}
