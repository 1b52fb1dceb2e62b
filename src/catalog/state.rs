//! State for the catalog slice.

use crate::slice::SliceState;

use super::filter::FilterState;
use super::model::{MenuItem, MenuItemId};

/// How many related items the detail view shows.
pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub items: Vec<MenuItem>,
    /// Item opened in the detail view.
    pub selected: Option<MenuItemId>,
    pub loading: bool,
    pub filters: FilterState,
}

impl SliceState for CatalogState {}

impl CatalogState {
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            selected: None,
            loading: false,
            filters: FilterState::default(),
        }
    }

    /// Items passing the current filters, in menu order.
    pub fn filtered(&self) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| self.filters.matches(item))
            .collect()
    }

    pub fn find(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.selected.and_then(|id| self.find(id))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// Distinct ingredients in first-seen order.
    pub fn ingredients(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for ingredient in self.items.iter().flat_map(|item| &item.ingredients) {
            if !seen.contains(&ingredient.as_str()) {
                seen.push(ingredient);
            }
        }
        seen
    }

    /// Other items from the same category, at most `limit`.
    pub fn related(&self, id: MenuItemId, limit: usize) -> Vec<&MenuItem> {
        let Some(item) = self.find(id) else {
            return Vec::new();
        };
        self.items
            .iter()
            .filter(|other| other.id != item.id && other.category == item.category)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_menu;

    fn menu_state() -> CatalogState {
        CatalogState::with_items(reference_menu())
    }

    #[test]
    fn unfiltered_view_is_whole_menu() {
        let state = menu_state();
        assert_eq!(state.filtered().len(), state.items.len());
        assert!(!state.loading);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn related_excludes_item_and_other_categories() {
        let state = menu_state();
        let related = state.related(2, RELATED_LIMIT);
        assert!(!related.is_empty());
        assert!(related.len() <= RELATED_LIMIT);
        assert!(related.iter().all(|r| r.id != 2 && r.category == "meat"));
    }

    #[test]
    fn related_for_unknown_item_is_empty() {
        assert!(menu_state().related(999, 3).is_empty());
    }

    #[test]
    fn categories_are_distinct() {
        let state = menu_state();
        let categories = state.categories();
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(categories, deduped);
        assert!(categories.contains(&"classic"));
    }
}
