//! Reducer for the catalog slice.

use crate::slice::Reducer;

use super::filter::FilterState;
use super::intent::CatalogMutation;
use super::state::CatalogState;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Mutation = CatalogMutation;

    fn reduce(mut state: Self::State, mutation: Self::Mutation) -> Self::State {
        match mutation {
            CatalogMutation::SetItems(items) => state.items = items,
            CatalogMutation::Select(id) => state.selected = id,
            CatalogMutation::SetLoading(loading) => state.loading = loading,
            CatalogMutation::SetCategory(category) => state.filters.category = category,
            CatalogMutation::SetPriceBracket(price) => state.filters.price = price,
            CatalogMutation::SetSearch(search) => state.filters.search = search,
            CatalogMutation::ToggleIngredient(ingredient) => {
                state.filters.toggle_ingredient(ingredient)
            }
            CatalogMutation::ClearFilters => state.filters = FilterState::default(),
        }
        state
    }
}
