use crate::slice::Reducer;

use super::intent::FavoritesMutation;
use super::state::FavoritesState;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Mutation = FavoritesMutation;

    fn reduce(mut state: Self::State, mutation: Self::Mutation) -> Self::State {
        match mutation {
            FavoritesMutation::Add(item) => {
                if !state.contains(item.id) {
                    state.items.push(item);
                }
            }
            FavoritesMutation::Remove(id) => state.items.retain(|item| item.id != id),
            FavoritesMutation::Clear => state.items.clear(),
        }
        state
    }
}
