//! Favorites slice: a per-process set of liked menu items.

mod intent;
mod reducer;
mod state;

pub use intent::FavoritesMutation;
pub use reducer::FavoritesReducer;
pub use state::FavoritesState;
