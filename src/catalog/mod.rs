//! Catalog slice: menu reference data, filters and the detail selection.

mod data;
mod filter;
mod intent;
mod model;
mod pricing;
mod reducer;
mod state;

pub use data::reference_menu;
pub use filter::{CategoryFilter, FilterState, ParseFilterError, PriceBracket};
pub use intent::CatalogMutation;
pub use model::{MenuItem, MenuItemId};
pub use pricing::{quote, ParseSizeError, PizzaSize};
pub use reducer::CatalogReducer;
pub use state::{CatalogState, RELATED_LIMIT};
