use pizzeria::catalog::{
    reference_menu, CatalogMutation, CatalogReducer, CatalogState, CategoryFilter, MenuItem,
    PriceBracket,
};
use pizzeria::slice::Reducer;

fn pizza(id: u32, name: &str, category: &str, price: u32, ingredients: &[&str]) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: format!("{} pizza", name),
        category: category.to_string(),
        price,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        image: String::new(),
    }
}

fn three_prices() -> CatalogState {
    CatalogState::with_items(vec![
        pizza(1, "Margherita", "classic", 450, &["mozzarella", "basil"]),
        pizza(2, "Pepperoni", "meat", 550, &["mozzarella", "pepperoni"]),
        pizza(3, "Truffle", "vegetarian", 650, &["mushrooms"]),
    ])
}

fn apply(state: CatalogState, mutations: Vec<CatalogMutation>) -> CatalogState {
    mutations.into_iter().fold(state, CatalogReducer::reduce)
}

#[test]
fn budget_bracket_keeps_only_cheap_items() {
    let state = apply(
        three_prices(),
        vec![CatalogMutation::SetPriceBracket(PriceBracket::Budget)],
    );
    let ids: Vec<_> = state.filtered().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn filtered_view_is_subset_in_menu_order() {
    let state = apply(
        CatalogState::with_items(reference_menu()),
        vec![
            CatalogMutation::SetCategory(CategoryFilter::from("meat")),
            CatalogMutation::ToggleIngredient("ham".into()),
        ],
    );
    let filtered = state.filtered();
    assert!(!filtered.is_empty());
    let positions: Vec<_> = filtered
        .iter()
        .map(|f| state.items.iter().position(|i| i.id == f.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(filtered.iter().all(|i| i.category == "meat" && i.has_ingredient("ham")));
}

#[test]
fn setting_the_same_filter_twice_is_idempotent() {
    let once = apply(
        three_prices(),
        vec![CatalogMutation::SetSearch("pep".into())],
    );
    let twice = apply(
        three_prices(),
        vec![
            CatalogMutation::SetSearch("pep".into()),
            CatalogMutation::SetSearch("pep".into()),
        ],
    );
    assert_eq!(once, twice);
    assert_eq!(once.filtered().len(), 1);
}

#[test]
fn search_matches_description_case_insensitively() {
    let state = apply(
        three_prices(),
        vec![CatalogMutation::SetSearch("TRUFFLE PIZZA".into())],
    );
    assert_eq!(state.filtered().len(), 1);
}

#[test]
fn clear_filters_shows_everything_again() {
    let state = apply(
        three_prices(),
        vec![
            CatalogMutation::SetPriceBracket(PriceBracket::Premium),
            CatalogMutation::ToggleIngredient("basil".into()),
            CatalogMutation::ClearFilters,
        ],
    );
    assert_eq!(state.filtered().len(), 3);
    assert_eq!(state.filters.active_count(), 0);
}

#[test]
fn no_match_yields_empty_view() {
    let state = apply(
        three_prices(),
        vec![CatalogMutation::SetSearch("anchovies".into())],
    );
    assert!(state.filtered().is_empty());
}

#[test]
fn selecting_an_item_opens_detail() {
    let state = apply(
        CatalogState::with_items(reference_menu()),
        vec![CatalogMutation::Select(Some(2))],
    );
    assert_eq!(state.selected_item().map(|i| i.name.as_str()), Some("Pepperoni"));
    let state = CatalogReducer::reduce(state, CatalogMutation::Select(None));
    assert!(state.selected_item().is_none());
}
