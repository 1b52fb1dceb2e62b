use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::model::MenuItem;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFilterError {
    #[error("unknown price bracket '{0}' (expected all, budget, medium or premium)")]
    UnknownBracket(String),
}

/// Category restriction for the menu listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => &item.category == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

/// Fixed price bands.
///
/// Budget is below 500, Medium is 500..=599, Premium is 600 and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBracket {
    #[default]
    All,
    Budget,
    Medium,
    Premium,
}

impl PriceBracket {
    pub fn contains(self, price: u32) -> bool {
        match self {
            Self::All => true,
            Self::Budget => price < 500,
            Self::Medium => (500..600).contains(&price),
            Self::Premium => price >= 600,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Budget => "budget",
            Self::Medium => "medium",
            Self::Premium => "premium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All prices",
            Self::Budget => "Under 500",
            Self::Medium => "500 - 599",
            Self::Premium => "600 and up",
        }
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceBracket {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "budget" => Ok(Self::Budget),
            "medium" => Ok(Self::Medium),
            "premium" => Ok(Self::Premium),
            _ => Err(ParseFilterError::UnknownBracket(s.to_string())),
        }
    }
}

/// User-selected menu filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub price: PriceBracket,
    pub search: String,
    /// Ingredients an item must contain, in the order they were selected.
    pub ingredients: Vec<String>,
}

impl FilterState {
    /// Apply every filter in turn: category, price, text, ingredients.
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.category.matches(item)
            && self.price.contains(item.price)
            && self.matches_search(item)
            && self.ingredients.iter().all(|i| item.has_ingredient(i))
    }

    fn matches_search(&self, item: &MenuItem) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        item.name.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
    }

    /// Add the ingredient if absent, drop it if present.
    pub fn toggle_ingredient(&mut self, ingredient: String) {
        if let Some(pos) = self.ingredients.iter().position(|i| *i == ingredient) {
            self.ingredients.remove(pos);
        } else {
            self.ingredients.push(ingredient);
        }
    }

    /// Number of filters differing from the defaults; each ingredient counts once.
    pub fn active_count(&self) -> usize {
        usize::from(!self.category.is_all())
            + usize::from(self.price != PriceBracket::All)
            + usize::from(!self.search.is_empty())
            + self.ingredients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: u32) -> MenuItem {
        MenuItem {
            id: 1,
            name: "Margherita".into(),
            description: "Tomato and Basil".into(),
            category: "classic".into(),
            price,
            ingredients: vec!["mozzarella".into(), "basil".into()],
            image: String::new(),
        }
    }

    #[test]
    fn bracket_boundaries() {
        assert!(PriceBracket::Budget.contains(499));
        assert!(!PriceBracket::Budget.contains(500));
        assert!(PriceBracket::Medium.contains(500));
        assert!(PriceBracket::Medium.contains(599));
        assert!(!PriceBracket::Medium.contains(600));
        assert!(PriceBracket::Premium.contains(600));
        assert!(PriceBracket::All.contains(0));
    }

    #[test]
    fn bracket_parses_case_insensitively() {
        assert_eq!("Budget".parse::<PriceBracket>(), Ok(PriceBracket::Budget));
        assert!("cheap".parse::<PriceBracket>().is_err());
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_description() {
        let mut filters = FilterState::default();
        filters.search = "MARGH".into();
        assert!(filters.matches(&item(450)));
        filters.search = "basil".into();
        assert!(filters.matches(&item(450)));
        filters.search = "pineapple".into();
        assert!(!filters.matches(&item(450)));
    }

    #[test]
    fn every_required_ingredient_must_be_present() {
        let mut filters = FilterState::default();
        filters.toggle_ingredient("basil".into());
        assert!(filters.matches(&item(450)));
        filters.toggle_ingredient("ham".into());
        assert!(!filters.matches(&item(450)));
    }

    #[test]
    fn toggle_twice_removes_ingredient() {
        let mut filters = FilterState::default();
        filters.toggle_ingredient("basil".into());
        filters.toggle_ingredient("basil".into());
        assert!(filters.ingredients.is_empty());
    }

    #[test]
    fn active_count_counts_each_ingredient() {
        let mut filters = FilterState::default();
        assert_eq!(filters.active_count(), 0);
        filters.category = CategoryFilter::from("meat");
        filters.price = PriceBracket::Premium;
        filters.toggle_ingredient("ham".into());
        filters.toggle_ingredient("bacon".into());
        assert_eq!(filters.active_count(), 4);
    }

    #[test]
    fn category_from_all_is_unfiltered() {
        assert_eq!(CategoryFilter::from("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from(""), CategoryFilter::All);
    }
}
