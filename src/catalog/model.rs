use serde::{Deserialize, Serialize};

pub type MenuItemId = u32;

/// A dish on the menu. Reference data: never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Base (medium size) price in whole roubles.
    pub price: u32,
    pub ingredients: Vec<String>,
    pub image: String,
}

impl MenuItem {
    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }
}
