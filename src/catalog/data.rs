//! Built-in menu.

use super::model::MenuItem;

struct Entry {
    id: u32,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    price: u32,
    ingredients: &'static [&'static str],
    image: &'static str,
}

const MENU: &[Entry] = &[
    Entry {
        id: 1,
        name: "Margherita",
        description: "Classic tomato sauce, mozzarella and fresh basil",
        category: "classic",
        price: 450,
        ingredients: &["tomato sauce", "mozzarella", "basil"],
        image: "/images/margherita.jpg",
    },
    Entry {
        id: 2,
        name: "Pepperoni",
        description: "Spicy pepperoni over a generous layer of mozzarella",
        category: "meat",
        price: 550,
        ingredients: &["tomato sauce", "mozzarella", "pepperoni"],
        image: "/images/pepperoni.jpg",
    },
    Entry {
        id: 3,
        name: "Four Cheese",
        description: "Mozzarella, gorgonzola, parmesan and cheddar on a cream base",
        category: "classic",
        price: 620,
        ingredients: &["cream sauce", "mozzarella", "gorgonzola", "parmesan", "cheddar"],
        image: "/images/four-cheese.jpg",
    },
    Entry {
        id: 4,
        name: "Hawaiian",
        description: "Ham and pineapple, the sweet and savoury favourite",
        category: "meat",
        price: 520,
        ingredients: &["tomato sauce", "mozzarella", "ham", "pineapple"],
        image: "/images/hawaiian.jpg",
    },
    Entry {
        id: 5,
        name: "Vegetarian",
        description: "Bell pepper, mushrooms, olives, red onion and tomatoes",
        category: "vegetarian",
        price: 480,
        ingredients: &[
            "tomato sauce",
            "mozzarella",
            "bell pepper",
            "mushrooms",
            "olives",
            "red onion",
            "tomatoes",
        ],
        image: "/images/vegetarian.jpg",
    },
    Entry {
        id: 6,
        name: "Diablo",
        description: "Hot salami, jalapeno and chili flakes for the brave",
        category: "spicy",
        price: 590,
        ingredients: &["tomato sauce", "mozzarella", "salami", "jalapeno", "chili"],
        image: "/images/diablo.jpg",
    },
    Entry {
        id: 7,
        name: "Meat Feast",
        description: "Bacon, ham, pepperoni and beef with barbecue sauce",
        category: "meat",
        price: 690,
        ingredients: &["bbq sauce", "mozzarella", "bacon", "ham", "pepperoni", "beef"],
        image: "/images/meat-feast.jpg",
    },
    Entry {
        id: 8,
        name: "Mushroom Truffle",
        description: "Wild mushrooms with truffle oil and parmesan",
        category: "vegetarian",
        price: 650,
        ingredients: &["cream sauce", "mozzarella", "mushrooms", "truffle oil", "parmesan"],
        image: "/images/mushroom-truffle.jpg",
    },
    Entry {
        id: 9,
        name: "Chicken Ranch",
        description: "Grilled chicken, ranch dressing, red onion and tomatoes",
        category: "meat",
        price: 580,
        ingredients: &["ranch sauce", "mozzarella", "chicken", "red onion", "tomatoes"],
        image: "/images/chicken-ranch.jpg",
    },
    Entry {
        id: 10,
        name: "Inferno Veggie",
        description: "Jalapeno, bell pepper and olives with a spicy tomato sauce",
        category: "spicy",
        price: 490,
        ingredients: &["tomato sauce", "mozzarella", "jalapeno", "bell pepper", "olives"],
        image: "/images/inferno-veggie.jpg",
    },
];

/// The restaurant's menu, loaded once at startup.
pub fn reference_menu() -> Vec<MenuItem> {
    MENU.iter()
        .map(|e| MenuItem {
            id: e.id,
            name: e.name.to_string(),
            description: e.description.to_string(),
            category: e.category.to_string(),
            price: e.price,
            ingredients: e.ingredients.iter().map(|i| i.to_string()).collect(),
            image: e.image.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_ids_are_unique() {
        let menu = reference_menu();
        let ids: HashSet<_> = menu.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), menu.len());
    }

    #[test]
    fn menu_covers_every_price_bracket() {
        let menu = reference_menu();
        assert!(menu.iter().any(|m| m.price < 500));
        assert!(menu.iter().any(|m| (500..600).contains(&m.price)));
        assert!(menu.iter().any(|m| m.price >= 600));
    }
}
