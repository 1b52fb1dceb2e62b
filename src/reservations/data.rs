//! Built-in floor plan.

use super::model::Table;

const TABLES: &[(u32, u32, u32, &str)] = &[
    (1, 1, 2, "window"),
    (2, 2, 2, "window"),
    (3, 3, 4, "main hall"),
    (4, 4, 4, "main hall"),
    (5, 5, 6, "main hall"),
    (6, 6, 4, "terrace"),
    (7, 7, 8, "terrace"),
    (8, 8, 10, "private room"),
    (9, 9, 12, "banquet hall"),
    (10, 10, 20, "banquet hall"),
];

/// Every table in the restaurant, all available.
pub fn reference_tables() -> Vec<Table> {
    TABLES
        .iter()
        .map(|&(id, number, capacity, location)| Table {
            id,
            number,
            capacity,
            location: location.to_string(),
            available: true,
        })
        .collect()
}
