//! Size-dependent prices for the detail view.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::model::MenuItem;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown size '{0}' (expected small, medium or large)")]
pub struct ParseSizeError(String);

/// Small pizzas are this much cheaper than the listed price.
const SMALL_DISCOUNT: u32 = 100;
/// Large pizzas cost this much more than the listed price.
const LARGE_SURCHARGE: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PizzaSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn diameter_cm(self) -> u32 {
        match self {
            Self::Small => 25,
            Self::Medium => 30,
            Self::Large => 35,
        }
    }

    /// Price of this size given the listed (medium) price.
    pub fn price(self, base: u32) -> u32 {
        match self {
            Self::Small => base.saturating_sub(SMALL_DISCOUNT),
            Self::Medium => base,
            Self::Large => base.saturating_add(LARGE_SURCHARGE),
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{} ({}cm)", name, self.diameter_cm())
    }
}

impl FromStr for PizzaSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" | "s" => Ok(Self::Small),
            "medium" | "m" => Ok(Self::Medium),
            "large" | "l" => Ok(Self::Large),
            _ => Err(ParseSizeError(s.to_string())),
        }
    }
}

/// Total for `quantity` pizzas of one size. Widened so no quantity can overflow.
pub fn quote(item: &MenuItem, size: PizzaSize, quantity: u32) -> u64 {
    u64::from(size.price(item.price)) * u64::from(quantity)
}
