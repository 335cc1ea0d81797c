use std::sync::Arc;

use fight_core::{Armor, Weapon};

/// An item for sale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Offer<T> {
    pub item: T,
    pub cost: u32,
}

impl<T> Offer<T> {
    pub fn new(item: T, cost: u32) -> Self {
        Self { item, cost }
    }
}

/// Service prices for the blacksmith and the healer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShopPrices {
    pub repair_cost: u32,
    pub heal_cost: u32,
    pub cure_poison_cost: u32,
}

impl ShopPrices {
    pub const DEFAULT_REPAIR_COST: u32 = 80;
    pub const DEFAULT_HEAL_COST: u32 = 100;
    pub const DEFAULT_CURE_POISON_COST: u32 = 75;
}

impl Default for ShopPrices {
    fn default() -> Self {
        Self {
            repair_cost: Self::DEFAULT_REPAIR_COST,
            heal_cost: Self::DEFAULT_HEAL_COST,
            cure_poison_cost: Self::DEFAULT_CURE_POISON_COST,
        }
    }
}

/// Everything the town's shops sell, resolved against the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShopCatalog {
    pub blacksmith: Vec<Offer<Weapon>>,
    pub armorer: Vec<Offer<Arc<Armor>>>,
    pub prices: ShopPrices,
}
