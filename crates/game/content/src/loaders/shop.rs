//! Shop catalog loader.

use std::path::Path;

use fight_core::{ArmorOracle, WeaponOracle};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::loaders::{LoadResult, read_file};
use crate::shops::{Offer, ShopCatalog, ShopPrices};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferSpec {
    pub item: String,
    pub cost: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlacksmithSpec {
    pub repair_cost: Option<u32>,
    pub offers: Vec<OfferSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmorerSpec {
    pub offers: Vec<OfferSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealerSpec {
    pub heal_cost: Option<u32>,
    pub cure_poison_cost: Option<u32>,
}

/// `shops.toml` layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopsSpec {
    pub blacksmith: BlacksmithSpec,
    pub armorer: ArmorerSpec,
    pub healer: HealerSpec,
}

/// Loader for shop offers and prices from TOML files.
pub struct ShopLoader;

impl ShopLoader {
    /// Load shops from a TOML file, resolving offers through the catalog.
    ///
    /// Offers for unregistered items are skipped with a warning.
    pub fn load(
        path: &Path,
        weapons: &dyn WeaponOracle,
        armors: &dyn ArmorOracle,
    ) -> LoadResult<ShopCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, weapons, armors)
    }

    pub fn parse(
        content: &str,
        weapons: &dyn WeaponOracle,
        armors: &dyn ArmorOracle,
    ) -> LoadResult<ShopCatalog> {
        let spec: ShopsSpec = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shops TOML: {}", e))?;

        let blacksmith = spec
            .blacksmith
            .offers
            .iter()
            .filter_map(|offer| match weapons.weapon(&offer.item) {
                Ok(weapon) => Some(Offer::new(weapon, offer.cost)),
                Err(error) => {
                    warn!(item = %offer.item, %error, "skipping blacksmith offer");
                    None
                }
            })
            .collect();

        let armorer = spec
            .armorer
            .offers
            .iter()
            .filter_map(|offer| match armors.armor(&offer.item) {
                Ok(armor) => Some(Offer::new(armor, offer.cost)),
                Err(error) => {
                    warn!(item = %offer.item, %error, "skipping armorer offer");
                    None
                }
            })
            .collect();

        let defaults = ShopPrices::default();
        let prices = ShopPrices {
            repair_cost: spec.blacksmith.repair_cost.unwrap_or(defaults.repair_cost),
            heal_cost: spec.healer.heal_cost.unwrap_or(defaults.heal_cost),
            cure_poison_cost: spec
                .healer
                .cure_poison_cost
                .unwrap_or(defaults.cure_poison_cost),
        };

        Ok(ShopCatalog {
            blacksmith,
            armorer,
            prices,
        })
    }
}
