use fight_content::{Offer, ShopPrices};
use fight_core::{Combatant, Weapon, WeaponOracle};
use tracing::info;

use super::{ShopError, charge};

/// Sells weapons and repairs broken ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blacksmith {
    offers: Vec<Offer<Weapon>>,
    repair_cost: u32,
}

impl Blacksmith {
    pub fn new(offers: Vec<Offer<Weapon>>, repair_cost: u32) -> Self {
        Self {
            offers,
            repair_cost,
        }
    }

    pub fn offers(&self) -> &[Offer<Weapon>] {
        &self.offers
    }

    pub fn repair_cost(&self) -> u32 {
        self.repair_cost
    }

    /// Buys offer `index` and equips a fresh copy, returning the old weapon.
    pub fn purchase(&self, player: &mut Combatant, index: usize) -> Result<Weapon, ShopError> {
        let offer = self.offers.get(index).ok_or(ShopError::NoSuchOffer {
            index,
            count: self.offers.len(),
        })?;
        charge(player, offer.cost)?;

        info!(
            player = %player.name(),
            weapon = %offer.item.name(),
            cost = offer.cost,
            "weapon purchased"
        );
        Ok(player.equip_weapon(offer.item.clone()))
    }

    /// Restores a broken weapon to its repair target.
    ///
    /// The target template is resolved before any gold is spent; an unknown
    /// target leaves both the weapon and the purse untouched.
    pub fn repair(
        &self,
        player: &mut Combatant,
        weapons: &dyn WeaponOracle,
    ) -> Result<(), ShopError> {
        if !player.weapon().can_repair() {
            return Err(ShopError::NothingToRepair(player.weapon().name().to_owned()));
        }
        let restored = player.weapon().resolve_repair(weapons)?;
        charge(player, self.repair_cost)?;

        info!(
            player = %player.name(),
            from = %player.weapon().name(),
            to = %restored.name(),
            cost = self.repair_cost,
            "weapon repaired"
        );
        player.weapon_mut().replace_with(restored);
        Ok(())
    }
}

impl Default for Blacksmith {
    fn default() -> Self {
        Self::new(Vec::new(), ShopPrices::DEFAULT_REPAIR_COST)
    }
}
