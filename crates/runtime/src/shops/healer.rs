use fight_content::ShopPrices;
use fight_core::{Combatant, PoisonState};
use tracing::info;

use super::{ShopError, charge};

/// Restores health and purges poison for a fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealersHut {
    heal_cost: u32,
    cure_poison_cost: u32,
}

impl HealersHut {
    pub fn new(heal_cost: u32, cure_poison_cost: u32) -> Self {
        Self {
            heal_cost,
            cure_poison_cost,
        }
    }

    pub fn heal_cost(&self) -> u32 {
        self.heal_cost
    }

    pub fn cure_poison_cost(&self) -> u32 {
        self.cure_poison_cost
    }

    pub fn heal(&self, player: &mut Combatant) -> Result<(), ShopError> {
        if player.is_full_health() {
            return Err(ShopError::AlreadyFullHealth);
        }
        charge(player, self.heal_cost)?;
        player.heal_to_full();
        info!(player = %player.name(), health = player.health(), "healed");
        Ok(())
    }

    /// Removes the active poison, returning it.
    pub fn cure_poison(&self, player: &mut Combatant) -> Result<PoisonState, ShopError> {
        if !player.poison().is_some_and(|poison| poison.has_effect()) {
            return Err(ShopError::NotPoisoned);
        }
        charge(player, self.cure_poison_cost)?;
        let cured = player.cure_poison().ok_or(ShopError::NotPoisoned)?;
        info!(player = %player.name(), "poison cured");
        Ok(cured)
    }
}

impl Default for HealersHut {
    fn default() -> Self {
        Self::new(ShopPrices::DEFAULT_HEAL_COST, ShopPrices::DEFAULT_CURE_POISON_COST)
    }
}
