//! Town shops.
//!
//! Every service checks its preconditions and resolves whatever it needs from
//! the catalog before touching the player's purse, so a failed purchase never
//! costs gold.

mod armorer;
mod blacksmith;
mod error;
mod healer;

pub use armorer::Armorer;
pub use blacksmith::Blacksmith;
pub use error::ShopError;
pub use healer::HealersHut;

use fight_core::Combatant;

/// Spends `cost` or reports how much is missing.
fn charge(player: &mut Combatant, cost: u32) -> Result<(), ShopError> {
    if player.try_spend_gold(cost) {
        Ok(())
    } else {
        Err(ShopError::NotEnoughGold {
            cost,
            gold: player.gold(),
        })
    }
}
