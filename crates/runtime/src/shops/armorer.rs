use std::sync::Arc;

use fight_content::Offer;
use fight_core::{Armor, Combatant};
use tracing::info;

use super::{ShopError, charge};

/// Sells armor. Bought armor is shared with the catalog, never copied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Armorer {
    offers: Vec<Offer<Arc<Armor>>>,
}

impl Armorer {
    pub fn new(offers: Vec<Offer<Arc<Armor>>>) -> Self {
        Self { offers }
    }

    pub fn offers(&self) -> &[Offer<Arc<Armor>>] {
        &self.offers
    }

    /// Buys offer `index`, returning the armor it replaced.
    pub fn purchase(
        &self,
        player: &mut Combatant,
        index: usize,
    ) -> Result<Arc<Armor>, ShopError> {
        let offer = self.offers.get(index).ok_or(ShopError::NoSuchOffer {
            index,
            count: self.offers.len(),
        })?;
        charge(player, offer.cost)?;

        info!(player = %player.name(), armor = %offer.item.name, cost = offer.cost, "armor purchased");
        Ok(player.equip_armor(Arc::clone(&offer.item)))
    }
}

#[cfg(test)]
mod tests {
    use fight_core::Weapon;

    use super::*;

    #[test]
    fn purchase_equips_shared_armor() {
        let plate = Arc::new(Armor::new("Plate", 6));
        let armorer = Armorer::new(vec![Offer::new(Arc::clone(&plate), 120)]);
        let mut player = Combatant::new(
            "Hero",
            50,
            Weapon::new("Stick", 1),
            Arc::new(Armor::none()),
            150,
        )
        .unwrap();

        let old = armorer.purchase(&mut player, 0).unwrap();

        assert_eq!(old.name, "Clothes");
        assert!(Arc::ptr_eq(player.armor(), &plate));
        assert_eq!(player.gold(), 30);
        assert_eq!(
            armorer.purchase(&mut player, 0),
            Err(ShopError::NotEnoughGold { cost: 120, gold: 30 })
        );
    }
}
