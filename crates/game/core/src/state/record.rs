use crate::env::{ArmorOracle, WeaponOracle};
use crate::state::{Combatant, PoisonState, RecordError, WeaponState};

/// Flat persisted form of a combatant.
///
/// Poison fields are all zero when the combatant is not poisoned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantRecord {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub weapon: WeaponState,
    pub armor_name: String,
    pub gold: u32,
    pub poison_tick_chance: u8,
    pub poison_damage: u32,
    pub poison_turns: u32,
}

impl CombatantRecord {
    pub fn capture(combatant: &Combatant) -> Self {
        let poison = combatant.poison().copied().unwrap_or_default();
        Self {
            name: combatant.name().to_owned(),
            level: combatant.level().unwrap_or(1),
            health: combatant.health(),
            max_health: combatant.max_health(),
            weapon: combatant.weapon().capture_state(),
            armor_name: combatant.armor().name.clone(),
            gold: combatant.gold(),
            poison_tick_chance: poison.tick_chance_percent(),
            poison_damage: poison.damage_per_turn(),
            poison_turns: poison.remaining_turns(),
        }
    }

    /// The persisted poison, if it can still deal damage.
    pub fn poison(&self) -> Result<Option<PoisonState>, RecordError> {
        if self.poison_turns == 0 {
            return Ok(None);
        }
        let poison = PoisonState::new(
            self.poison_tick_chance,
            self.poison_damage,
            self.poison_turns,
        )?;
        Ok(Some(poison).filter(PoisonState::has_effect))
    }

    /// Rebuilds the combatant, resolving its weapon and armor through the catalog.
    ///
    /// # Errors
    ///
    /// Fails when a template is unknown, the weapon state belongs to another
    /// template, or the health/level/poison values are out of range.
    pub fn into_combatant(
        self,
        weapons: &dyn WeaponOracle,
        armors: &dyn ArmorOracle,
    ) -> Result<Combatant, RecordError> {
        let poison = self.poison()?;

        let mut weapon = weapons.weapon(&self.weapon.template_name)?;
        weapon.restore_state(&self.weapon, Some(weapons))?;
        let armor = armors.armor(&self.armor_name)?;

        let mut combatant = Combatant::new(self.name, self.max_health, weapon, armor, self.gold)?
            .with_level(self.level.max(1))?;
        combatant.restore_health(self.health, self.max_health)?;
        combatant.restore_poison(poison);
        Ok(combatant)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::*;
    use crate::env::OracleError;
    use crate::state::{Armor, Repairable, Weapon, WeaponModifier};

    fn catalogs() -> (HashMap<String, Weapon>, HashMap<String, Arc<Armor>>) {
        let weapons = [
            Weapon::new("Sword", 8),
            Weapon::new("Broken Sword", 2)
                .with_modifier(WeaponModifier::Repairable(Repairable::new("Sword").unwrap())),
        ]
        .into_iter()
        .map(|weapon| (weapon.name().to_owned(), weapon))
        .collect();
        let armors = [("Leather".to_owned(), Arc::new(Armor::new("Leather", 2)))]
            .into_iter()
            .collect();
        (weapons, armors)
    }

    #[test]
    fn capture_then_rebuild_preserves_player() {
        let (weapons, armors) = catalogs();
        let mut hero = Combatant::new(
            "Hero",
            100,
            weapons.weapon("Sword").unwrap(),
            armors.armor("Leather").unwrap(),
            42,
        )
        .unwrap()
        .with_level(3)
        .unwrap();
        hero.take_self_damage(35);
        hero.apply_poison(PoisonState::new(60, 4, 2).unwrap());
        hero.weapon_mut()
            .replace_with(weapons.weapon("Broken Sword").unwrap());

        let record = CombatantRecord::capture(&hero);
        assert_eq!(record.weapon.template_name, "Sword");
        assert_eq!(record.weapon.name, "Broken Sword");
        assert_eq!(record.poison_turns, 2);

        let loaded = record.into_combatant(&weapons, &armors).unwrap();
        assert_eq!(loaded, hero);
        assert!(loaded.weapon().can_repair());
    }

    #[test]
    fn unpoisoned_record_has_zero_poison_fields() {
        let (weapons, armors) = catalogs();
        let hero = Combatant::new(
            "Hero",
            10,
            weapons.weapon("Sword").unwrap(),
            armors.armor("Leather").unwrap(),
            0,
        )
        .unwrap();

        let record = CombatantRecord::capture(&hero);

        assert_eq!(
            (record.poison_tick_chance, record.poison_damage, record.poison_turns),
            (0, 0, 0)
        );
        assert_eq!(record.level, 1);
        assert_eq!(record.poison(), Ok(None));
    }

    #[test]
    fn harmless_saved_poison_loads_unpoisoned() {
        let (weapons, armors) = catalogs();
        let record = CombatantRecord {
            name: "Hero".into(),
            level: 1,
            health: 10,
            max_health: 10,
            weapon: Weapon::new("Sword", 8).capture_state(),
            armor_name: "Leather".into(),
            poison_tick_chance: 0,
            poison_damage: 0,
            poison_turns: 3,
            ..Default::default()
        };

        assert_eq!(record.poison(), Ok(None));
        let hero = record.into_combatant(&weapons, &armors).unwrap();
        assert!(!hero.is_poisoned());
        assert!(hero.poison().is_none());
    }

    #[test]
    fn unknown_armor_is_reported() {
        let (weapons, armors) = catalogs();
        let record = CombatantRecord {
            name: "Hero".into(),
            level: 1,
            health: 10,
            max_health: 10,
            weapon: Weapon::new("Sword", 8).capture_state(),
            armor_name: "Mithril".into(),
            ..Default::default()
        };

        assert_eq!(
            record.into_combatant(&weapons, &armors),
            Err(RecordError::Template(OracleError::ArmorNotFound(
                "Mithril".into()
            )))
        );
    }
}
