//! In-memory template registry.

use std::collections::HashMap;
use std::sync::Arc;

use fight_core::{Armor, ArmorOracle, OracleError, Weapon, WeaponOracle};

/// Weapon and armor templates keyed by exact name.
///
/// Weapons are handed out as fresh clones so wear on an equipped copy never
/// reaches the template; armor is shared.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    weapons: HashMap<String, Weapon>,
    armors: HashMap<String, Arc<Armor>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a weapon under its template key, replacing any previous entry.
    pub fn register_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapons
            .insert(weapon.template_name().to_owned(), weapon)
    }

    /// Registers armor under its name, replacing any previous entry.
    pub fn register_armor(&mut self, armor: Armor) -> Option<Arc<Armor>> {
        self.armors.insert(armor.name.clone(), Arc::new(armor))
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn armor_count(&self) -> usize {
        self.armors.len()
    }

    /// Registered weapon keys, sorted.
    pub fn weapon_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.weapons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl WeaponOracle for Catalog {
    fn weapon(&self, key: &str) -> Result<Weapon, OracleError> {
        self.weapons.weapon(key)
    }

    fn contains_weapon(&self, key: &str) -> bool {
        self.weapons.contains_key(key)
    }
}

impl ArmorOracle for Catalog {
    fn armor(&self, key: &str) -> Result<Arc<Armor>, OracleError> {
        self.armors.armor(key)
    }
}

impl Extend<Weapon> for Catalog {
    fn extend<I: IntoIterator<Item = Weapon>>(&mut self, iter: I) {
        for weapon in iter {
            self.register_weapon(weapon);
        }
    }
}

impl Extend<Armor> for Catalog {
    fn extend<I: IntoIterator<Item = Armor>>(&mut self, iter: I) {
        for armor in iter {
            self.register_armor(armor);
        }
    }
}
