use std::collections::HashMap;
use std::sync::Arc;

use super::OracleError;
use crate::state::{Armor, Weapon};

/// Resolves weapon template keys into fresh weapon instances.
///
/// Every call returns an independent clone: mutating the returned weapon
/// (breaking it, repairing it) never touches the template or any other
/// instance built from it.
pub trait WeaponOracle: Send + Sync {
    fn weapon(&self, key: &str) -> Result<Weapon, OracleError>;

    /// Returns true when a template is registered under `key`.
    fn contains_weapon(&self, key: &str) -> bool {
        self.weapon(key).is_ok()
    }
}

/// Resolves armor keys into shared armor definitions.
///
/// Armor has no mutable state, so instances are shared rather than cloned.
pub trait ArmorOracle: Send + Sync {
    fn armor(&self, key: &str) -> Result<Arc<Armor>, OracleError>;
}

impl WeaponOracle for HashMap<String, Weapon> {
    fn weapon(&self, key: &str) -> Result<Weapon, OracleError> {
        self.get(key)
            .cloned()
            .ok_or_else(|| OracleError::WeaponNotFound(key.to_owned()))
    }

    fn contains_weapon(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl ArmorOracle for HashMap<String, Arc<Armor>> {
    fn armor(&self, key: &str) -> Result<Arc<Armor>, OracleError> {
        self.get(key)
            .cloned()
            .ok_or_else(|| OracleError::ArmorNotFound(key.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_weapons_are_independent_clones() {
        let mut templates = HashMap::new();
        templates.insert("sword".to_owned(), Weapon::new("Sword", 5));

        let mut first = templates.weapon("sword").unwrap();
        first.replace_with(Weapon::new("Stick", 1));
        let second = templates.weapon("sword").unwrap();

        assert_eq!(first.name(), "Stick");
        assert_eq!(second.name(), "Sword");
        assert_eq!(second.damage(), 5);
        assert_eq!(templates["sword"].damage(), 5);
    }

    #[test]
    fn unknown_keys_are_reported() {
        let weapons: HashMap<String, Weapon> = HashMap::new();
        let armors: HashMap<String, Arc<Armor>> = HashMap::new();

        assert_eq!(
            weapons.weapon("Sword").unwrap_err(),
            OracleError::WeaponNotFound("Sword".into())
        );
        assert_eq!(
            armors.armor("cloth").unwrap_err(),
            OracleError::ArmorNotFound("cloth".into())
        );
        assert!(!weapons.contains_weapon("sword"));
    }
}
