//! Repository contract for saving and loading the player.

use fight_core::{ArmorOracle, Combatant, CombatantRecord, WeaponOracle};

use crate::repository::Result;

/// Persistence for a single saved player.
///
/// Loading takes the weapon catalog because older or hand-edited saves may
/// carry only the weapon's key; the catalog supplies the missing stats.
pub trait SaveGameRepository: Send + Sync {
    /// Persist the record, replacing any previous save.
    fn save(&self, record: &CombatantRecord) -> Result<()>;

    /// Load the saved record, `None` when nothing has been saved.
    fn load(&self, weapons: &dyn WeaponOracle) -> Result<Option<CombatantRecord>>;

    /// Check if a save exists
    fn exists(&self) -> bool;

    /// Remove the save; a missing save is not an error.
    fn delete(&self) -> Result<()>;

    fn save_player(&self, player: &Combatant) -> Result<()> {
        self.save(&CombatantRecord::capture(player))
    }

    /// Load and rebuild the saved player against the catalog.
    fn load_player(
        &self,
        weapons: &dyn WeaponOracle,
        armors: &dyn ArmorOracle,
    ) -> Result<Option<Combatant>> {
        match self.load(weapons)? {
            Some(record) => Ok(Some(record.into_combatant(weapons, armors)?)),
            None => Ok(None),
        }
    }
}
