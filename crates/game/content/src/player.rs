use fight_core::{ArmorOracle, Combatant, RecordError, WeaponOracle};

/// Starting character for a new game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "PlayerTemplate::default_level"))]
    pub level: u32,
    pub health: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_health: Option<u32>,
    pub weapon: String,
    pub armor: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold: u32,
}

impl PlayerTemplate {
    fn default_level() -> u32 {
        1
    }

    /// Builds the player, resolving equipment through the catalog.
    pub fn spawn(
        &self,
        weapons: &dyn WeaponOracle,
        armors: &dyn ArmorOracle,
    ) -> Result<Combatant, RecordError> {
        let max_health = self.max_health.unwrap_or(self.health);
        let mut player = Combatant::new(
            self.name.clone(),
            max_health,
            weapons.weapon(&self.weapon)?,
            armors.armor(&self.armor)?,
            self.gold,
        )?
        .with_level(self.level)?;
        player.restore_health(self.health, max_health)?;
        Ok(player)
    }
}
