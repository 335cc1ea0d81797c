//! Level roster loader.

use std::path::Path;

use anyhow::Context;
use fight_core::{ArmorOracle, Combatant, RecordError, WeaponOracle};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::levels::LevelContent;
use crate::loaders::{LoadResult, read_file};

/// A regular enemy entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub name: String,
    pub health: u32,
    pub weapon: String,
    pub armor: String,
    #[serde(default)]
    pub gold: u32,
}

/// A boss entry; bosses carry their own level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossSpec {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub weapon: String,
    pub armor: String,
    #[serde(default)]
    pub gold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub level: u32,
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
    pub boss: Option<BossSpec>,
}

impl EnemySpec {
    fn build(
        &self,
        weapons: &dyn WeaponOracle,
        armors: &dyn ArmorOracle,
    ) -> Result<Combatant, RecordError> {
        Ok(Combatant::new(
            self.name.clone(),
            self.health,
            weapons.weapon(&self.weapon)?,
            armors.armor(&self.armor)?,
            self.gold,
        )?)
    }
}

impl BossSpec {
    fn build(
        &self,
        weapons: &dyn WeaponOracle,
        armors: &dyn ArmorOracle,
    ) -> Result<Combatant, RecordError> {
        Ok(Combatant::new(
            self.name.clone(),
            self.health,
            weapons.weapon(&self.weapon)?,
            armors.armor(&self.armor)?,
            self.gold,
        )?
        .with_level(self.level)?)
    }
}

/// Loader for level rosters from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load levels from a RON file, resolving equipment through the catalog.
    ///
    /// RON format: `Vec<LevelSpec>`. Enemies with unknown equipment or invalid
    /// stats are skipped; a level left without enemies or without a usable
    /// boss fails the load.
    pub fn load(
        path: &Path,
        weapons: &dyn WeaponOracle,
        armors: &dyn ArmorOracle,
    ) -> LoadResult<Vec<LevelContent>> {
        let content = read_file(path)?;
        Self::parse(&content, weapons, armors)
    }

    pub fn parse(
        content: &str,
        weapons: &dyn WeaponOracle,
        armors: &dyn ArmorOracle,
    ) -> LoadResult<Vec<LevelContent>> {
        let specs: Vec<LevelSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let mut levels: Vec<LevelContent> = Vec::with_capacity(specs.len());
        for spec in specs {
            anyhow::ensure!(
                !levels.iter().any(|level| level.level == spec.level),
                "Level {} is defined twice",
                spec.level
            );

            let enemies: Vec<Combatant> = spec
                .enemies
                .iter()
                .filter_map(|enemy| match enemy.build(weapons, armors) {
                    Ok(combatant) => Some(combatant),
                    Err(error) => {
                        warn!(level = spec.level, enemy = %enemy.name, %error, "skipping enemy");
                        None
                    }
                })
                .collect();
            anyhow::ensure!(!enemies.is_empty(), "Level {} has no enemies", spec.level);

            let boss_spec = spec
                .boss
                .as_ref()
                .with_context(|| format!("Level {} has no boss", spec.level))?;
            let boss = boss_spec.build(weapons, armors).with_context(|| {
                format!("Invalid boss '{}' for level {}", boss_spec.name, spec.level)
            })?;

            levels.push(LevelContent {
                level: spec.level,
                enemies,
                boss,
            });
        }
        levels.sort_by_key(|level| level.level);
        Ok(levels)
    }
}
