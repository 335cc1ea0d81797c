//! Weapon template loader.

use std::path::Path;

use fight_core::{
    Breakable, ModifierError, PoisonCoating, PoisonState, Repairable, SelfDamage, Weapon,
    WeaponModifier,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::loaders::{LoadResult, read_file};

/// Modifier descriptor as written in `weapons.ron`.
///
/// Each variant is an explicit tag resolved by exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierSpec {
    Breakable {
        break_chance: u32,
        broken_template: String,
    },
    Repairable {
        target_template: String,
    },
    DoubleStrike,
    Poison {
        apply_chance_percent: u8,
        tick_chance_percent: u8,
        damage_per_turn: u32,
        duration_turns: u32,
    },
    SelfDamage {
        amount: u32,
    },
}

impl ModifierSpec {
    pub fn build(&self) -> Result<WeaponModifier, ModifierError> {
        Ok(match self {
            Self::Breakable {
                break_chance,
                broken_template,
            } => WeaponModifier::Breakable(Breakable::new(*break_chance, broken_template.clone())?),
            Self::Repairable { target_template } => {
                WeaponModifier::Repairable(Repairable::new(target_template.clone())?)
            }
            Self::DoubleStrike => WeaponModifier::DoubleStrike,
            Self::Poison {
                apply_chance_percent,
                tick_chance_percent,
                damage_per_turn,
                duration_turns,
            } => {
                let poison =
                    PoisonState::new(*tick_chance_percent, *damage_per_turn, *duration_turns)?;
                WeaponModifier::Poison(PoisonCoating::new(*apply_chance_percent, poison)?)
            }
            Self::SelfDamage { amount } => WeaponModifier::SelfDamage(SelfDamage::new(*amount)),
        })
    }
}

/// One weapon template. Modifiers run in the listed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub name: String,
    pub damage: u32,
    #[serde(default)]
    pub modifiers: Vec<ModifierSpec>,
}

impl WeaponSpec {
    pub fn build(&self) -> Result<Weapon, ModifierError> {
        let modifiers = self
            .modifiers
            .iter()
            .map(ModifierSpec::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Weapon::new(self.name.clone(), self.damage).with_modifiers(modifiers))
    }
}

/// Loader for weapon templates from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load weapon templates from a RON file.
    ///
    /// RON format: `Vec<WeaponSpec>`. Entries with no name or an invalid
    /// modifier are skipped with a warning.
    pub fn load(path: &Path) -> LoadResult<Vec<Weapon>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Weapon>> {
        let specs: Vec<WeaponSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;

        let mut weapons = Vec::with_capacity(specs.len());
        for spec in specs {
            if spec.name.trim().is_empty() {
                warn!("skipping weapon entry with no name");
                continue;
            }
            match spec.build() {
                Ok(weapon) => weapons.push(weapon),
                Err(error) => warn!(weapon = %spec.name, %error, "skipping weapon"),
            }
        }
        Ok(weapons)
    }
}
