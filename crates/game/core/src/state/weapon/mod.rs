//! Weapons and their modifier pipeline.
//!
//! A weapon is an owned clone of a catalog template: a fixed template key, a
//! mutable display name and damage, and an ordered list of modifiers. Breaking
//! and repairing never patch fields one by one; they swap in a whole template
//! resolved through a [`WeaponOracle`], so name, damage and modifiers always
//! stay consistent with some catalog entry.
mod modifier;
mod state;

pub use modifier::{
    Breakable, ModifierKind, PoisonCoating, Repairable, SelfDamage, WeaponModifier,
};
pub use state::WeaponState;

use tracing::{debug, warn};

use crate::combat::{DamagePayload, critical_damage};
use crate::env::{Env, WeaponOracle};
use crate::event::FightEvent;
use crate::state::WeaponError;

/// An equipped weapon instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Weapon {
    template_name: String,
    name: String,
    damage: u32,
    base_damage: u32,
    modifiers: Vec<WeaponModifier>,
}

impl Weapon {
    /// Creates a weapon whose template key is its display name.
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        let name = name.into();
        Self {
            template_name: name.clone(),
            name,
            damage,
            base_damage: damage,
            modifiers: Vec::new(),
        }
    }

    /// Appends a modifier (builder pattern). Order is execution order.
    #[must_use]
    pub fn with_modifier(mut self, modifier: WeaponModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = WeaponModifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn base_damage(&self) -> u32 {
        self.base_damage
    }

    pub fn modifiers(&self) -> &[WeaponModifier] {
        &self.modifiers
    }

    pub fn has_modifier(&self, kind: ModifierKind) -> bool {
        self.modifiers.iter().any(|modifier| modifier.kind() == kind)
    }

    /// Strikes per turn: two with a double-strike modifier, otherwise one.
    pub fn strikes_per_turn(&self) -> u32 {
        if self.has_modifier(ModifierKind::DoubleStrike) {
            2
        } else {
            1
        }
    }

    /// Resolves one strike.
    ///
    /// 1. `before_attack` runs in order; the first modifier to request a swap
    ///    replaces the weapon and the remaining hooks are skipped.
    /// 2. A critical roll multiplies the *current* damage for this strike only.
    /// 3. `modify_payload` folds over the (possibly swapped) modifier list.
    pub fn create_damage_payload(&mut self, env: &mut Env<'_>) -> DamagePayload {
        let swap = self
            .modifiers
            .iter()
            .find_map(|modifier| modifier.before_attack(env.rng()));
        if let Some(key) = swap {
            self.shatter(&key, env);
        }

        let config = env.config();
        let critical = env.rng().one_in(config.critical_odds);
        let damage = if critical {
            critical_damage(self.damage, config.critical_multiplier)
        } else {
            self.damage
        };

        self.modifiers
            .iter()
            .fold(DamagePayload::new(damage, critical), |payload, modifier| {
                modifier.modify_payload(payload, env.rng())
            })
    }

    fn shatter(&mut self, key: &str, env: &mut Env<'_>) {
        let original = self.name.clone();
        let replacement = match env.weapons().and_then(|weapons| weapons.weapon(key)) {
            Ok(template) => {
                self.replace_with(template);
                debug!(from = %original, to = %self.name, "weapon shattered");
                Some(self.name.clone())
            }
            Err(error) => {
                warn!(weapon = %original, key, %error, "broken template unavailable");
                None
            }
        };
        env.narrate(FightEvent::WeaponShattered {
            weapon: original,
            replacement,
        });
    }

    /// Swaps in another template's display name, damage and modifier set.
    ///
    /// The template key is kept: the instance is still the weapon it was
    /// bought as, only in a different condition.
    pub fn replace_with(&mut self, template: Weapon) {
        self.name = template.name;
        self.damage = template.damage;
        self.base_damage = template.base_damage;
        self.modifiers = template.modifiers;
    }

    pub fn capture_state(&self) -> WeaponState {
        WeaponState {
            template_name: self.template_name.clone(),
            name: self.name.clone(),
            damage: self.damage,
            modifier_states: self
                .modifiers
                .iter()
                .map(WeaponModifier::capture_state)
                .collect(),
        }
    }

    /// Re-applies a captured state onto this weapon.
    ///
    /// When the captured display name differs from the current one and
    /// `weapons` knows that name, its modifier set is adopted first, so a
    /// weapon saved while broken comes back broken (and repairable).
    ///
    /// # Errors
    ///
    /// Returns `WeaponError::TemplateMismatch` when `state` was captured from
    /// a different template, and `StateShapeMismatch` when it carries more
    /// modifier states than the weapon has modifiers. Missing trailing
    /// entries restore as stateless. The weapon is untouched on error.
    pub fn restore_state(
        &mut self,
        state: &WeaponState,
        weapons: Option<&dyn WeaponOracle>,
    ) -> Result<(), WeaponError> {
        if state.template_name != self.template_name {
            return Err(WeaponError::TemplateMismatch {
                expected: self.template_name.clone(),
                found: state.template_name.clone(),
            });
        }

        let adopted = if state.name == self.name {
            None
        } else {
            weapons.and_then(|weapons| weapons.weapon(&state.name).ok())
        };
        let expected = adopted
            .as_ref()
            .map_or(self.modifiers.len(), |template| template.modifiers.len());
        let found = state.modifier_states.len();
        if found > expected {
            return Err(WeaponError::StateShapeMismatch { expected, found });
        }
        if let Some(template) = adopted {
            self.replace_with(template);
        }

        self.name.clone_from(&state.name);
        self.damage = state.damage;
        for (index, modifier) in self.modifiers.iter_mut().enumerate() {
            let saved = state.modifier_states.get(index).and_then(Option::as_deref);
            modifier.restore_state(saved);
        }
        Ok(())
    }

    /// True when any modifier marks the weapon as broken.
    pub fn can_repair(&self) -> bool {
        self.modifiers.iter().any(WeaponModifier::is_repairable)
    }

    /// Resolves the template a repair would swap to, without changing anything.
    ///
    /// # Errors
    ///
    /// `NotRepairable` when nothing marks the weapon as broken, `Template`
    /// when the target key is not registered.
    pub fn resolve_repair(&self, weapons: &dyn WeaponOracle) -> Result<Weapon, WeaponError> {
        let target = self
            .modifiers
            .iter()
            .find_map(WeaponModifier::repair_target)
            .ok_or_else(|| WeaponError::NotRepairable(self.name.clone()))?;
        Ok(weapons.weapon(target)?)
    }

    /// Repairs the weapon in place through a full template swap.
    pub fn try_repair(&mut self, weapons: &dyn WeaponOracle) -> Result<(), WeaponError> {
        let template = self.resolve_repair(weapons)?;
        debug!(from = %self.name, to = %template.name, "weapon repaired");
        self.replace_with(template);
        Ok(())
    }
}
