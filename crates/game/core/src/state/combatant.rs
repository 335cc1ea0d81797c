use std::sync::Arc;

use crate::combat::{DamagePayload, apply_damage, mitigate};
use crate::env::{Env, RandomSource};
use crate::state::{Armor, CombatantError, PoisonState, PoisonTickResult, Weapon};

/// A fighter, boss or player.
///
/// Bosses differ only by carrying a level; players gain levels by defeating
/// bosses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    level: Option<u32>,
    health: u32,
    max_health: u32,
    weapon: Weapon,
    armor: Arc<Armor>,
    gold: u32,
    poison: Option<PoisonState>,
}

impl Combatant {
    /// Creates a combatant at full health.
    ///
    /// # Errors
    ///
    /// `NonPositiveHealth` when `health` is zero.
    pub fn new(
        name: impl Into<String>,
        health: u32,
        weapon: Weapon,
        armor: Arc<Armor>,
        gold: u32,
    ) -> Result<Self, CombatantError> {
        if health == 0 {
            return Err(CombatantError::NonPositiveHealth);
        }
        Ok(Self {
            name: name.into(),
            level: None,
            health,
            max_health: health,
            weapon,
            armor,
            gold,
            poison: None,
        })
    }

    /// Sets the level (builder pattern).
    pub fn with_level(mut self, level: u32) -> Result<Self, CombatantError> {
        if level == 0 {
            return Err(CombatantError::InvalidLevel);
        }
        self.level = Some(level);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Option<u32> {
        self.level
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn weapon_mut(&mut self) -> &mut Weapon {
        &mut self.weapon
    }

    pub fn armor(&self) -> &Arc<Armor> {
        &self.armor
    }

    pub fn poison(&self) -> Option<&PoisonState> {
        self.poison.as_ref()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_full_health(&self) -> bool {
        self.health >= self.max_health
    }

    pub fn is_poisoned(&self) -> bool {
        self.poison.is_some_and(|poison| poison.remaining_turns() > 0)
    }

    /// Applies an incoming strike and returns the damage actually delivered.
    ///
    /// Armor only counts on a successful mitigation roll (one in
    /// `mitigation_odds`); otherwise the full payload lands.
    pub fn take_damage(&mut self, payload: &DamagePayload, env: &mut Env<'_>) -> u32 {
        let odds = env.config().mitigation_odds;
        let mitigated = env.rng().one_in(odds);
        let delivered = if mitigated {
            mitigate(payload.damage(), self.armor.defense)
        } else {
            payload.damage()
        };
        self.health = apply_damage(self.health, delivered);
        delivered
    }

    /// Damage that bypasses armor (recoil, poison).
    pub fn take_self_damage(&mut self, amount: u32) {
        if amount > 0 {
            self.health = apply_damage(self.health, amount);
        }
    }

    /// Applies or merges a poison.
    ///
    /// An active poison keeps the stronger damage and refreshes chance and
    /// duration from the new application; an expired one is replaced.
    pub fn apply_poison(&mut self, poison: PoisonState) {
        if !poison.has_effect() {
            return;
        }
        self.poison = Some(match self.poison {
            Some(existing) if existing.remaining_turns() > 0 => existing.merged_with(poison),
            _ => poison,
        });
    }

    /// Advances the active poison by one turn.
    ///
    /// The returned damage is not applied here; the fight loop does that via
    /// [`take_self_damage`](Self::take_self_damage).
    pub fn tick_poison(&mut self, rng: &mut dyn RandomSource) -> PoisonTickResult {
        let Some(mut poison) = self.poison.take() else {
            return PoisonTickResult::none();
        };
        if poison.remaining_turns() == 0 {
            return PoisonTickResult::none();
        }

        let triggered = rng.roll_percent(poison.tick_chance_percent());
        let damage = if triggered { poison.damage_per_turn() } else { 0 };
        poison.consume_turn();
        if poison.remaining_turns() > 0 {
            self.poison = Some(poison);
        }
        PoisonTickResult::from_tick(triggered, damage, poison.remaining_turns())
    }

    /// Removes any poison, returning it.
    pub fn cure_poison(&mut self) -> Option<PoisonState> {
        self.poison.take()
    }

    /// Puts back a persisted poison; poisons without effect clear the slot.
    pub fn restore_poison(&mut self, poison: Option<PoisonState>) {
        self.poison = poison.filter(PoisonState::has_effect);
    }

    /// Spends gold if there is enough; leaves gold untouched otherwise.
    pub fn try_spend_gold(&mut self, amount: u32) -> bool {
        match self.gold.checked_sub(amount) {
            Some(remaining) => {
                self.gold = remaining;
                true
            }
            None => false,
        }
    }

    /// # Errors
    ///
    /// `GoldOverflow` (fatal) when the sum does not fit.
    pub fn gain_gold(&mut self, amount: u32) -> Result<(), CombatantError> {
        self.gold = self
            .gold
            .checked_add(amount)
            .ok_or(CombatantError::GoldOverflow {
                current: self.gold,
                amount,
            })?;
        Ok(())
    }

    /// Hands all of this combatant's gold to `winner`, returning the amount.
    ///
    /// Nothing moves if the winner cannot hold it.
    pub fn transfer_gold_to(&mut self, winner: &mut Combatant) -> Result<u32, CombatantError> {
        let amount = self.gold;
        if amount == 0 {
            return Ok(0);
        }
        winner.gain_gold(amount)?;
        self.gold = 0;
        Ok(amount)
    }

    /// Equips a weapon, returning the previous one.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Weapon {
        core::mem::replace(&mut self.weapon, weapon)
    }

    /// Equips armor, returning the previous one.
    pub fn equip_armor(&mut self, armor: Arc<Armor>) -> Arc<Armor> {
        core::mem::replace(&mut self.armor, armor)
    }

    pub fn heal_to_full(&mut self) {
        self.health = self.max_health;
    }

    /// Overwrites current and max health (used when loading a save).
    pub fn restore_health(&mut self, health: u32, max_health: u32) -> Result<(), CombatantError> {
        if max_health == 0 {
            return Err(CombatantError::NonPositiveHealth);
        }
        if health > max_health {
            return Err(CombatantError::HealthOutOfRange { health, max_health });
        }
        self.health = health;
        self.max_health = max_health;
        Ok(())
    }

    /// Raises the level by one, starting from level 1 when unset.
    pub fn level_up(&mut self) -> u32 {
        let next = self.level.unwrap_or(1).saturating_add(1);
        self.level = Some(next);
        next
    }
}
