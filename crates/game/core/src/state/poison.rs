//! Damage-over-time status effect.
//!
//! A [`PoisonState`] is created from a poison modifier's template, merged into
//! a combatant's poison slot, and advanced once per fighter turn.

use super::PoisonError;

/// Active (or template) poison.
///
/// `tick_chance_percent` is the chance in `0..=100` that a tick deals damage;
/// `remaining_turns` counts down by one on every tick whether or not it triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoisonState {
    tick_chance_percent: u8,
    damage_per_turn: u32,
    remaining_turns: u32,
}

impl PoisonState {
    pub const MAX_TICK_CHANCE: u8 = 100;

    /// Creates a poison, rejecting tick chances above 100%.
    pub fn new(
        tick_chance_percent: u8,
        damage_per_turn: u32,
        remaining_turns: u32,
    ) -> Result<Self, PoisonError> {
        if tick_chance_percent > Self::MAX_TICK_CHANCE {
            return Err(PoisonError::TickChanceOutOfRange(tick_chance_percent.into()));
        }
        Ok(Self {
            tick_chance_percent,
            damage_per_turn,
            remaining_turns,
        })
    }

    pub fn tick_chance_percent(&self) -> u8 {
        self.tick_chance_percent
    }

    pub fn damage_per_turn(&self) -> u32 {
        self.damage_per_turn
    }

    pub fn remaining_turns(&self) -> u32 {
        self.remaining_turns
    }

    /// True when the poison can ever deal damage: every field is positive.
    pub fn has_effect(&self) -> bool {
        self.tick_chance_percent > 0 && self.damage_per_turn > 0 && self.remaining_turns > 0
    }

    /// Merges a fresh application into this (still active) poison.
    ///
    /// Chance and duration refresh from `incoming`; damage never downgrades.
    #[must_use]
    pub fn merged_with(self, incoming: PoisonState) -> Self {
        Self {
            tick_chance_percent: incoming.tick_chance_percent,
            damage_per_turn: self.damage_per_turn.max(incoming.damage_per_turn),
            remaining_turns: incoming.remaining_turns,
        }
    }

    /// Consumes one turn of duration.
    pub(crate) fn consume_turn(&mut self) {
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
    }
}

/// Outcome of advancing a combatant's poison by one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoisonTickResult {
    pub had_poison: bool,
    pub triggered: bool,
    pub damage: u32,
    pub remaining_turns: u32,
}

impl PoisonTickResult {
    /// No poison was active.
    pub const fn none() -> Self {
        Self {
            had_poison: false,
            triggered: false,
            damage: 0,
            remaining_turns: 0,
        }
    }

    pub const fn from_tick(triggered: bool, damage: u32, remaining_turns: u32) -> Self {
        Self {
            had_poison: true,
            triggered,
            damage,
            remaining_turns,
        }
    }

    /// The poison ran out on this tick.
    pub const fn expired(&self) -> bool {
        self.had_poison && self.remaining_turns == 0
    }
}
