//! Composable weapon effects.
//!
//! Every modifier exposes the same fixed hook set, dispatched by exhaustive
//! match over [`WeaponModifier`]:
//!
//! | hook | when | effect |
//! |---|---|---|
//! | `before_attack` | before the critical roll | may request a template swap |
//! | `modify_payload` | after the critical roll | may add self-damage or poison |
//! | `capture_state` / `restore_state` | persistence | opaque per-modifier state |
//!
//! Hooks run in the weapon's registration order, so a weapon carrying two
//! poison modifiers applies whichever succeeds last.

use tracing::debug;

use crate::combat::DamagePayload;
use crate::env::RandomSource;
use crate::state::{ModifierError, PoisonState};

/// Breaks the weapon on a one-in-`break_chance` roll, swapping it to `broken_template`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakable {
    break_chance: u32,
    broken_template: String,
}

impl Breakable {
    pub fn new(break_chance: u32, broken_template: impl Into<String>) -> Result<Self, ModifierError> {
        if break_chance < 1 {
            return Err(ModifierError::BreakChanceTooLow);
        }
        let broken_template = broken_template.into();
        if broken_template.trim().is_empty() {
            return Err(ModifierError::MissingTemplateKey("broken weapon"));
        }
        Ok(Self {
            break_chance,
            broken_template,
        })
    }

    pub fn break_chance(&self) -> u32 {
        self.break_chance
    }

    pub fn broken_template(&self) -> &str {
        &self.broken_template
    }
}

/// Marks a broken weapon; repairing swaps it to `target_template`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repairable {
    target_template: String,
}

impl Repairable {
    pub fn new(target_template: impl Into<String>) -> Result<Self, ModifierError> {
        let target_template = target_template.into();
        if target_template.trim().is_empty() {
            return Err(ModifierError::MissingTemplateKey("repair target"));
        }
        Ok(Self { target_template })
    }

    pub fn target_template(&self) -> &str {
        &self.target_template
    }
}

/// Attaches a copy of `poison` when `draw(1, 101) <= apply_chance_percent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoisonCoating {
    apply_chance_percent: u8,
    poison: PoisonState,
}

impl PoisonCoating {
    pub fn new(apply_chance_percent: u8, poison: PoisonState) -> Result<Self, ModifierError> {
        if !(1..=100).contains(&apply_chance_percent) {
            return Err(ModifierError::ApplyChanceOutOfRange(
                apply_chance_percent.into(),
            ));
        }
        Ok(Self {
            apply_chance_percent,
            poison,
        })
    }

    pub fn apply_chance_percent(&self) -> u8 {
        self.apply_chance_percent
    }

    pub fn poison(&self) -> PoisonState {
        self.poison
    }
}

/// Hurts the wielder by a fixed amount on every strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelfDamage {
    amount: u32,
}

impl SelfDamage {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }
}

/// Closed set of weapon effects.
#[derive(Clone, Debug, PartialEq, Eq, strum::EnumDiscriminants)]
#[strum_discriminants(name(ModifierKind))]
#[strum_discriminants(derive(Hash, strum::Display, strum::EnumString, strum::AsRefStr))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
pub enum WeaponModifier {
    Breakable(Breakable),
    Repairable(Repairable),
    /// The wielder strikes twice per turn.
    DoubleStrike,
    Poison(PoisonCoating),
    SelfDamage(SelfDamage),
}

impl WeaponModifier {
    pub fn kind(&self) -> ModifierKind {
        ModifierKind::from(self)
    }

    /// Pre-strike hook. Returns the template key the weapon should become.
    pub fn before_attack(&self, rng: &mut dyn RandomSource) -> Option<String> {
        match self {
            Self::Breakable(breakable) => rng
                .one_in(breakable.break_chance)
                .then(|| breakable.broken_template.clone()),
            Self::Repairable(_) | Self::DoubleStrike | Self::Poison(_) | Self::SelfDamage(_) => {
                None
            }
        }
    }

    /// Payload hook. Each variant only touches its own concern.
    pub fn modify_payload(
        &self,
        payload: DamagePayload,
        rng: &mut dyn RandomSource,
    ) -> DamagePayload {
        match self {
            Self::SelfDamage(self_damage) => payload.with_self_damage(self_damage.amount),
            Self::Poison(coating) => {
                if !coating.poison.has_effect() || !rng.roll_percent(coating.apply_chance_percent)
                {
                    return payload;
                }
                payload.with_poison(coating.poison)
            }
            Self::Breakable(_) | Self::Repairable(_) | Self::DoubleStrike => payload,
        }
    }

    /// Opaque persisted state. Every current variant is stateless.
    pub fn capture_state(&self) -> Option<String> {
        None
    }

    /// Restores state produced by [`capture_state`](Self::capture_state).
    pub fn restore_state(&mut self, state: Option<&str>) {
        if let Some(state) = state {
            debug!(kind = %self.kind(), state, "ignoring state for stateless modifier");
        }
    }

    /// True when the weapon carrying this modifier is in a broken state.
    pub fn is_repairable(&self) -> bool {
        matches!(self, Self::Repairable(_))
    }

    /// Template a repair should swap to, if this modifier offers one.
    pub fn repair_target(&self) -> Option<&str> {
        match self {
            Self::Repairable(repairable) => Some(&repairable.target_template),
            _ => None,
        }
    }
}
