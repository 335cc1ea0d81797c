//! Deterministic combat rules shared by the runtime and the terminal client.
//!
//! `fight-core` defines the canonical combat model: weapons and their modifier
//! pipeline, combatants with armor, gold and poison, and the [`engine::Fight`]
//! turn loop. Every random outcome is drawn from the [`RandomSource`] carried by
//! [`Env`], so a scripted source replays any encounter exactly.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use combat::{DamagePayload, apply_damage, critical_damage, mitigate};
pub use config::CombatConfig;
pub use engine::{
    ActionSelector, AlwaysAttack, Fight, FightAction, FightError, FightOutcome, FightState, Loot,
    RoundView, Side,
};
pub use env::{
    ArmorOracle, Env, Fallback, OracleError, PcgRandom, RandomSource, ScriptedRandom,
    WeaponOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use event::{DefeatCause, FightEvent, NarrationSink, StrikeVerb};
pub use state::{
    Armor, Breakable, Combatant, CombatantError, CombatantRecord, ModifierError, ModifierKind,
    PoisonCoating, PoisonError, PoisonState, PoisonTickResult, RecordError, Repairable,
    SelfDamage, Weapon, WeaponError, WeaponModifier, WeaponState,
};
