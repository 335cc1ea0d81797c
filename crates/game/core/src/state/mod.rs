//! Combat state: combatants, their equipment and their status effects.
//!
//! Everything here is owned by exactly one fight at a time. Weapons are
//! independent clones of catalog templates; armor is shared read-only.
mod armor;
mod combatant;
mod error;
mod poison;
mod record;
mod weapon;

pub use armor::Armor;
pub use combatant::Combatant;
pub use error::{CombatantError, ModifierError, PoisonError, RecordError, WeaponError};
pub use poison::{PoisonState, PoisonTickResult};
pub use record::CombatantRecord;
pub use weapon::{
    Breakable, ModifierKind, PoisonCoating, Repairable, SelfDamage, Weapon, WeaponModifier,
    WeaponState,
};
