//! Strike resolution primitives.
//!
//! Pure arithmetic used by the weapon pipeline and by combatants when a
//! strike lands. Nothing here rolls dice; the callers decide whether a strike
//! is critical or mitigated and these functions apply the result.
//!
//! # Core Functions
//!
//! - `critical_damage`: damage scaled by the critical multiplier
//! - `mitigate`: armor reduction (clamped to 0)
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;
pub mod payload;

pub use damage::{apply_damage, critical_damage, mitigate};
pub use payload::DamagePayload;
