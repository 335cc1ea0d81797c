//! Fight turn loop.
//!
//! The [`Fight`] drives one encounter through the `InProgress` state until a
//! victory or a retreat. Each round fighter one acts fully before fighter two;
//! each turn resolves the acting fighter's poison before any of their strikes.
//! All terminal states are final: further rounds are rejected.

mod action;
mod errors;
mod fight;
mod outcome;

pub use action::{ActionSelector, AlwaysAttack, FightAction, RoundView};
pub use errors::FightError;
pub use fight::Fight;
pub use outcome::{FightOutcome, FightState, Loot};

/// Which of the two fighters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}
