//! Error types for the fight loop.

use crate::engine::FightState;
use crate::error::{ErrorSeverity, GameError};
use crate::state::CombatantError;

/// Errors surfaced while driving a fight.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FightError {
    /// The fight already reached a terminal state.
    #[error("fight is already over ({state})")]
    AlreadyOver { state: FightState },

    /// Loot could not be transferred to the winner.
    #[error("loot transfer failed: {0}")]
    Loot(#[from] CombatantError),
}

impl GameError for FightError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            FightError::AlreadyOver { .. } => ErrorSeverity::Validation,
            FightError::Loot(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            FightError::AlreadyOver { .. } => "FIGHT_ALREADY_OVER",
            FightError::Loot(inner) => inner.error_code(),
        }
    }
}
