//! State validation errors.
//!
//! Errors raised when constructing or mutating combatants, weapons, modifiers
//! and poison, and when rebuilding them from persisted records.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Errors from constructing a [`PoisonState`](super::PoisonState).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoisonError {
    /// Tick chance is outside `0..=100`.
    #[error("tick chance must be between 0 and 100 (got {0})")]
    TickChanceOutOfRange(u32),
}

impl GameError for PoisonError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            PoisonError::TickChanceOutOfRange(_) => "POISON_TICK_CHANCE_OUT_OF_RANGE",
        }
    }
}

/// Errors from constructing a [`WeaponModifier`](super::WeaponModifier).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierError {
    /// Break chance must be at least one.
    #[error("break chance must be at least 1")]
    BreakChanceTooLow,

    /// Apply chance is outside `1..=100`.
    #[error("apply chance must be between 1 and 100 (got {0})")]
    ApplyChanceOutOfRange(u32),

    /// A template key was empty or whitespace.
    #[error("{0} template key must be specified")]
    MissingTemplateKey(&'static str),

    /// Poison template is invalid.
    #[error(transparent)]
    Poison(#[from] PoisonError),
}

impl GameError for ModifierError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ModifierError::*;
        match self {
            BreakChanceTooLow => "MODIFIER_BREAK_CHANCE_TOO_LOW",
            ApplyChanceOutOfRange(_) => "MODIFIER_APPLY_CHANCE_OUT_OF_RANGE",
            MissingTemplateKey(_) => "MODIFIER_MISSING_TEMPLATE_KEY",
            Poison(inner) => inner.error_code(),
        }
    }
}

/// Errors from weapon state restore and repair.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WeaponError {
    /// Persisted state belongs to a different weapon template.
    #[error("weapon state for '{found}' cannot be restored onto '{expected}'")]
    TemplateMismatch { expected: String, found: String },

    /// Persisted state lists more modifier states than the weapon has modifiers.
    #[error("weapon state has {found} modifier states, weapon has {expected} modifiers")]
    StateShapeMismatch { expected: usize, found: usize },

    /// No modifier on the weapon reports it as repairable.
    #[error("'{0}' does not need repair")]
    NotRepairable(String),

    /// A template swap could not be resolved.
    #[error(transparent)]
    Template(#[from] OracleError),
}

impl GameError for WeaponError {
    fn severity(&self) -> ErrorSeverity {
        use WeaponError::*;
        match self {
            TemplateMismatch { .. } | StateShapeMismatch { .. } => ErrorSeverity::Validation,
            NotRepairable(_) => ErrorSeverity::Recoverable,
            Template(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use WeaponError::*;
        match self {
            TemplateMismatch { .. } => "WEAPON_TEMPLATE_MISMATCH",
            StateShapeMismatch { .. } => "WEAPON_STATE_SHAPE_MISMATCH",
            NotRepairable(_) => "WEAPON_NOT_REPAIRABLE",
            Template(inner) => inner.error_code(),
        }
    }
}

/// Errors from combatant construction and gold/health mutation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatantError {
    /// Max health must be positive.
    #[error("health must be positive")]
    NonPositiveHealth,

    /// Current health exceeds max health.
    #[error("health {health} exceeds max health {max_health}")]
    HealthOutOfRange { health: u32, max_health: u32 },

    /// Level must be at least one.
    #[error("level must be at least 1")]
    InvalidLevel,

    /// Gold gain would overflow.
    #[error("gold overflow: {current} + {amount}")]
    GoldOverflow { current: u32, amount: u32 },
}

impl GameError for CombatantError {
    fn severity(&self) -> ErrorSeverity {
        use CombatantError::*;
        match self {
            NonPositiveHealth | HealthOutOfRange { .. } | InvalidLevel => ErrorSeverity::Validation,
            // Gold can never silently wrap
            GoldOverflow { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CombatantError::*;
        match self {
            NonPositiveHealth => "COMBATANT_NON_POSITIVE_HEALTH",
            HealthOutOfRange { .. } => "COMBATANT_HEALTH_OUT_OF_RANGE",
            InvalidLevel => "COMBATANT_INVALID_LEVEL",
            GoldOverflow { .. } => "COMBATANT_GOLD_OVERFLOW",
        }
    }
}

/// Errors from rebuilding a combatant out of a persisted record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Template(#[from] OracleError),

    #[error(transparent)]
    Weapon(#[from] WeaponError),

    #[error(transparent)]
    Combatant(#[from] CombatantError),

    #[error(transparent)]
    Poison(#[from] PoisonError),
}

impl GameError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RecordError::Template(e) => e.severity(),
            RecordError::Weapon(e) => e.severity(),
            RecordError::Combatant(e) => e.severity(),
            RecordError::Poison(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RecordError::Template(e) => e.error_code(),
            RecordError::Weapon(e) => e.error_code(),
            RecordError::Combatant(e) => e.error_code(),
            RecordError::Poison(e) => e.error_code(),
        }
    }
}
