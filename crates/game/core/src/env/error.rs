//! Oracle access errors.
//!
//! Errors related to template availability and lookup.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when resolving weapon or armor templates.
///
/// A missing oracle means the caller built an [`Env`](super::Env) without a
/// template source; a missing key means content refers to a template that
/// was never loaded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// WeaponOracle is not available in the environment.
    #[error("WeaponOracle not available")]
    WeaponsNotAvailable,

    /// No weapon template is registered under the key.
    #[error("weapon template '{0}' not found")]
    WeaponNotFound(String),

    /// No armor template is registered under the key.
    #[error("armor template '{0}' not found")]
    ArmorNotFound(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            WeaponsNotAvailable => ErrorSeverity::Internal,
            WeaponNotFound(_) | ArmorNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            WeaponsNotAvailable => "ORACLE_WEAPONS_NOT_AVAILABLE",
            WeaponNotFound(_) => "ORACLE_WEAPON_NOT_FOUND",
            ArmorNotFound(_) => "ORACLE_ARMOR_NOT_FOUND",
        }
    }
}
