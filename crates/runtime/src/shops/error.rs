use fight_core::{ErrorSeverity, GameError, WeaponError};

/// Errors from town services.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("not enough gold: costs {cost}g, you have {gold}g")]
    NotEnoughGold { cost: u32, gold: u32 },

    #[error("no offer numbered {index} (the shop has {count})")]
    NoSuchOffer { index: usize, count: usize },

    #[error("{0} is already in perfect condition")]
    NothingToRepair(String),

    #[error("already at full health")]
    AlreadyFullHealth,

    #[error("not poisoned")]
    NotPoisoned,

    #[error(transparent)]
    Repair(#[from] WeaponError),
}

impl GameError for ShopError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotEnoughGold { .. } | Self::AlreadyFullHealth | Self::NotPoisoned => {
                ErrorSeverity::Recoverable
            }
            Self::NoSuchOffer { .. } | Self::NothingToRepair(_) => ErrorSeverity::Validation,
            Self::Repair(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEnoughGold { .. } => "SHOP_NOT_ENOUGH_GOLD",
            Self::NoSuchOffer { .. } => "SHOP_NO_SUCH_OFFER",
            Self::NothingToRepair(_) => "SHOP_NOTHING_TO_REPAIR",
            Self::AlreadyFullHealth => "SHOP_ALREADY_FULL_HEALTH",
            Self::NotPoisoned => "SHOP_NOT_POISONED",
            Self::Repair(error) => error.error_code(),
        }
    }
}
