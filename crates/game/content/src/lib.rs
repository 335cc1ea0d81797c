//! Data-driven combat content and loaders.
//!
//! This crate houses the template catalog and provides loaders for RON/TOML data files:
//! - Weapon templates with their modifier lists (RON)
//! - Armor templates (RON)
//! - Level rosters: regular enemies plus one boss per level (RON)
//! - Shop offers and service prices (TOML)
//! - The new-game player template (TOML)
//! - Combat tuning (TOML, optional)
//!
//! Templates are served to the engine through the core `WeaponOracle` and
//! `ArmorOracle` traits; content never appears in saved state except by key.

pub mod catalog;
pub mod levels;
pub mod player;
pub mod shops;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::Catalog;
pub use levels::LevelContent;
pub use player::PlayerTemplate;
pub use shops::{Offer, ShopCatalog, ShopPrices};

#[cfg(feature = "loaders")]
pub use loaders::{
    ArmorLoader, ConfigLoader, ContentFactory, GameContent, LevelLoader, ModifierSpec,
    NewGameLoader, ShopLoader, WeaponLoader, WeaponSpec,
};
