//! Content loaders for reading game data from files.
//!
//! Each loader parses one file into core types. Entries that reference
//! unknown templates or carry invalid values are logged and skipped; a file
//! that cannot be read or parsed at all fails the load.

pub mod armor;
pub mod config;
pub mod factory;
pub mod level;
pub mod new_game;
pub mod shop;
pub mod weapon;

pub use armor::ArmorLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, GameContent};
pub use level::LevelLoader;
pub use new_game::NewGameLoader;
pub use shop::ShopLoader;
pub use weapon::{ModifierSpec, WeaponLoader, WeaponSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
