//! Content factory for building the catalog and rosters from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use fight_core::CombatConfig;
use tracing::info;

use crate::catalog::Catalog;
use crate::levels::LevelContent;
use crate::loaders::{
    ArmorLoader, ConfigLoader, LevelLoader, LoadResult, NewGameLoader, ShopLoader, WeaponLoader,
};
use crate::player::PlayerTemplate;
use crate::shops::ShopCatalog;

/// Everything a game session needs from the data directory.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub config: CombatConfig,
    pub catalog: Catalog,
    pub levels: Vec<LevelContent>,
    pub shops: ShopCatalog,
    pub new_game: PlayerTemplate,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── weapons.ron
/// ├── armors.ron
/// ├── levels.ron
/// ├── shops.toml
/// └── new_game.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat tuning from `config.toml`, or the defaults when absent.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load weapon and armor templates from `weapons.ron` and `armors.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let mut catalog = Catalog::new();
        catalog.extend(WeaponLoader::load(&self.data_dir.join("weapons.ron"))?);
        catalog.extend(ArmorLoader::load(&self.data_dir.join("armors.ron"))?);
        Ok(catalog)
    }

    /// Load level rosters from `levels.ron`.
    pub fn load_levels(&self, catalog: &Catalog) -> LoadResult<Vec<LevelContent>> {
        let path = self.data_dir.join("levels.ron");
        let levels = LevelLoader::load(&path, catalog, catalog)?;
        anyhow::ensure!(!levels.is_empty(), "No levels defined in {}", path.display());
        Ok(levels)
    }

    /// Load shop offers and prices from `shops.toml`.
    pub fn load_shops(&self, catalog: &Catalog) -> LoadResult<ShopCatalog> {
        ShopLoader::load(&self.data_dir.join("shops.toml"), catalog, catalog)
    }

    /// Load the starting player from `new_game.toml`.
    pub fn load_new_game(&self) -> LoadResult<PlayerTemplate> {
        NewGameLoader::load(&self.data_dir.join("new_game.toml"))
    }

    /// Load every content file.
    pub fn load_all(&self) -> LoadResult<GameContent> {
        let config = self.load_config()?;
        let catalog = self.load_catalog()?;
        let levels = self.load_levels(&catalog)?;
        let shops = self.load_shops(&catalog)?;
        let new_game = self.load_new_game()?;

        new_game
            .spawn(&catalog, &catalog)
            .context("New game template references unknown equipment")?;

        info!(
            weapons = catalog.weapon_count(),
            armors = catalog.armor_count(),
            levels = levels.len(),
            dir = %self.data_dir.display(),
            "content loaded"
        );
        Ok(GameContent {
            config,
            catalog,
            levels,
            shops,
            new_game,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), CombatConfig::default());
        assert!(factory.load_catalog().is_err());
    }
}
