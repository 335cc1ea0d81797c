//! New-game player template loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::player::PlayerTemplate;

/// Loader for the starting player from TOML files.
pub struct NewGameLoader;

impl NewGameLoader {
    pub fn load(path: &Path) -> LoadResult<PlayerTemplate> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PlayerTemplate> {
        let template: PlayerTemplate = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse new game TOML: {}", e))?;
        anyhow::ensure!(
            !template.name.trim().is_empty(),
            "New game template has no player name"
        );
        Ok(template)
    }
}
