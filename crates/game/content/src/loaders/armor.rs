//! Armor template loader.

use std::path::Path;

use fight_core::Armor;
use tracing::warn;

use crate::loaders::{LoadResult, read_file};

/// Loader for armor templates from RON files.
pub struct ArmorLoader;

impl ArmorLoader {
    /// Load armor templates from a RON file.
    ///
    /// RON format: `Vec<Armor>` (`(name: "Leather", defense: 2)`).
    pub fn load(path: &Path) -> LoadResult<Vec<Armor>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Armor>> {
        let armors: Vec<Armor> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse armor catalog RON: {}", e))?;

        Ok(armors
            .into_iter()
            .filter(|armor| {
                let named = !armor.name.trim().is_empty();
                if !named {
                    warn!("skipping armor entry with no name");
                }
                named
            })
            .collect())
    }
}
