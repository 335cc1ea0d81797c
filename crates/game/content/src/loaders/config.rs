//! Combat tuning loader.

use std::path::Path;

use fight_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the defaults; zero odds are rejected.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        anyhow::ensure!(
            config.is_valid(),
            "Invalid combat config: odds and multiplier must be at least 1 ({config:?})"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("critical_odds = 5").unwrap();

        assert_eq!(config.critical_odds, 5);
        assert_eq!(config.critical_multiplier, CombatConfig::DEFAULT_CRITICAL_MULTIPLIER);
        assert_eq!(config.mitigation_odds, CombatConfig::DEFAULT_MITIGATION_ODDS);
    }

    #[test]
    fn zero_odds_are_rejected() {
        assert!(ConfigLoader::parse("mitigation_odds = 0").is_err());
    }
}
