/// Combat tuning parameters.
///
/// Every roll in the strike pipeline reads its odds from here. The defaults are
/// the canonical rules; a `config.toml` in the content directory may override
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// A strike is critical when `draw(0, critical_odds) == 0`.
    pub critical_odds: u32,

    /// Damage multiplier applied to a critical strike.
    pub critical_multiplier: u32,

    /// Armor mitigates a strike when `draw(0, mitigation_odds) == 0`.
    pub mitigation_odds: u32,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CRITICAL_ODDS: u32 = 10;
    pub const DEFAULT_CRITICAL_MULTIPLIER: u32 = 2;
    pub const DEFAULT_MITIGATION_ODDS: u32 = 2;

    pub const DEFAULT: Self = Self {
        critical_odds: Self::DEFAULT_CRITICAL_ODDS,
        critical_multiplier: Self::DEFAULT_CRITICAL_MULTIPLIER,
        mitigation_odds: Self::DEFAULT_MITIGATION_ODDS,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true when every odds value can actually be rolled.
    pub const fn is_valid(&self) -> bool {
        self.critical_odds >= 1 && self.mitigation_odds >= 1 && self.critical_multiplier >= 1
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
