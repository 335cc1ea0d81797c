//! Everything a fight reads from outside the combatants.
//!
//! The [`Env`] aggregate bundles the random source, the combat tuning, the
//! optional weapon template source and the optional narration sink, so the
//! engine never reaches for globals.
mod error;
mod rng;
mod templates;

pub use error::OracleError;
pub use rng::{Fallback, PcgRandom, RandomSource, ScriptedRandom};
pub use templates::{ArmorOracle, WeaponOracle};

use crate::config::CombatConfig;
use crate::event::{FightEvent, NarrationSink};

static DEFAULT_CONFIG: CombatConfig = CombatConfig::DEFAULT;

/// Aggregates the collaborators required by the strike pipeline and the fight loop.
pub struct Env<'a> {
    rng: &'a mut dyn RandomSource,
    config: &'a CombatConfig,
    weapons: Option<&'a dyn WeaponOracle>,
    narration: Option<&'a mut dyn NarrationSink>,
}

impl<'a> Env<'a> {
    /// Environment with default tuning, no template source and no narration.
    pub fn new(rng: &'a mut dyn RandomSource) -> Self {
        Self {
            rng,
            config: &DEFAULT_CONFIG,
            weapons: None,
            narration: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: &'a CombatConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_weapons(mut self, weapons: &'a dyn WeaponOracle) -> Self {
        self.weapons = Some(weapons);
        self
    }

    #[must_use]
    pub fn with_narration(mut self, sink: &'a mut dyn NarrationSink) -> Self {
        self.narration = Some(sink);
        self
    }

    pub fn rng(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }

    /// Returns the WeaponOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::WeaponsNotAvailable` if no weapon source was provided.
    pub fn weapons(&self) -> Result<&'a dyn WeaponOracle, OracleError> {
        self.weapons.ok_or(OracleError::WeaponsNotAvailable)
    }

    /// Forwards an event to the narration sink, if any.
    pub fn narrate(&mut self, event: FightEvent) {
        if let Some(sink) = self.narration.as_deref_mut() {
            sink.narrate(event);
        }
    }
}

impl core::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("config", self.config)
            .field("weapons", &self.weapons.is_some())
            .field("narration", &self.narration.is_some())
            .finish_non_exhaustive()
    }
}
