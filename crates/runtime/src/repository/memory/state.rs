//! In-memory SaveGameRepository implementation for tests and local runs.

use std::sync::RwLock;

use fight_core::{CombatantRecord, WeaponOracle};

use crate::repository::{RepositoryError, Result, SaveGameRepository};

/// In-memory implementation of SaveGameRepository.
///
/// Holds at most one record; nothing survives the process.
#[derive(Default)]
pub struct InMemorySaveRepository {
    record: RwLock<Option<CombatantRecord>>,
}

impl InMemorySaveRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an existing save.
    pub fn with_record(record: CombatantRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }
}

impl SaveGameRepository for InMemorySaveRepository {
    fn save(&self, record: &CombatantRecord) -> Result<()> {
        let mut slot = self
            .record
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(record.clone());
        Ok(())
    }

    fn load(&self, _weapons: &dyn WeaponOracle) -> Result<Option<CombatantRecord>> {
        let slot = self
            .record
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn exists(&self) -> bool {
        self.record
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut slot = self
            .record
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}
