//! File-based SaveGameRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use fight_core::{CombatantRecord, WeaponOracle};

use crate::repository::{
    RepositoryError, Result, SaveGameRepository, decode_record, encode_record,
};

/// File-based implementation of SaveGameRepository.
///
/// The save is a single flat `Key=Value` text file (see
/// [`encode_record`]), written to a sibling temp file and renamed into place
/// so a crash mid-save never leaves a truncated save behind.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    /// Create a repository for the save at `path`, creating its directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SaveGameRepository for FileSaveRepository {
    fn save(&self, record: &CombatantRecord) -> Result<()> {
        let text = encode_record(record)?;
        let temp_path = self.temp_path();

        // Write to temp file
        fs::write(&temp_path, text).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} to {}", record.name, self.path.display());

        Ok(())
    }

    fn load(&self, weapons: &dyn WeaponOracle) -> Result<Option<CombatantRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let record = decode_record(&text, weapons)?;

        tracing::debug!("Loaded {} from {}", record.name, self.path.display());

        Ok(Some(record))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted save {}", self.path.display());
        }

        Ok(())
    }
}
