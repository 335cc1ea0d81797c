//! Repository layer for the saved game.
//!
//! Repositories handle data that CHANGES during play: the player's stats,
//! equipment condition, gold and poison. Static content (weapon and armor
//! templates, level rosters) is served by the catalog, and a save refers to it
//! only by key.

mod error;
mod file;
mod format;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use format::{decode_record, encode_record};
pub use memory::InMemorySaveRepository;
pub use traits::SaveGameRepository;
