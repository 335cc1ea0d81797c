//! Town services and persistence around the fight engine.
//!
//! This crate wires the core engine and the loaded content into the pieces a
//! client drives between fights. Consumers build a [`Town`] around the player
//! and route every purchase, heal and encounter through it.
//!
//! Modules are organized by responsibility:
//! - [`shops`] hosts the blacksmith, the armorer and the healer's hut
//! - [`town`] owns the player and hands out encounters
//! - [`repository`] saves and loads the player between sessions
pub mod repository;
pub mod shops;
pub mod town;

pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveGameRepository,
};
pub use shops::{Armorer, Blacksmith, HealersHut, ShopError};
pub use town::Town;
