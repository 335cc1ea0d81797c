//! Terminal client for the fights simulator.
//!
//! The `fights` binary is the composition root: it reads [`ClientConfig`],
//! installs file logging, loads content, restores or creates the player and
//! hands everything to the [`App`] town loop. Input is single-key hotkey
//! selection; narration is printed as the engine emits it.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod menu;
pub mod narrator;

pub use app::{App, SessionEnd, initial_player};
pub use config::ClientConfig;
pub use input::{ConsoleInput, KeySource, ScriptedKeys, TerminalKeys};
pub use menu::{Menu, MenuOption};
pub use narrator::ConsoleNarrator;
