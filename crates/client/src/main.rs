//! Fights client binary.
//!
//! # Examples
//!
//! ```bash
//! # Reproducible session with content from a custom directory
//! FIGHTS_SEED=42 FIGHTS_DATA_DIR=./my-data cargo run -p fights-client
//! ```

use std::io;

use anyhow::{Context, Result};
use fight_content::ContentFactory;
use fight_core::PcgRandom;
use fight_runtime::{FileSaveRepository, SaveGameRepository, Town};
use fights_client::{App, ClientConfig, ConsoleInput, ConsoleNarrator, SessionEnd, TerminalKeys};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = fights_client::logging::setup_logging(&config.log_dir)?;

    let content = ContentFactory::new(&config.data_dir)
        .load_all()
        .with_context(|| format!("Failed to load content from {}", config.data_dir.display()))?;
    let saves = FileSaveRepository::new(&config.save_file)?;

    let mut input = ConsoleInput::new(TerminalKeys, io::stdout());
    let player = fights_client::initial_player(&mut input, &saves, &content)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, save = %config.save_file.display(), "session started");

    let mut app = App::new(
        Town::new(player, content),
        input,
        ConsoleNarrator::new(io::stdout()),
        PcgRandom::new(seed),
    );
    let end = app.run()?;

    let town = app.into_town();
    match end {
        SessionEnd::LeftTown => {
            saves.save_player(town.player())?;
            println!("Your progress has been saved.");
        }
        SessionEnd::Defeated => println!("Progress was not saved."),
    }

    tracing::info!(?end, "session finished");
    Ok(())
}
