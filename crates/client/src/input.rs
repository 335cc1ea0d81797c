//! Console input.
//!
//! Menus are printed in cooked mode; the terminal only switches to raw mode
//! while waiting for a single key press, so a choice never needs Enter.

use std::collections::VecDeque;
use std::io::{self, Write};

use crossterm::event::{self as term_event, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use fight_core::{ActionSelector, FightAction, RoundView};
use strum::IntoEnumIterator;
use tracing::warn;

use crate::menu::Menu;

/// Source of key presses.
pub trait KeySource {
    /// Next pressed character. `Interrupted` when the user aborts.
    fn next_key(&mut self) -> io::Result<char>;
}

/// Reads key presses from the real terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalKeys;

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<char> {
        let _raw = RawModeGuard::enable()?;
        loop {
            let TermEvent::Key(key) = term_event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "aborted"));
                }
                KeyCode::Char(c) => return Ok(c),
                KeyCode::Enter => return Ok('\n'),
                KeyCode::Esc => return Ok('\u{1b}'),
                _ => {}
            }
        }
    }
}

/// Scripted key presses for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<char>,
}

impl ScriptedKeys {
    pub fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<char> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted keys left"))
    }
}

/// Prints prompts to `out` and waits for a matching hotkey.
pub struct ConsoleInput<K, W> {
    keys: K,
    out: W,
}

impl<K: KeySource, W: Write> ConsoleInput<K, W> {
    pub fn new(keys: K, out: W) -> Self {
        Self { keys, out }
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())?;
        self.out.flush()
    }

    /// Shows `menu` and blocks until one of its hotkeys is pressed.
    pub fn select<'m, T>(&mut self, menu: &'m Menu<T>) -> io::Result<&'m T> {
        write!(self.out, "{}", menu.render())?;
        self.out.flush()?;
        loop {
            let key = self.keys.next_key()?;
            if let Some(value) = menu.find(key) {
                writeln!(self.out)?;
                return Ok(value);
            }
        }
    }

    /// Yes/no question.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let menu = Menu::new(prompt).option("[Y]es", true).option("[N]o", false);
        self.select(&menu).copied()
    }
}

impl<K: KeySource, W: Write> ActionSelector for ConsoleInput<K, W> {
    fn select_action(&mut self, view: &RoundView<'_>) -> FightAction {
        let status = format!(
            "Round {}: {} {}/{} hp | {} {}/{} hp",
            view.round,
            view.player.name(),
            view.player.health(),
            view.player.max_health(),
            view.opponent.name(),
            view.opponent.health(),
            view.opponent.max_health(),
        );
        let menu = FightAction::iter().fold(Menu::new(status), |menu, action| {
            menu.option(action.label(), action)
        });

        match self.select(&menu) {
            Ok(action) => *action,
            Err(error) => {
                warn!(%error, "input failed mid-fight, retreating");
                FightAction::Retreat
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fight_core::{Armor, Combatant, Weapon};

    use super::*;

    fn fighter(name: &str) -> Combatant {
        Combatant::new(name, 30, Weapon::new("Stick", 1), Arc::new(Armor::none()), 0).unwrap()
    }

    #[test]
    fn select_skips_unbound_keys() {
        let mut input = ConsoleInput::new(ScriptedKeys::new("xzn"), Vec::new());

        assert!(!input.confirm("Leave town?").unwrap());
        assert_eq!(input.keys().remaining(), 0);
        let shown = String::from_utf8(input.output().clone()).unwrap();
        assert!(shown.starts_with("Leave town?\n  [Y]es\n  [N]o\n"));
    }

    #[test]
    fn fight_menu_maps_hotkeys_to_actions() {
        let (player, opponent) = (fighter("Hero"), fighter("Rat"));
        let view = RoundView {
            round: 2,
            player: &player,
            opponent: &opponent,
        };
        let mut input = ConsoleInput::new(ScriptedKeys::new("ar"), Vec::new());

        assert_eq!(input.select_action(&view), FightAction::Attack);
        assert_eq!(input.select_action(&view), FightAction::Retreat);
        let shown = String::from_utf8(input.output().clone()).unwrap();
        assert!(shown.contains("Round 2: Hero 30/30 hp | Rat 30/30 hp"));
        assert!(shown.contains("[R]un away"));
    }

    #[test]
    fn exhausted_input_retreats() {
        let (player, opponent) = (fighter("Hero"), fighter("Rat"));
        let view = RoundView {
            round: 1,
            player: &player,
            opponent: &opponent,
        };
        let mut input = ConsoleInput::new(ScriptedKeys::default(), io::sink());

        assert_eq!(input.select_action(&view), FightAction::Retreat);
    }
}
