//! The interactive town loop.

use std::io::Write;

use anyhow::{Context, Result};
use fight_content::GameContent;
use fight_core::{Combatant, FightState, NarrationSink, PcgRandom};
use fight_runtime::{SaveGameRepository, ShopError, Town};
use tracing::{info, warn};

use crate::input::{ConsoleInput, KeySource};
use crate::menu::Menu;

/// How a session in town ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player chose to leave; progress should be saved.
    LeftTown,
    /// The player died in a fight.
    Defeated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TownChoice {
    Blacksmith,
    Armorer,
    Healer,
    Fight,
    Boss,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShopChoice {
    Buy(usize),
    Repair,
    Heal,
    CurePoison,
    Leave,
}

/// Picks the player for this session: the saved one or a fresh start.
///
/// A save that fails to load falls back to a new game.
pub fn initial_player<K: KeySource, W: Write>(
    input: &mut ConsoleInput<K, W>,
    saves: &dyn SaveGameRepository,
    content: &GameContent,
) -> Result<Combatant> {
    let catalog = &content.catalog;
    let new_player = |input: &mut ConsoleInput<K, W>| -> Result<Combatant> {
        input.say("Starting a new adventure.")?;
        content
            .new_game
            .spawn(catalog, catalog)
            .context("Failed to create the starting character")
    };

    if !saves.exists() {
        return new_player(input);
    }

    let menu = Menu::new("A previous adventure was found. Choose an option:")
        .option("[S]tart over", false)
        .option("[L]oad previous adventure", true);
    if !*input.select(&menu)? {
        return new_player(input);
    }

    match saves.load_player(catalog, catalog) {
        Ok(Some(player)) => {
            input.say("Previous adventure loaded.")?;
            Ok(player)
        }
        Ok(None) => new_player(input),
        Err(error) => {
            warn!(%error, "failed to load save");
            input.say("Failed to load the previous adventure. Starting fresh.")?;
            new_player(input)
        }
    }
}

/// Drives one session: menus in, narration out.
pub struct App<K, W, N> {
    town: Town,
    input: ConsoleInput<K, W>,
    narrator: N,
    rng: PcgRandom,
}

impl<K, W, N> App<K, W, N>
where
    K: KeySource,
    W: Write,
    N: NarrationSink,
{
    pub fn new(town: Town, input: ConsoleInput<K, W>, narrator: N, rng: PcgRandom) -> Self {
        Self {
            town,
            input,
            narrator,
            rng,
        }
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn input(&self) -> &ConsoleInput<K, W> {
        &self.input
    }

    /// Runs the town loop until the player leaves or dies.
    pub fn run(&mut self) -> Result<SessionEnd> {
        self.input
            .say("You arrive at the town square. Where will you go?")?;

        loop {
            let status = self.status_line();
            self.input.say("")?;
            self.input.say(status)?;

            let boss = match self.town.boss_encounter() {
                Some(boss) => format!(
                    "[C]hallenge the boss: {} (Level {})",
                    boss.name(),
                    boss.level().unwrap_or(1)
                ),
                None => "[C]hallenge the boss (none available for your level)".to_owned(),
            };
            let menu = Menu::new("Where will you go?")
                .option("Visit the [B]lacksmith", TownChoice::Blacksmith)
                .option("Visit the [A]rmorer", TownChoice::Armorer)
                .option("Visit the [H]ealer's hut", TownChoice::Healer)
                .option("Venture out and [F]ight", TownChoice::Fight)
                .option(boss, TownChoice::Boss)
                .option("[Q]uit to fields", TownChoice::Quit);

            let survived = match *self.input.select(&menu)? {
                TownChoice::Blacksmith => self.visit_blacksmith().map(|()| true)?,
                TownChoice::Armorer => self.visit_armorer().map(|()| true)?,
                TownChoice::Healer => self.visit_healer().map(|()| true)?,
                TownChoice::Fight => self.fight()?,
                TownChoice::Boss => self.fight_boss()?,
                TownChoice::Quit => {
                    if self.input.confirm("Are you sure you want to leave town?")? {
                        self.input
                            .say("You decide to rest and leave the adventure for another day.")?;
                        return Ok(SessionEnd::LeftTown);
                    }
                    self.input
                        .say("You stay in town, determined to continue the adventure.")?;
                    true
                }
            };

            if !survived {
                self.input.say("Your adventure ends here.")?;
                return Ok(SessionEnd::Defeated);
            }
        }
    }

    pub fn into_town(self) -> Town {
        self.town
    }

    fn status_line(&self) -> String {
        let player = self.town.player();
        let mut line = format!(
            "Status: Level={} | Weapon={} | Armor={} | Gold={}g | Health={}/{}",
            player.level().unwrap_or(1),
            player.weapon().name(),
            player.armor().name,
            player.gold(),
            player.health(),
            player.max_health(),
        );
        if let Some(poison) = player.poison().filter(|poison| poison.has_effect()) {
            line.push_str(&format!(
                " | Poisoned ({} dmg, {} turns)",
                poison.damage_per_turn(),
                poison.remaining_turns()
            ));
        }
        line
    }

    /// Tells the player why a shop turned them down.
    fn shop_refused(&mut self, error: ShopError) -> Result<()> {
        let message = match &error {
            ShopError::NotEnoughGold { .. } => "Not enough gold. Pick something cheaper.",
            ShopError::AlreadyFullHealth => {
                "You're already at full strength. No healing needed today."
            }
            ShopError::NotPoisoned => "No toxins to purge. You're clean.",
            ShopError::NothingToRepair(_) => "Your weapon is already in perfect condition.",
            ShopError::NoSuchOffer { .. } => "That isn't for sale.",
            ShopError::Repair(_) => {
                warn!(%error, "repair failed");
                "The blacksmith couldn't repair your weapon."
            }
        };
        self.input.say(message)?;
        Ok(())
    }

    fn visit_blacksmith(&mut self) -> Result<()> {
        self.input.say("Welcome to the blacksmith's forge!")?;
        loop {
            self.input.say(format!(
                "You've got {}g to spend.",
                self.town.player().gold()
            ))?;
            let blacksmith = self.town.blacksmith();
            let mut menu = blacksmith.offers().iter().enumerate().fold(
                Menu::new("Select a weapon to purchase:"),
                |menu, (index, offer)| {
                    menu.numbered(
                        format!(
                            "{} (Damage: {}) - {}g",
                            offer.item.name(),
                            offer.item.damage(),
                            offer.cost
                        ),
                        ShopChoice::Buy(index),
                    )
                },
            );
            if self.town.player().weapon().can_repair() {
                menu = menu.option(
                    format!(
                        "[R]epair your {} ({}g)",
                        self.town.player().weapon().name(),
                        blacksmith.repair_cost()
                    ),
                    ShopChoice::Repair,
                );
            }
            let menu = menu.option("[L]eave without buying anything", ShopChoice::Leave);

            match *self.input.select(&menu)? {
                ShopChoice::Buy(index) => match self.town.buy_weapon(index) {
                    Ok(_) => {
                        let player = self.town.player();
                        let message = format!(
                            "You purchased the {}! Remaining gold: {}g.",
                            player.weapon().name(),
                            player.gold()
                        );
                        self.input.say(message)?;
                        return Ok(());
                    }
                    Err(error) => self.shop_refused(error)?,
                },
                ShopChoice::Repair => match self.town.repair_weapon() {
                    Ok(()) => {
                        let player = self.town.player();
                        let message = format!(
                            "The blacksmith restores your {}! Remaining gold: {}g.",
                            player.weapon().name(),
                            player.gold()
                        );
                        self.input.say(message)?;
                    }
                    Err(error) => self.shop_refused(error)?,
                },
                _ => {
                    self.input
                        .say("You leave the blacksmith without buying anything.")?;
                    return Ok(());
                }
            }
        }
    }

    fn visit_armorer(&mut self) -> Result<()> {
        self.input.say("Welcome to the armorer's shop!")?;
        loop {
            self.input.say(format!(
                "You've got {}g to spend.",
                self.town.player().gold()
            ))?;
            let menu = self
                .town
                .armorer()
                .offers()
                .iter()
                .enumerate()
                .fold(
                    Menu::new("Choose armor to wear into the fight:"),
                    |menu, (index, offer)| {
                        menu.numbered(
                            format!(
                                "{} (Defense: {}) - {}g",
                                offer.item.name, offer.item.defense, offer.cost
                            ),
                            ShopChoice::Buy(index),
                        )
                    },
                )
                .option("[K]eep your current armor", ShopChoice::Leave);

            match *self.input.select(&menu)? {
                ShopChoice::Buy(index) => match self.town.buy_armor(index) {
                    Ok(_) => {
                        let player = self.town.player();
                        let message = format!(
                            "You purchased the {}! Remaining gold: {}g.",
                            player.armor().name,
                            player.gold()
                        );
                        self.input.say(message)?;
                        return Ok(());
                    }
                    Err(error) => self.shop_refused(error)?,
                },
                _ => {
                    let player = self.town.player();
                    let message = format!(
                        "You keep your {} and {}g.",
                        player.armor().name,
                        player.gold()
                    );
                    self.input.say(message)?;
                    return Ok(());
                }
            }
        }
    }

    fn visit_healer(&mut self) -> Result<()> {
        let hut = *self.town.healers_hut();
        self.input.say(
            "You step into the healer's hut. The air smells of herbs and incense.",
        )?;
        self.input.say(format!(
            "\"For {}g I can mend your wounds. For {}g I'll purge any toxins,\" the healer offers.",
            hut.heal_cost(),
            hut.cure_poison_cost()
        ))?;
        loop {
            let status = self.status_line();
            self.input.say(status)?;
            let menu = Menu::new("What do you need?")
                .option(
                    format!("[H]eal to full ({}g)", hut.heal_cost()),
                    ShopChoice::Heal,
                )
                .option(
                    format!("[C]ure poison ({}g)", hut.cure_poison_cost()),
                    ShopChoice::CurePoison,
                )
                .option("[L]eave", ShopChoice::Leave);

            match *self.input.select(&menu)? {
                ShopChoice::Heal => match self.town.heal() {
                    Ok(()) => self.input.say(
                        "Warm light surrounds you as your wounds knit together. You're fully healed!",
                    )?,
                    Err(error) => self.shop_refused(error)?,
                },
                ShopChoice::CurePoison => match self.town.cure_poison() {
                    Ok(_) => self
                        .input
                        .say("The healer's tonic burns away the poison.")?,
                    Err(error) => self.shop_refused(error)?,
                },
                _ => {
                    self.input.say("You leave the healer's hut.")?;
                    return Ok(());
                }
            }
        }
    }

    /// Returns whether the player is still alive.
    fn fight(&mut self) -> Result<bool> {
        let Some(mut enemy) = self.town.random_encounter(&mut self.rng) else {
            self.input.say(
                "No enemies are available for your current level. Try a different challenge.",
            )?;
            return Ok(true);
        };
        self.input
            .say(format!("A wild {} appears! Prepare for battle.", enemy.name()))?;

        let outcome = self.town.fight(
            &mut enemy,
            &mut self.rng,
            &mut self.narrator,
            &mut self.input,
        )?;
        info!(enemy = %enemy.name(), state = %outcome.state, rounds = outcome.rounds, "encounter over");
        Ok(outcome.state != FightState::FighterTwoWins)
    }

    fn fight_boss(&mut self) -> Result<bool> {
        let Some(mut boss) = self.town.boss_encounter() else {
            self.input
                .say("No boss is available for your current level.")?;
            return Ok(true);
        };
        self.input.say(format!(
            "You challenge the boss of level {}: {}!",
            self.town.player().level().unwrap_or(1),
            boss.name()
        ))?;

        let outcome = self.town.fight(
            &mut boss,
            &mut self.rng,
            &mut self.narrator,
            &mut self.input,
        )?;
        if let Some(level) = self.town.resolve_boss_fight(&outcome) {
            self.input
                .say(format!("You feel stronger! You are now level {level}."))?;
        }
        Ok(outcome.state != FightState::FighterTwoWins)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use fight_content::ContentFactory;
    use fight_core::{FightEvent, ModifierKind, WeaponOracle};
    use fight_runtime::InMemorySaveRepository;

    use super::*;
    use crate::input::ScriptedKeys;

    fn content() -> GameContent {
        let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data");
        ContentFactory::new(data).load_all().unwrap()
    }

    fn app(keys: &str) -> App<ScriptedKeys, Vec<u8>, Vec<FightEvent>> {
        let content = content();
        let player = content
            .new_game
            .spawn(&content.catalog, &content.catalog)
            .unwrap();
        App::new(
            Town::new(player, content),
            ConsoleInput::new(ScriptedKeys::new(keys), Vec::new()),
            Vec::new(),
            PcgRandom::new(1),
        )
    }

    fn shown<K: KeySource, N>(app: &App<K, Vec<u8>, N>) -> String {
        String::from_utf8(app.input.output().clone()).unwrap()
    }

    #[test]
    fn quitting_needs_confirmation() {
        let mut app = app("qnqy");

        assert_eq!(app.run().unwrap(), SessionEnd::LeftTown);
        let text = shown(&app);
        assert!(text.contains("You stay in town"));
        assert!(text.contains("leave the adventure for another day"));
    }

    #[test]
    fn buying_a_weapon_equips_it() {
        let mut app = app("b1qy");

        app.run().unwrap();

        let player = app.town().player();
        assert_eq!(player.weapon().name(), "Short Sword");
        assert_eq!(player.gold(), 10);
    }

    #[test]
    fn refused_purchase_stays_in_shop() {
        // Glass Sword (4) costs more than the starting purse
        let mut app = app("b4lqy");

        app.run().unwrap();

        assert!(shown(&app).contains("Not enough gold"));
        assert_eq!(app.town().player().weapon().name(), "Rusty Sword");
        assert_eq!(app.town().player().gold(), 50);
    }

    #[test]
    fn fleeing_a_fight_returns_to_town() {
        let mut app = app("frqy");

        assert_eq!(app.run().unwrap(), SessionEnd::LeftTown);
        assert!(matches!(
            app.narrator.last(),
            Some(FightEvent::Fled { .. })
        ));
    }

    #[test]
    fn repair_is_only_offered_for_broken_weapons() {
        let mut app = app("bl");
        let broken = app.town.catalog().weapon("Broken Glass Sword").unwrap();
        app.town.player_mut().equip_weapon(broken);

        // Out of keys after leaving the shop
        assert!(app.run().is_err());
        assert!(shown(&app).contains("[R]epair your Broken Glass Sword (80g)"));
        assert!(app.town().player().weapon().has_modifier(ModifierKind::Repairable));
    }

    #[test]
    fn save_is_offered_when_present() {
        let content = content();
        let saves = InMemorySaveRepository::new();
        let mut input = ConsoleInput::new(ScriptedKeys::new("l"), Vec::new());
        let mut hero = content
            .new_game
            .spawn(&content.catalog, &content.catalog)
            .unwrap();
        hero.gain_gold(500).unwrap();
        saves.save_player(&hero).unwrap();

        let player = initial_player(&mut input, &saves, &content).unwrap();
        assert_eq!(player.gold(), 550);

        let mut input = ConsoleInput::new(ScriptedKeys::new("s"), Vec::new());
        let fresh = initial_player(&mut input, &saves, &content).unwrap();
        assert_eq!(fresh.gold(), 50);
    }
}
