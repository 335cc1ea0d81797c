//! The hub between fights.
//!
//! [`Town`] owns the player for the whole session together with the content
//! the session was started from. Shops are built once from the shop catalog;
//! encounters are fresh copies of the level roster so every fight starts from
//! the authored stats.

use std::sync::Arc;

use fight_content::{Catalog, GameContent, LevelContent};
use fight_core::{
    ActionSelector, Armor, CombatConfig, Combatant, Env, Fight, FightError, FightOutcome,
    NarrationSink, PoisonState, RandomSource, Weapon,
};
use tracing::{debug, info};

use crate::shops::{Armorer, Blacksmith, HealersHut, ShopError};

pub struct Town {
    player: Combatant,
    catalog: Catalog,
    levels: Vec<LevelContent>,
    config: CombatConfig,
    blacksmith: Blacksmith,
    armorer: Armorer,
    healers_hut: HealersHut,
}

impl Town {
    /// Settles `player` into a town stocked from `content`.
    pub fn new(player: Combatant, content: GameContent) -> Self {
        let GameContent {
            config,
            catalog,
            levels,
            shops,
            ..
        } = content;
        let prices = shops.prices;
        Self {
            player,
            catalog,
            levels,
            config,
            blacksmith: Blacksmith::new(shops.blacksmith, prices.repair_cost),
            armorer: Armorer::new(shops.armorer),
            healers_hut: HealersHut::new(prices.heal_cost, prices.cure_poison_cost),
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Combatant {
        &mut self.player
    }

    pub fn into_player(self) -> Combatant {
        self.player
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn blacksmith(&self) -> &Blacksmith {
        &self.blacksmith
    }

    pub fn armorer(&self) -> &Armorer {
        &self.armorer
    }

    pub fn healers_hut(&self) -> &HealersHut {
        &self.healers_hut
    }

    /// Content for the player's current level, if any was authored.
    pub fn current_level(&self) -> Option<&LevelContent> {
        let level = self.player.level().unwrap_or(1);
        self.levels.iter().find(|content| content.level == level)
    }

    /// A fresh copy of a uniformly chosen enemy from the current level.
    pub fn random_encounter(&self, rng: &mut dyn RandomSource) -> Option<Combatant> {
        let level = self.current_level()?;
        let count = u32::try_from(level.enemies.len()).ok()?;
        if count == 0 {
            return None;
        }
        let index = rng.draw(count) as usize;
        let enemy = level.spawn_enemy(index)?;
        debug!(level = level.level, enemy = %enemy.name(), "random encounter");
        Some(enemy)
    }

    /// A fresh copy of the current level's boss.
    pub fn boss_encounter(&self) -> Option<Combatant> {
        self.current_level().map(LevelContent::spawn_boss)
    }

    /// Runs a fight between the player and `enemy` with this town's rules.
    ///
    /// Broken weapons are resolved through the town's catalog.
    pub fn fight(
        &mut self,
        enemy: &mut Combatant,
        rng: &mut dyn RandomSource,
        narration: &mut dyn NarrationSink,
        selector: &mut dyn ActionSelector,
    ) -> Result<FightOutcome, FightError> {
        let mut env = Env::new(rng)
            .with_config(&self.config)
            .with_weapons(&self.catalog)
            .with_narration(narration);
        Fight::new(&mut self.player, enemy).run(&mut env, selector)
    }

    /// Levels the player up after a boss fight the player won.
    ///
    /// Returns the new level, or `None` when the boss survived.
    pub fn resolve_boss_fight(&mut self, outcome: &FightOutcome) -> Option<u32> {
        if !outcome.player_won() {
            return None;
        }
        let level = self.player.level_up();
        info!(player = %self.player.name(), level, "boss defeated");
        Some(level)
    }

    pub fn buy_weapon(&mut self, index: usize) -> Result<Weapon, ShopError> {
        self.blacksmith.purchase(&mut self.player, index)
    }

    pub fn buy_armor(&mut self, index: usize) -> Result<Arc<Armor>, ShopError> {
        self.armorer.purchase(&mut self.player, index)
    }

    pub fn repair_weapon(&mut self) -> Result<(), ShopError> {
        self.blacksmith.repair(&mut self.player, &self.catalog)
    }

    pub fn heal(&mut self) -> Result<(), ShopError> {
        self.healers_hut.heal(&mut self.player)
    }

    pub fn cure_poison(&mut self) -> Result<PoisonState, ShopError> {
        self.healers_hut.cure_poison(&mut self.player)
    }
}

#[cfg(test)]
mod tests {
    use fight_content::{Offer, PlayerTemplate, ShopCatalog, ShopPrices};
    use fight_core::{AlwaysAttack, FightEvent, FightState, ScriptedRandom};

    use super::*;

    fn enemy(name: &str, health: u32, gold: u32) -> Combatant {
        Combatant::new(
            name,
            health,
            Weapon::new("Club", 1),
            Arc::new(Armor::none()),
            gold,
        )
        .unwrap()
    }

    fn content() -> GameContent {
        let mut catalog = Catalog::new();
        catalog.register_weapon(Weapon::new("Sword", 10));
        catalog.register_weapon(Weapon::new("Club", 1));
        catalog.register_armor(Armor::new("Rags", 0));
        let levels = vec![
            LevelContent {
                level: 1,
                enemies: vec![enemy("Rat", 5, 2), enemy("Goblin", 20, 15)],
                boss: enemy("Goblin Chief", 30, 50).with_level(1).unwrap(),
            },
            LevelContent {
                level: 2,
                enemies: vec![enemy("Orc", 40, 30)],
                boss: enemy("Orc Warlord", 60, 100).with_level(2).unwrap(),
            },
        ];
        let shops = ShopCatalog {
            blacksmith: vec![Offer::new(Weapon::new("Sword", 10), 20)],
            armorer: vec![Offer::new(Arc::new(Armor::new("Rags", 0)), 5)],
            prices: ShopPrices::default(),
        };
        let new_game = PlayerTemplate {
            name: "Hero".into(),
            level: 1,
            health: 100,
            max_health: None,
            weapon: "Sword".into(),
            armor: "Rags".into(),
            gold: 30,
        };
        GameContent {
            config: CombatConfig::default(),
            catalog,
            levels,
            shops,
            new_game,
        }
    }

    fn town() -> Town {
        let content = content();
        let player = content
            .new_game
            .spawn(&content.catalog, &content.catalog)
            .unwrap();
        Town::new(player, content)
    }

    #[test]
    fn encounters_come_from_the_player_level() {
        let town = town();
        let mut rng = ScriptedRandom::new([1]);

        let enemy = town.random_encounter(&mut rng).unwrap();
        assert_eq!(enemy.name(), "Goblin");
        assert_eq!(town.boss_encounter().unwrap().name(), "Goblin Chief");
    }

    #[test]
    fn encounters_are_fresh_copies() {
        let mut town = town();
        let mut rng = ScriptedRandom::new([0]);
        let mut first = town.random_encounter(&mut rng).unwrap();
        first.take_self_damage(3);

        let second = town.random_encounter(&mut ScriptedRandom::new([0])).unwrap();
        assert_eq!(second.health(), 5);

        let mut events = Vec::new();
        let outcome = town
            .fight(
                &mut first,
                &mut ScriptedRandom::highest(),
                &mut events,
                &mut AlwaysAttack,
            )
            .unwrap();
        assert_eq!(outcome.state, FightState::FighterOneWins);
        assert_eq!(town.player().gold(), 32);
        assert_eq!(town.current_level().unwrap().enemies[0].gold(), 2);
        assert!(matches!(events.first(), Some(FightEvent::FightStarted { .. })));
    }

    #[test]
    fn boss_victory_levels_up_and_unlocks_next_roster() {
        let mut town = town();
        let mut boss = town.boss_encounter().unwrap();

        let outcome = town
            .fight(
                &mut boss,
                &mut ScriptedRandom::highest(),
                &mut Vec::<FightEvent>::new(),
                &mut AlwaysAttack,
            )
            .unwrap();

        assert_eq!(town.resolve_boss_fight(&outcome), Some(2));
        assert_eq!(town.player().level(), Some(2));
        assert_eq!(town.boss_encounter().unwrap().name(), "Orc Warlord");
    }

    #[test]
    fn fleeing_a_boss_does_not_level_up() {
        let mut town = town();
        let mut boss = town.boss_encounter().unwrap();
        let mut flee = |_: &fight_core::RoundView<'_>| fight_core::FightAction::Retreat;

        let outcome = town
            .fight(
                &mut boss,
                &mut ScriptedRandom::highest(),
                &mut Vec::<FightEvent>::new(),
                &mut flee,
            )
            .unwrap();

        assert_eq!(outcome.state, FightState::Fled);
        assert_eq!(town.resolve_boss_fight(&outcome), None);
        assert_eq!(town.player().level(), Some(1));
    }

    #[test]
    fn no_content_past_the_last_level() {
        let mut town = town();
        town.player_mut().level_up();
        town.player_mut().level_up();

        assert!(town.current_level().is_none());
        assert!(town.boss_encounter().is_none());
        assert!(town.random_encounter(&mut ScriptedRandom::lowest()).is_none());
    }

    #[test]
    fn shops_are_priced_from_content() {
        let mut town = town();

        town.buy_weapon(0).unwrap();
        assert_eq!(town.player().gold(), 10);
        assert_eq!(town.blacksmith().repair_cost(), 80);
        assert_eq!(town.healers_hut().heal_cost(), 100);
        assert_eq!(town.heal(), Err(ShopError::AlreadyFullHealth));
    }
}
