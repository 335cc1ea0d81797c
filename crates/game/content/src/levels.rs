use fight_core::Combatant;

/// The roster for one dungeon level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelContent {
    pub level: u32,
    /// Regular enemies; encounters fight a fresh copy.
    pub enemies: Vec<Combatant>,
    pub boss: Combatant,
}

impl LevelContent {
    /// Fresh copy of the enemy at `index`.
    pub fn spawn_enemy(&self, index: usize) -> Option<Combatant> {
        self.enemies.get(index).cloned()
    }

    /// Fresh copy of the boss.
    pub fn spawn_boss(&self) -> Combatant {
        self.boss.clone()
    }
}
