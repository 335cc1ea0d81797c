use crate::engine::Side;
use crate::event::StrikeVerb;
use crate::state::Combatant;

/// Choices offered to the player-controlled side between rounds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum FightAction {
    Attack,
    Retreat,
}

impl FightAction {
    /// Menu label with the hotkey highlighted.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attack => "[A]ttack",
            Self::Retreat => "[R]un away",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Self::Attack => 'a',
            Self::Retreat => 'r',
        }
    }
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// Fighter one attacks, fighter two retaliates.
    pub fn verb(self) -> StrikeVerb {
        match self {
            Side::One => StrikeVerb::Attacks,
            Side::Two => StrikeVerb::Retaliates,
        }
    }
}

/// Read-only view handed to the action selector before each round.
#[derive(Clone, Copy, Debug)]
pub struct RoundView<'v> {
    /// Round about to be played (1-based).
    pub round: u32,
    pub player: &'v Combatant,
    pub opponent: &'v Combatant,
}

/// Chooses fighter one's action before each round.
pub trait ActionSelector {
    fn select_action(&mut self, view: &RoundView<'_>) -> FightAction;
}

impl<F> ActionSelector for F
where
    F: FnMut(&RoundView<'_>) -> FightAction,
{
    fn select_action(&mut self, view: &RoundView<'_>) -> FightAction {
        self(view)
    }
}

/// Selector that never retreats; used for automated fights.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAttack;

impl ActionSelector for AlwaysAttack {
    fn select_action(&mut self, _view: &RoundView<'_>) -> FightAction {
        FightAction::Attack
    }
}
