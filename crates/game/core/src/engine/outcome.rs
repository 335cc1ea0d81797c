use crate::engine::Side;

/// Fight state machine: `InProgress` until one of the terminal states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FightState {
    #[default]
    InProgress,
    FighterOneWins,
    FighterTwoWins,
    Fled,
}

impl FightState {
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::One => Self::FighterOneWins,
            Side::Two => Self::FighterTwoWins,
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::FighterOneWins => Some(Side::One),
            Self::FighterTwoWins => Some(Side::Two),
            Self::InProgress | Self::Fled => None,
        }
    }
}

/// Gold moved from the loser to the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loot {
    pub winner: Side,
    pub amount: u32,
}

/// Summary of a finished (or abandoned) fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightOutcome {
    pub state: FightState,
    /// Rounds started, including the one that ended the fight.
    pub rounds: u32,
    /// Strikes landed, indexed by [`Side::index`].
    pub strikes: [u32; 2],
    pub loot: Option<Loot>,
}

impl FightOutcome {
    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    pub fn strikes_by(&self, side: Side) -> u32 {
        self.strikes[side.index()]
    }

    /// True when fighter one (the player-controlled side) won.
    pub fn player_won(&self) -> bool {
        self.state == FightState::FighterOneWins
    }
}
