//! Narration events emitted while a fight resolves.
//!
//! The engine reports what happened, in order, through a [`NarrationSink`].
//! Rendering is left to the presentation layer; the `Display` impls below
//! give the canonical one-line wording.

use core::fmt;

use crate::state::PoisonState;

/// High-level occurrences produced by the strike pipeline and the fight loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FightEvent {
    /// A fight begins between two combatants.
    FightStarted { one: String, two: String },

    /// One strike landed (possibly for zero damage).
    Strike {
        attacker: String,
        defender: String,
        verb: StrikeVerb,
        weapon: String,
        dealt: u32,
        critical: bool,
        self_damage: u32,
        defender_health: u32,
    },

    /// A weapon broke before a strike. `replacement` is the new display name,
    /// or `None` when no replacement template could be resolved.
    WeaponShattered {
        weapon: String,
        replacement: Option<String>,
    },

    /// A strike left the defender poisoned.
    PoisonApplied { target: String, poison: PoisonState },

    /// Poison was evaluated at the start of a fighter's turn.
    PoisonTicked {
        target: String,
        triggered: bool,
        damage: u32,
        remaining_turns: u32,
        health: u32,
    },

    /// Poison ran its course.
    PoisonExpired { target: String },

    /// A combatant's health reached zero.
    Defeated { name: String, cause: DefeatCause },

    /// The winner took the loser's gold.
    GoldLooted { winner: String, amount: u32 },

    /// The fight ended with a winner.
    Victory { winner: String },

    /// The player-controlled side retreated.
    Fled { name: String },
}

/// How a strike is described, depending on which side swings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StrikeVerb {
    Attacks,
    Retaliates,
}

/// What brought a combatant's health to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DefeatCause {
    /// Struck down by the opponent.
    Struck,
    /// Killed by the self-damage of their own strike.
    Backfire,
    /// Killed by a poison tick.
    Poison,
}

impl fmt::Display for FightEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FightStarted { one, two } => {
                write!(f, "A fight begins between {one} and {two}!")
            }
            Self::Strike {
                attacker,
                defender,
                verb,
                weapon,
                dealt,
                critical,
                self_damage,
                defender_health,
            } => {
                write!(f, "{attacker} {verb} with {weapon} for {dealt} damage")?;
                if *critical {
                    f.write_str(" (critical strike!)")?;
                }
                if *self_damage > 0 {
                    write!(f, ", but takes {self_damage} self-damage")?;
                }
                write!(f, ". {defender} has {defender_health} health remaining.")
            }
            Self::WeaponShattered {
                weapon,
                replacement: Some(replacement),
            } => write!(f, "{weapon} shatters! It's now {replacement}."),
            Self::WeaponShattered {
                weapon,
                replacement: None,
            } => write!(f, "{weapon} shatters beyond repair."),
            Self::PoisonApplied { target, poison } => write!(
                f,
                "{target} is poisoned ({} dmg, {} turns, {}% chance)!",
                poison.damage_per_turn(),
                poison.remaining_turns(),
                poison.tick_chance_percent()
            ),
            Self::PoisonTicked {
                target,
                triggered: true,
                damage,
                remaining_turns,
                health,
            } => write!(
                f,
                "Poison burns {target} for {damage} damage. {target} has {health} health remaining ({remaining_turns} turns left)."
            ),
            Self::PoisonTicked {
                target,
                triggered: false,
                remaining_turns,
                ..
            } => write!(
                f,
                "{target} resists the poison this turn ({remaining_turns} turns left)."
            ),
            Self::PoisonExpired { target } => write!(f, "The poison affecting {target} wears off."),
            Self::Defeated {
                name,
                cause: DefeatCause::Struck,
            } => write!(f, "{name} has been defeated!"),
            Self::Defeated {
                name,
                cause: DefeatCause::Backfire,
            } => write!(f, "{name}'s reckless attack proves fatal!"),
            Self::Defeated {
                name,
                cause: DefeatCause::Poison,
            } => write!(f, "{name} succumbs to the poison!"),
            Self::GoldLooted { winner, amount } => write!(f, "{winner} loots {amount} gold."),
            Self::Victory { winner } => write!(f, "{winner} wins!"),
            Self::Fled { name } => write!(f, "{name} decides to live another day."),
        }
    }
}

/// Receives narration events in emission order.
pub trait NarrationSink {
    fn narrate(&mut self, event: FightEvent);
}

impl NarrationSink for Vec<FightEvent> {
    fn narrate(&mut self, event: FightEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strike_wording_includes_optional_suffixes() {
        let event = FightEvent::Strike {
            attacker: "Alice".into(),
            defender: "Goblin".into(),
            verb: StrikeVerb::Attacks,
            weapon: "Sword".into(),
            dealt: 20,
            critical: true,
            self_damage: 3,
            defender_health: 10,
        };

        assert_eq!(
            event.to_string(),
            "Alice attacks with Sword for 20 damage (critical strike!), but takes 3 self-damage. Goblin has 10 health remaining."
        );
    }

    #[test]
    fn plain_retaliation_has_no_suffix() {
        let event = FightEvent::Strike {
            attacker: "Goblin".into(),
            defender: "Alice".into(),
            verb: StrikeVerb::Retaliates,
            weapon: "Club".into(),
            dealt: 4,
            critical: false,
            self_damage: 0,
            defender_health: 96,
        };

        assert_eq!(
            event.to_string(),
            "Goblin retaliates with Club for 4 damage. Alice has 96 health remaining."
        );
    }

    #[test]
    fn shatter_wording_depends_on_replacement() {
        let replaced = FightEvent::WeaponShattered {
            weapon: "Glass Sword".into(),
            replacement: Some("Broken Sword".into()),
        };
        let lost = FightEvent::WeaponShattered {
            weapon: "Glass Sword".into(),
            replacement: None,
        };

        assert_eq!(replaced.to_string(), "Glass Sword shatters! It's now Broken Sword.");
        assert_eq!(lost.to_string(), "Glass Sword shatters beyond repair.");
    }

    #[test]
    fn poison_and_defeat_wording() {
        let poison = PoisonState::new(40, 3, 2).unwrap();

        assert_eq!(
            FightEvent::PoisonApplied {
                target: "Goblin".into(),
                poison,
            }
            .to_string(),
            "Goblin is poisoned (3 dmg, 2 turns, 40% chance)!"
        );
        assert_eq!(
            FightEvent::Defeated {
                name: "Alice".into(),
                cause: DefeatCause::Backfire,
            }
            .to_string(),
            "Alice's reckless attack proves fatal!"
        );
        assert_eq!(
            FightEvent::Fled {
                name: "Alice".into(),
            }
            .to_string(),
            "Alice decides to live another day."
        );
    }
}
