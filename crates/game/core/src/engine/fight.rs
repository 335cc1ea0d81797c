use tracing::{debug, info};

use crate::engine::{
    ActionSelector, FightAction, FightError, FightOutcome, FightState, Loot, RoundView, Side,
};
use crate::env::Env;
use crate::event::{DefeatCause, FightEvent};
use crate::state::Combatant;

/// One encounter between two combatants.
///
/// Fighter one is the player-controlled side: it acts first each round and is
/// the only side that may retreat. Both combatants are borrowed exclusively
/// for the fight's lifetime and mutated in place.
#[derive(Debug)]
pub struct Fight<'f> {
    combatants: [&'f mut Combatant; 2],
    state: FightState,
    rounds: u32,
    strikes: [u32; 2],
    loot: Option<Loot>,
}

/// Splits the pair into `(acting, other)` for `side`.
fn pair<'p>(
    combatants: &'p mut [&mut Combatant; 2],
    side: Side,
) -> (&'p mut Combatant, &'p mut Combatant) {
    let [one, two] = combatants;
    match side {
        Side::One => (&mut **one, &mut **two),
        Side::Two => (&mut **two, &mut **one),
    }
}

impl<'f> Fight<'f> {
    pub fn new(one: &'f mut Combatant, two: &'f mut Combatant) -> Self {
        Self {
            combatants: [one, two],
            state: FightState::InProgress,
            rounds: 0,
            strikes: [0; 2],
            loot: None,
        }
    }

    pub fn state(&self) -> FightState {
        self.state
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &*self.combatants[side.index()]
    }

    pub fn outcome(&self) -> FightOutcome {
        FightOutcome {
            state: self.state,
            rounds: self.rounds,
            strikes: self.strikes,
            loot: self.loot,
        }
    }

    /// Runs the fight to a terminal state, asking `selector` before every round.
    pub fn run(
        &mut self,
        env: &mut Env<'_>,
        selector: &mut dyn ActionSelector,
    ) -> Result<FightOutcome, FightError> {
        env.narrate(FightEvent::FightStarted {
            one: self.combatant(Side::One).name().to_owned(),
            two: self.combatant(Side::Two).name().to_owned(),
        });

        while !self.state.is_over() {
            let view = RoundView {
                round: self.rounds + 1,
                player: self.combatant(Side::One),
                opponent: self.combatant(Side::Two),
            };
            match selector.select_action(&view) {
                FightAction::Attack => {
                    self.play_round(env)?;
                }
                FightAction::Retreat => self.retreat(env)?,
            }
        }
        Ok(self.outcome())
    }

    /// Plays one full round: fighter one's turn, then fighter two's.
    ///
    /// # Errors
    ///
    /// `AlreadyOver` when called on a finished fight; `Loot` when the
    /// winner cannot hold the loser's gold.
    pub fn play_round(&mut self, env: &mut Env<'_>) -> Result<FightState, FightError> {
        self.ensure_in_progress()?;
        self.rounds += 1;

        for side in [Side::One, Side::Two] {
            self.take_turn(side, env)?;
            if self.state.is_over() {
                break;
            }
        }
        debug!(round = self.rounds, state = %self.state, "round complete");
        Ok(self.state)
    }

    /// Ends the fight with fighter one fleeing. No gold changes hands.
    pub fn retreat(&mut self, env: &mut Env<'_>) -> Result<(), FightError> {
        self.ensure_in_progress()?;
        self.state = FightState::Fled;
        let name = self.combatant(Side::One).name().to_owned();
        info!(fighter = %name, rounds = self.rounds, "fighter retreated");
        env.narrate(FightEvent::Fled { name });
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), FightError> {
        if self.state.is_over() {
            return Err(FightError::AlreadyOver { state: self.state });
        }
        Ok(())
    }

    /// Poison phase, then the strike phase, for the acting side.
    fn take_turn(&mut self, side: Side, env: &mut Env<'_>) -> Result<(), FightError> {
        let (actor, _) = pair(&mut self.combatants, side);
        let tick = actor.tick_poison(env.rng());
        if tick.had_poison {
            actor.take_self_damage(tick.damage);
            env.narrate(FightEvent::PoisonTicked {
                target: actor.name().to_owned(),
                triggered: tick.triggered,
                damage: tick.damage,
                remaining_turns: tick.remaining_turns,
                health: actor.health(),
            });
            if tick.expired() {
                env.narrate(FightEvent::PoisonExpired {
                    target: actor.name().to_owned(),
                });
            }
            if !actor.is_alive() {
                env.narrate(FightEvent::Defeated {
                    name: actor.name().to_owned(),
                    cause: DefeatCause::Poison,
                });
                return self.finish(side.opponent(), env);
            }
        }

        let strikes = actor.weapon().strikes_per_turn();
        for _ in 0..strikes {
            self.strike(side, env)?;
            if self.state.is_over() {
                break;
            }
        }
        Ok(())
    }

    fn strike(&mut self, side: Side, env: &mut Env<'_>) -> Result<(), FightError> {
        let (attacker, defender) = pair(&mut self.combatants, side);

        let payload = attacker.weapon_mut().create_damage_payload(env);
        let dealt = defender.take_damage(&payload, env);
        attacker.take_self_damage(payload.self_damage());
        env.narrate(FightEvent::Strike {
            attacker: attacker.name().to_owned(),
            defender: defender.name().to_owned(),
            verb: side.verb(),
            weapon: attacker.weapon().name().to_owned(),
            dealt,
            critical: payload.is_critical(),
            self_damage: payload.self_damage(),
            defender_health: defender.health(),
        });
        self.strikes[side.index()] += 1;

        if !defender.is_alive() {
            env.narrate(FightEvent::Defeated {
                name: defender.name().to_owned(),
                cause: DefeatCause::Struck,
            });
            return self.finish(side, env);
        }
        if !attacker.is_alive() {
            env.narrate(FightEvent::Defeated {
                name: attacker.name().to_owned(),
                cause: DefeatCause::Backfire,
            });
            return self.finish(side.opponent(), env);
        }

        if let Some(poison) = payload.poison() {
            defender.apply_poison(poison);
            env.narrate(FightEvent::PoisonApplied {
                target: defender.name().to_owned(),
                poison: defender.poison().copied().unwrap_or(poison),
            });
        }
        Ok(())
    }

    /// Marks `winner` victorious and moves the loser's gold.
    fn finish(&mut self, winner: Side, env: &mut Env<'_>) -> Result<(), FightError> {
        self.state = FightState::won_by(winner);
        let (victor, loser) = pair(&mut self.combatants, winner);

        let amount = loser.transfer_gold_to(victor)?;
        if amount > 0 {
            self.loot = Some(Loot { winner, amount });
            env.narrate(FightEvent::GoldLooted {
                winner: victor.name().to_owned(),
                amount,
            });
        }
        info!(
            winner = %victor.name(),
            loser = %loser.name(),
            rounds = self.rounds,
            loot = amount,
            "fight finished"
        );
        env.narrate(FightEvent::Victory {
            winner: victor.name().to_owned(),
        });
        Ok(())
    }
}
