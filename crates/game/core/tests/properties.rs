//! Property-based tests for the combat rules.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Arc;

use proptest::prelude::*;

use fight_core::{
    AlwaysAttack, Armor, Combatant, DamagePayload, Env, Fight, FightState, PcgRandom, PoisonState,
    RandomSource, ScriptedRandom, SelfDamage, Side, Weapon, WeaponModifier, WeaponOracle,
};

fn combatant(health: u32, defense: u32, gold: u32, weapon: Weapon) -> Combatant {
    Combatant::new(
        "Prop",
        health,
        weapon,
        Arc::new(Armor::new("Plate", defense)),
        gold,
    )
    .unwrap()
}

fn poison() -> impl Strategy<Value = PoisonState> {
    (0u8..=100, 0u32..50, 0u32..10)
        .prop_map(|(chance, damage, turns)| PoisonState::new(chance, damage, turns).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Delivered damage is either the full hit or the mitigated hit, and health follows.
    #[test]
    fn prop_delivered_damage_is_full_or_mitigated(
        damage in 0u32..10_000,
        defense in 0u32..10_000,
        health in 1u32..10_000,
        seed in any::<u64>()
    ) {
        let mut target = combatant(health, defense, 0, Weapon::new("Stick", 1));
        let mut rng = PcgRandom::new(seed);
        let mut env = Env::new(&mut rng);

        let delivered = target.take_damage(&DamagePayload::new(damage, false), &mut env);

        prop_assert!(delivered == damage || delivered == damage.saturating_sub(defense));
        prop_assert_eq!(target.health(), health.saturating_sub(delivered));
    }

    /// Spending fails without mutation exactly when gold is short.
    #[test]
    fn prop_spend_gold(gold in any::<u32>(), amount in any::<u32>()) {
        let mut buyer = combatant(10, 0, gold, Weapon::new("Stick", 1));

        let spent = buyer.try_spend_gold(amount);

        prop_assert_eq!(spent, gold >= amount);
        if spent {
            prop_assert_eq!(buyer.gold(), gold - amount);
        } else {
            prop_assert_eq!(buyer.gold(), gold);
        }
    }

    /// Re-poisoning an active poison refreshes chance and duration but never lowers damage.
    #[test]
    fn prop_poison_merge(old in poison(), new in poison()) {
        prop_assume!(old.has_effect() && new.has_effect());
        let mut target = combatant(10, 0, 0, Weapon::new("Stick", 1));
        target.apply_poison(old);

        target.apply_poison(new);

        let merged = target.poison().copied().unwrap();
        prop_assert_eq!(merged.remaining_turns(), new.remaining_turns());
        prop_assert_eq!(merged.tick_chance_percent(), new.tick_chance_percent());
        prop_assert_eq!(
            merged.damage_per_turn(),
            old.damage_per_turn().max(new.damage_per_turn())
        );
    }

    /// Each tick consumes exactly one turn and the slot clears exactly at zero.
    #[test]
    fn prop_tick_counts_down(state in poison(), seed in any::<u64>()) {
        prop_assume!(state.has_effect());
        let mut target = combatant(10, 0, 0, Weapon::new("Stick", 1));
        target.apply_poison(state);
        let mut rng = PcgRandom::new(seed);

        for expected in (0..state.remaining_turns()).rev() {
            let tick = target.tick_poison(&mut rng);
            prop_assert!(tick.had_poison);
            prop_assert_eq!(tick.remaining_turns, expected);
            prop_assert_eq!(target.poison().is_none(), expected == 0);
            prop_assert!(tick.damage == 0 || tick.damage == state.damage_per_turn());
        }
        prop_assert!(!target.tick_poison(&mut rng).had_poison);
    }

    /// Capture then restore onto a fresh copy of the same template reproduces the weapon.
    #[test]
    fn prop_weapon_state_round_trip(
        damage in 0u32..1_000,
        recoil in 0u32..20,
        name in "[A-Z][a-z]{2,10}",
    ) {
        let template = Weapon::new("Hammer", 12)
            .with_modifier(WeaponModifier::SelfDamage(SelfDamage::new(recoil)));
        let mut templates = HashMap::new();
        templates.insert("Hammer".to_owned(), template);

        let mut worn = templates.weapon("Hammer").unwrap();
        worn.restore_state(
            &fight_core::WeaponState {
                template_name: "Hammer".into(),
                name: name.clone(),
                damage,
                modifier_states: vec![None],
            },
            None,
        ).unwrap();

        let mut fresh = templates.weapon("Hammer").unwrap();
        fresh.restore_state(&worn.capture_state(), Some(&templates)).unwrap();

        prop_assert_eq!(fresh.name(), worn.name());
        prop_assert_eq!(fresh.damage(), worn.damage());
        prop_assert_eq!(fresh.modifiers(), worn.modifiers());
    }

    /// Every fight played to the end has exactly one winner, who holds all the gold.
    #[test]
    fn prop_fight_conserves_gold(
        seed in any::<u64>(),
        gold_one in 0u32..1_000,
        gold_two in 0u32..1_000,
        double in any::<bool>(),
    ) {
        let mut weapon = Weapon::new("Blade", 7);
        if double {
            weapon = weapon.with_modifier(WeaponModifier::DoubleStrike);
        }
        let mut one = combatant(60, 2, gold_one, weapon);
        let mut two = combatant(60, 2, gold_two, Weapon::new("Club", 6));
        let mut rng = PcgRandom::new(seed);
        let mut env = Env::new(&mut rng);

        let outcome = Fight::new(&mut one, &mut two)
            .run(&mut env, &mut AlwaysAttack)
            .unwrap();

        let winner = outcome.winner().unwrap();
        let (won, lost) = match winner {
            Side::One => (&one, &two),
            Side::Two => (&two, &one),
        };
        prop_assert!(won.is_alive());
        prop_assert!(!lost.is_alive());
        prop_assert_eq!(lost.gold(), 0);
        prop_assert_eq!(won.gold(), gold_one + gold_two);
        prop_assert_ne!(outcome.state, FightState::InProgress);
    }

    /// A double-strike attacker lands two strikes per completed turn.
    #[test]
    fn prop_double_strike_counts(health in 200u32..400) {
        let twin = Weapon::new("Twin", 1).with_modifier(WeaponModifier::DoubleStrike);
        let mut one = combatant(health, 0, 0, twin);
        let mut two = combatant(health, 0, 0, Weapon::new("Stick", 1));
        let mut rng = ScriptedRandom::highest();
        let mut env = Env::new(&mut rng);
        let mut fight = Fight::new(&mut one, &mut two);

        for round in 1..=10u32 {
            fight.play_round(&mut env).unwrap();
            prop_assert_eq!(fight.outcome().strikes_by(Side::One), round * 2);
            prop_assert_eq!(fight.outcome().strikes_by(Side::Two), round);
        }
    }

    /// Draws always land inside the requested half-open range.
    #[test]
    fn prop_draw_range_bounds(seed in any::<u64>(), min in 0u32..1_000, span in 2u32..1_000) {
        let mut rng = PcgRandom::new(seed);
        let value = rng.draw_range(min, min + span);
        prop_assert!(value >= min && value < min + span);
    }
}
