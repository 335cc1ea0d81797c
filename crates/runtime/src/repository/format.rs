//! Flat `Key=Value` save format.
//!
//! One entry per line, split at the first `=`:
//!
//! ```text
//! Name=Hero
//! Level=2
//! Health=64
//! MaxHealth=100
//! WeaponName=Broken Glass Sword
//! WeaponTemplate=Glass Sword
//! WeaponState={"TemplateName":"Glass Sword","Name":"Broken Glass Sword","Damage":2,"ModifierStates":[null]}
//! ArmorName=Leather
//! Gold=120
//! PoisonTickChance=0
//! PoisonDamage=0
//! PoisonTurns=0
//! ```
//!
//! `WeaponTemplate` and `WeaponState` may be absent; the weapon is then
//! rebuilt from its template under the saved display name. Poison values that
//! do not form a valid poison are dropped.

use std::collections::HashMap;
use std::fmt::Write as _;

use fight_core::{CombatantRecord, PoisonState, RecordError, WeaponOracle, WeaponState};
use tracing::warn;

use crate::repository::{RepositoryError, Result};

const NAME: &str = "Name";
const LEVEL: &str = "Level";
const HEALTH: &str = "Health";
const MAX_HEALTH: &str = "MaxHealth";
const WEAPON_NAME: &str = "WeaponName";
const WEAPON_TEMPLATE: &str = "WeaponTemplate";
const WEAPON_STATE: &str = "WeaponState";
const ARMOR_NAME: &str = "ArmorName";
const GOLD: &str = "Gold";
const POISON_TICK_CHANCE: &str = "PoisonTickChance";
const POISON_DAMAGE: &str = "PoisonDamage";
const POISON_TURNS: &str = "PoisonTurns";

/// Renders a record in the flat save format.
pub fn encode_record(record: &CombatantRecord) -> Result<String> {
    let weapon_state = serde_json::to_string(&record.weapon)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let entries = [
        (NAME, record.name.clone()),
        (LEVEL, record.level.to_string()),
        (HEALTH, record.health.to_string()),
        (MAX_HEALTH, record.max_health.to_string()),
        (WEAPON_NAME, record.weapon.name.clone()),
        (WEAPON_TEMPLATE, record.weapon.template_name.clone()),
        (WEAPON_STATE, weapon_state),
        (ARMOR_NAME, record.armor_name.clone()),
        (GOLD, record.gold.to_string()),
        (POISON_TICK_CHANCE, record.poison_tick_chance.to_string()),
        (POISON_DAMAGE, record.poison_damage.to_string()),
        (POISON_TURNS, record.poison_turns.to_string()),
    ];

    let mut out = String::new();
    for (key, value) in entries {
        if value.contains(['\n', '\r']) {
            return Err(RepositoryError::Serialization(format!(
                "value for '{key}' spans multiple lines"
            )));
        }
        // Writing into a String cannot fail
        let _ = writeln!(out, "{key}={value}");
    }
    Ok(out)
}

/// Parses the flat save format back into a record.
///
/// `weapons` is only consulted when the save carries no usable weapon state.
pub fn decode_record(text: &str, weapons: &dyn WeaponOracle) -> Result<CombatantRecord> {
    let entries = parse_entries(text);

    let weapon_name = required(&entries, WEAPON_NAME)?;
    let weapon_template = optional(&entries, WEAPON_TEMPLATE).unwrap_or(weapon_name);
    let weapon = match optional(&entries, WEAPON_STATE).and_then(parse_weapon_state) {
        Some(state) if state.template_name != weapon_template => {
            return Err(RepositoryError::CorruptedData(format!(
                "weapon state belongs to '{}', save names '{weapon_template}'",
                state.template_name
            )));
        }
        Some(state) => state,
        None => {
            let template = weapons
                .weapon(weapon_template)
                .map_err(RecordError::from)?;
            WeaponState {
                name: weapon_name.to_owned(),
                modifier_states: Vec::new(),
                ..template.capture_state()
            }
        }
    };

    let (poison_tick_chance, poison_damage, poison_turns) = parse_poison(&entries);

    Ok(CombatantRecord {
        name: required(&entries, NAME)?.to_owned(),
        level: required_u32(&entries, LEVEL)?,
        health: required_u32(&entries, HEALTH)?,
        max_health: required_u32(&entries, MAX_HEALTH)?,
        weapon,
        armor_name: required(&entries, ARMOR_NAME)?.to_owned(),
        gold: required_u32(&entries, GOLD)?,
        poison_tick_chance,
        poison_damage,
        poison_turns,
    })
}

fn parse_entries(text: &str) -> HashMap<&str, &str> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match line.split_once('=') {
            Some((key, value)) => Some((key.trim(), value.trim())),
            None => {
                warn!(line, "ignoring save line without '='");
                None
            }
        })
        .collect()
}

fn optional<'t>(entries: &HashMap<&str, &'t str>, key: &str) -> Option<&'t str> {
    entries.get(key).copied().filter(|value| !value.is_empty())
}

fn required<'t>(entries: &HashMap<&str, &'t str>, key: &str) -> Result<&'t str> {
    optional(entries, key)
        .ok_or_else(|| RepositoryError::CorruptedData(format!("missing value for '{key}'")))
}

fn required_u32(entries: &HashMap<&str, &str>, key: &str) -> Result<u32> {
    required(entries, key)?
        .parse()
        .map_err(|_| RepositoryError::CorruptedData(format!("invalid number for '{key}'")))
}

fn optional_u32(entries: &HashMap<&str, &str>, key: &str) -> u32 {
    optional(entries, key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

fn parse_weapon_state(json: &str) -> Option<WeaponState> {
    match serde_json::from_str(json) {
        Ok(state) => Some(state),
        Err(error) => {
            warn!(%error, "ignoring unreadable weapon state");
            None
        }
    }
}

/// Reads the poison fields, zeroing them unless they form a live poison that
/// can still deal damage.
fn parse_poison(entries: &HashMap<&str, &str>) -> (u8, u32, u32) {
    let turns = optional_u32(entries, POISON_TURNS);
    if turns == 0 {
        return (0, 0, 0);
    }
    let chance = optional_u32(entries, POISON_TICK_CHANCE);
    let damage = optional_u32(entries, POISON_DAMAGE);

    let poison = u8::try_from(chance)
        .ok()
        .and_then(|chance| PoisonState::new(chance, damage, turns).ok())
        .filter(PoisonState::has_effect);
    match poison {
        Some(poison) => (
            poison.tick_chance_percent(),
            poison.damage_per_turn(),
            poison.remaining_turns(),
        ),
        None => {
            warn!(chance, damage, turns, "dropping invalid saved poison");
            (0, 0, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fight_core::{Repairable, Weapon, WeaponModifier};

    use super::*;

    fn weapons() -> HashMap<String, Weapon> {
        [
            Weapon::new("Glass Sword", 16),
            Weapon::new("Broken Glass Sword", 2).with_modifier(WeaponModifier::Repairable(
                Repairable::new("Glass Sword").unwrap(),
            )),
        ]
        .into_iter()
        .map(|weapon| (weapon.name().to_owned(), weapon))
        .collect()
    }

    fn record() -> CombatantRecord {
        CombatantRecord {
            name: "Hero".into(),
            level: 2,
            health: 64,
            max_health: 100,
            weapon: WeaponState {
                template_name: "Glass Sword".into(),
                name: "Broken Glass Sword".into(),
                damage: 2,
                modifier_states: vec![None],
            },
            armor_name: "Leather".into(),
            gold: 120,
            poison_tick_chance: 40,
            poison_damage: 3,
            poison_turns: 2,
        }
    }

    #[test]
    fn encoded_save_uses_flat_keys() {
        let text = encode_record(&record()).unwrap();

        let keys: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_once('=').map(|(key, _)| key))
            .collect();
        assert_eq!(
            keys,
            vec![
                "Name",
                "Level",
                "Health",
                "MaxHealth",
                "WeaponName",
                "WeaponTemplate",
                "WeaponState",
                "ArmorName",
                "Gold",
                "PoisonTickChance",
                "PoisonDamage",
                "PoisonTurns",
            ]
        );
        assert!(text.contains("WeaponState={\"TemplateName\":\"Glass Sword\""));
        assert_eq!(decode_record(&text, &weapons()).unwrap(), record());
    }

    #[test]
    fn missing_weapon_state_rebuilds_from_template() {
        let text = "Name=Hero\nLevel=1\nHealth=50\nMaxHealth=100\n\
                    WeaponName=Broken Glass Sword\nWeaponTemplate=Glass Sword\n\
                    ArmorName=Rags\nGold=5\n";

        let record = decode_record(text, &weapons()).unwrap();

        assert_eq!(record.weapon.template_name, "Glass Sword");
        assert_eq!(record.weapon.name, "Broken Glass Sword");
        assert_eq!(record.weapon.damage, 16);
        assert_eq!(record.poison_turns, 0);
    }

    #[test]
    fn unreadable_weapon_state_falls_back_to_template() {
        let text = "Name=Hero\nLevel=1\nHealth=50\nMaxHealth=100\n\
                    WeaponName=Glass Sword\nWeaponState={not json\n\
                    ArmorName=Rags\nGold=5\n";

        let record = decode_record(text, &weapons()).unwrap();

        assert_eq!(record.weapon.name, "Glass Sword");
        assert_eq!(record.weapon.damage, 16);
    }

    #[test]
    fn mismatched_weapon_state_is_corrupt() {
        let mut text = encode_record(&record()).unwrap();
        text = text.replace("WeaponTemplate=Glass Sword", "WeaponTemplate=Club");

        assert!(matches!(
            decode_record(&text, &weapons()),
            Err(RepositoryError::CorruptedData(_))
        ));
    }

    #[test]
    fn missing_or_invalid_required_values_are_corrupt() {
        let text = encode_record(&record()).unwrap();

        let no_gold = text.replace("Gold=120\n", "");
        let bad_level = text.replace("Level=2", "Level=two");

        assert!(matches!(
            decode_record(&no_gold, &weapons()),
            Err(RepositoryError::CorruptedData(message)) if message.contains("Gold")
        ));
        assert!(matches!(
            decode_record(&bad_level, &weapons()),
            Err(RepositoryError::CorruptedData(message)) if message.contains("Level")
        ));
    }

    #[test]
    fn invalid_poison_is_dropped() {
        let text = encode_record(&record())
            .unwrap()
            .replace("PoisonTickChance=40", "PoisonTickChance=250");

        let record = decode_record(&text, &weapons()).unwrap();

        assert_eq!(
            (record.poison_tick_chance, record.poison_damage, record.poison_turns),
            (0, 0, 0)
        );
    }

    #[test]
    fn harmless_poison_is_dropped() {
        let text = encode_record(&record())
            .unwrap()
            .replace("PoisonTickChance=40", "PoisonTickChance=0")
            .replace("PoisonDamage=3", "PoisonDamage=0");

        let record = decode_record(&text, &weapons()).unwrap();

        assert_eq!(
            (record.poison_tick_chance, record.poison_damage, record.poison_turns),
            (0, 0, 0)
        );
    }

    #[test]
    fn multiline_values_are_rejected() {
        let mut record = record();
        record.name = "Hero\nGold=999999".into();

        assert!(matches!(
            encode_record(&record),
            Err(RepositoryError::Serialization(_))
        ));
    }
}
