//! Loads the bundled data directory end to end.

use std::path::PathBuf;

use fight_content::ContentFactory;
use fight_core::{ArmorOracle, CombatConfig, ModifierKind, WeaponOracle};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn bundled_content_loads() {
    let content = ContentFactory::new(data_dir()).load_all().unwrap();

    assert_eq!(content.config, CombatConfig::default());
    assert_eq!(content.levels.len(), 3);
    assert!(content.levels.iter().all(|level| !level.enemies.is_empty()));
    assert_eq!(content.shops.blacksmith.len(), 5);
    assert_eq!(content.shops.prices.repair_cost, 80);
    assert_eq!(content.new_game.name, "Hero");
}

#[test]
fn every_break_and_repair_target_is_registered() {
    let catalog = ContentFactory::new(data_dir()).load_catalog().unwrap();

    for name in catalog.weapon_names() {
        let weapon = catalog.weapon(name).unwrap();
        for modifier in weapon.modifiers() {
            let target = match modifier {
                fight_core::WeaponModifier::Breakable(breakable) => breakable.broken_template(),
                other => match other.repair_target() {
                    Some(target) => target,
                    None => continue,
                },
            };
            assert!(
                catalog.contains_weapon(target),
                "{name} points at unknown template {target}"
            );
        }
    }
    assert!(catalog.armor("Plate").is_ok());
}

#[test]
fn broken_templates_are_repairable() {
    let catalog = ContentFactory::new(data_dir()).load_catalog().unwrap();

    let broken = catalog.weapon("Broken Glass Sword").unwrap();
    assert!(broken.can_repair());
    assert!(!broken.has_modifier(ModifierKind::Breakable));
    assert_eq!(broken.resolve_repair(&catalog).unwrap().name(), "Glass Sword");
}
