/// Persisted snapshot of a weapon instance.
///
/// `modifier_states` lines up 1:1 with the weapon's modifier list; `None`
/// marks a stateless modifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct WeaponState {
    pub template_name: String,
    pub name: String,
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier_states: Vec<Option<String>>,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn json_uses_pascal_case_and_defaults_modifier_states() {
        let state = WeaponState {
            template_name: "Glass Sword".into(),
            name: "Broken Glass Sword".into(),
            damage: 2,
            modifier_states: vec![None, Some("3".into())],
        };

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"TemplateName":"Glass Sword","Name":"Broken Glass Sword","Damage":2,"ModifierStates":[null,"3"]}"#
        );

        let bare: WeaponState =
            serde_json::from_str(r#"{"TemplateName":"Club","Name":"Club","Damage":3}"#).unwrap();
        assert!(bare.modifier_states.is_empty());
    }
}
