/// Armor definition.
///
/// Armor carries no mutable state; combatants share one instance per template
/// through `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armor {
    pub name: String,
    pub defense: u32,
}

impl Armor {
    pub fn new(name: impl Into<String>, defense: u32) -> Self {
        Self {
            name: name.into(),
            defense,
        }
    }

    /// Armor with no defense, for unarmored combatants.
    pub fn none() -> Self {
        Self::new("Clothes", 0)
    }
}
