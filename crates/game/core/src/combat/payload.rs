use crate::state::PoisonState;

/// Resolved outcome of one strike, before armor mitigation.
///
/// Payloads are values: each modifier in the pipeline takes one and returns
/// a new one with only its own concern changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamagePayload {
    damage: u32,
    self_damage: u32,
    is_critical: bool,
    poison: Option<PoisonState>,
}

impl DamagePayload {
    pub fn new(damage: u32, is_critical: bool) -> Self {
        Self {
            damage,
            self_damage: 0,
            is_critical,
            poison: None,
        }
    }

    /// Adds to the self-damage carried by this payload.
    #[must_use]
    pub fn with_self_damage(self, amount: u32) -> Self {
        Self {
            self_damage: self.self_damage.saturating_add(amount),
            ..self
        }
    }

    /// Replaces the poison carried by this payload.
    #[must_use]
    pub fn with_poison(self, poison: PoisonState) -> Self {
        Self {
            poison: Some(poison),
            ..self
        }
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn self_damage(&self) -> u32 {
        self.self_damage
    }

    pub fn is_critical(&self) -> bool {
        self.is_critical
    }

    pub fn poison(&self) -> Option<PoisonState> {
        self.poison
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_damage_accumulates() {
        let payload = DamagePayload::new(10, false)
            .with_self_damage(2)
            .with_self_damage(3);

        assert_eq!(payload.damage(), 10);
        assert_eq!(payload.self_damage(), 5);
        assert!(payload.poison().is_none());
    }

    #[test]
    fn last_poison_wins() {
        let weak = PoisonState::new(50, 1, 2).unwrap();
        let strong = PoisonState::new(80, 4, 3).unwrap();

        let payload = DamagePayload::new(5, true)
            .with_poison(weak)
            .with_poison(strong);

        assert!(payload.is_critical());
        assert_eq!(payload.poison(), Some(strong));
    }
}
