//! Damage calculation and application.

/// Scale a strike by the critical multiplier.
///
/// Saturates instead of wrapping so an absurd template cannot flip a hit into
/// a tiny one.
pub fn critical_damage(damage: u32, multiplier: u32) -> u32 {
    damage.saturating_mul(multiplier)
}

/// Reduce incoming damage by armor defense.
///
/// # Formula
///
/// ```text
/// delivered = max(0, damage - defense)
/// ```
pub fn mitigate(damage: u32, defense: u32) -> u32 {
    damage.saturating_sub(defense)
}

/// Apply damage to current HP.
///
/// Returns new HP value (clamped to 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_damage() {
        assert_eq!(apply_damage(100, 30), 70);
        assert_eq!(apply_damage(100, 100), 0);
        assert_eq!(apply_damage(100, 150), 0); // Clamped to 0
    }

    #[test]
    fn test_mitigate() {
        assert_eq!(mitigate(10, 3), 7);
        assert_eq!(mitigate(3, 10), 0);
        assert_eq!(mitigate(10, 0), 10);
    }

    #[test]
    fn test_critical_damage() {
        assert_eq!(critical_damage(10, 2), 20);
        assert_eq!(critical_damage(0, 2), 0);
        assert_eq!(critical_damage(u32::MAX, 2), u32::MAX);
    }
}
