//! Battle statistics tracked per entity.

/// Hit points and speed for a single battle participant.
///
/// Invariant: `0 <= hp <= max_hp` at all times. The only mutators are the
/// clamped [`apply_damage`](Self::apply_damage) and
/// [`apply_heal`](Self::apply_heal), called exclusively by the execution
/// worker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityStats {
    pub hp: u32,
    pub max_hp: u32,
    /// Charge-rate multiplier (1.0 = normal speed).
    pub speed: f64,
}

impl EntityStats {
    pub fn new(hp: u32, max_hp: u32) -> Self {
        Self {
            hp: hp.min(max_hp),
            max_hp,
            speed: 1.0,
        }
    }

    /// Stats starting at full health.
    pub fn at_max(max_hp: u32) -> Self {
        Self::new(max_hp, max_hp)
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Removes up to `amount` hit points, flooring at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Restores up to `amount` hit points, capped at `max_hp`.
    pub fn apply_heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_floors_at_zero() {
        let mut stats = EntityStats::at_max(80);
        stats.apply_damage(30);
        assert_eq!(stats.hp, 50);
        stats.apply_damage(200);
        assert_eq!(stats.hp, 0);
        assert!(stats.is_defeated());
    }

    #[test]
    fn heal_caps_at_max() {
        let mut stats = EntityStats::new(40, 100);
        stats.apply_heal(15);
        assert_eq!(stats.hp, 55);
        stats.apply_heal(999);
        assert_eq!(stats.hp, 100);
    }

    #[test]
    fn new_clamps_starting_hp() {
        let stats = EntityStats::new(150, 100);
        assert_eq!(stats.hp, 100);
    }
}
