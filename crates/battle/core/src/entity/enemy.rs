//! Enemy battle participants.

use super::{BattleEntity, EntityCore};
use crate::action::ActionKind;
use crate::stats::EntityStats;
use crate::timer::ActionTimer;
use crate::types::Vec2;

/// Scheduler-driven enemy.
///
/// Enemies do not select their own actions; `select_action` returns `None`
/// and the battle manager synthesizes the canned Haunt attack against the
/// first other registered entity.
pub struct Enemy {
    id: String,
    position: Vec2,
    core: EntityCore,
}

impl Enemy {
    pub const DEFAULT_MAX_HP: u32 = 80;

    /// Creates an enemy at full default health.
    pub fn new(id: impl Into<String>, position: Vec2) -> Self {
        Self::with_stats(id, position, EntityStats::at_max(Self::DEFAULT_MAX_HP))
    }

    pub fn with_stats(id: impl Into<String>, position: Vec2, stats: EntityStats) -> Self {
        Self {
            id: id.into(),
            position,
            core: EntityCore::new(ActionTimer::new(), stats),
        }
    }
}

impl BattleEntity for Enemy {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_player_controlled(&self) -> bool {
        false
    }

    fn action_timer(&self) -> ActionTimer {
        self.core.timer()
    }

    fn charge_timer(&self, dt: f64) {
        self.core.charge_timer(dt);
    }

    fn reset_timer(&self) {
        self.core.reset_timer();
    }

    fn set_charging(&self, charging: bool) {
        self.core.set_charging(charging);
    }

    fn is_ready(&self) -> bool {
        self.core.is_ready()
    }

    fn stats(&self) -> EntityStats {
        self.core.stats()
    }

    fn apply_damage(&self, amount: u32) -> EntityStats {
        self.core.apply_damage(amount)
    }

    fn apply_heal(&self, amount: u32) -> EntityStats {
        self.core.apply_heal(amount)
    }

    fn select_action(&self) -> Option<ActionKind> {
        None
    }

    fn position(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_eighty_hp() {
        let enemy = Enemy::new("enemy", Vec2::new(600.0, 200.0));
        assert_eq!(enemy.stats().hp, 80);
        assert_eq!(enemy.stats().max_hp, 80);
        assert!(!enemy.is_player_controlled());
    }

    #[test]
    fn leaves_action_selection_to_the_scheduler() {
        let enemy = Enemy::new("enemy", Vec2::ZERO);
        enemy.charge_timer(1.0);
        assert!(enemy.is_ready());
        assert_eq!(enemy.select_action(), None);
    }
}
