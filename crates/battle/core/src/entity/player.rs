//! The player-controlled battle participant.

use std::sync::{Mutex, PoisonError};

use super::{BattleEntity, EntityCore};
use crate::action::ActionKind;
use crate::stats::EntityStats;
use crate::timer::ActionTimer;
use crate::types::Vec2;

/// Player-controlled entity.
///
/// The scheduler never auto-acts a player: a full timer stays pinned until
/// the external menu layer enqueues an action on the player's behalf. The
/// `selected_action` slot is written by that menu layer and read back when
/// building the action.
pub struct Player {
    id: String,
    position: Vec2,
    core: EntityCore,
    selected_action: Mutex<Option<ActionKind>>,
}

impl Player {
    pub const DEFAULT_MAX_HP: u32 = 100;

    /// Creates a player at full default health.
    pub fn new(id: impl Into<String>, position: Vec2) -> Self {
        Self::with_stats(id, position, EntityStats::at_max(Self::DEFAULT_MAX_HP))
    }

    pub fn with_stats(id: impl Into<String>, position: Vec2, stats: EntityStats) -> Self {
        Self {
            id: id.into(),
            position,
            core: EntityCore::new(ActionTimer::new(), stats),
            selected_action: Mutex::new(None),
        }
    }

    /// Records the kind picked in the battle menu.
    pub fn set_selected_action(&self, kind: Option<ActionKind>) {
        *self.selected_lock() = kind;
    }

    /// The kind currently highlighted in the battle menu, if any.
    pub fn selected_action(&self) -> Option<ActionKind> {
        *self.selected_lock()
    }

    fn selected_lock(&self) -> std::sync::MutexGuard<'_, Option<ActionKind>> {
        self.selected_action
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl BattleEntity for Player {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_player_controlled(&self) -> bool {
        true
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
        // Player actions arrive through the menu layer, which enqueues them
        // directly; the scheduler never synthesizes one.
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
    fn charges_and_resets_through_the_contract() {
        let player = Player::new("player", Vec2::ZERO);
        assert!(!player.is_ready());
        player.charge_timer(1.0);
        assert!(player.is_ready());
        player.reset_timer();
        assert_eq!(player.action_timer().current, 0.0);
    }

    #[test]
    fn damage_and_heal_are_clamped() {
        let player = Player::new("player", Vec2::ZERO);
        let stats = player.apply_damage(130);
        assert_eq!(stats.hp, 0);
        let stats = player.apply_heal(999);
        assert_eq!(stats.hp, Player::DEFAULT_MAX_HP);
    }

    #[test]
    fn menu_selection_round_trips() {
        let player = Player::new("player", Vec2::ZERO);
        assert_eq!(player.selected_action(), None);
        player.set_selected_action(Some(ActionKind::Item));
        assert_eq!(player.selected_action(), Some(ActionKind::Item));
        // The scheduler still never auto-acts the player.
        assert_eq!(player.select_action(), None);
    }
}
