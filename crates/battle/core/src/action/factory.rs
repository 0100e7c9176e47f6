//! Action factories consumed by the scene/menu layer and the scheduler's
//! fixed enemy policy.
//!
//! Magnitudes are drawn from bounded integer ranges using the thread-local
//! RNG, which is seeded once from OS entropy rather than reseeded per call.

use std::sync::Arc;

use rand::Rng;

use super::{Action, ActionKind};
use crate::entity::BattleEntity;

/// Actions selectable from the player menu.
pub fn available_player_actions() -> &'static [ActionKind] {
    &[
        ActionKind::Attack,
        ActionKind::Defend,
        ActionKind::Item,
        ActionKind::Run,
    ]
}

/// Actions available to enemies.
pub fn available_enemy_actions() -> &'static [ActionKind] {
    &[ActionKind::Haunt]
}

/// Builds an action for a player-selected kind.
///
/// Item heals target the actor regardless of `target`; Run has no target.
pub fn create_player_action(
    kind: ActionKind,
    actor: Arc<dyn BattleEntity>,
    target: Option<Arc<dyn BattleEntity>>,
) -> Action {
    match kind {
        ActionKind::Attack => {
            let damage = roll(5, 8);
            Action::new(kind, actor, target, damage, 1.0, "attacks")
        }
        ActionKind::Defend => Action::new(kind, actor, target, 0, 0.5, "defends"),
        ActionKind::Item => {
            // Negative magnitude = heal request, applied to the actor.
            let heal = roll(10, 15);
            let self_target = Some(Arc::clone(&actor));
            Action::new(kind, actor, self_target, -heal, 1.0, "uses an item")
        }
        ActionKind::Run => Action::new(kind, actor, None, 0, 0.5, "attempts to run"),
        ActionKind::Haunt => {
            let damage = roll(9, 12);
            Action::new(kind, actor, target, damage, 1.2, "haunts")
        }
    }
}

/// Builds the canned enemy action: a Haunt attack against `target`.
pub fn create_enemy_action(actor: Arc<dyn BattleEntity>, target: Arc<dyn BattleEntity>) -> Action {
    let damage = roll(9, 12);
    Action::new(
        ActionKind::Haunt,
        actor,
        Some(target),
        damage,
        1.2,
        "haunts",
    )
}

/// Random integer in `[min, max]` (inclusive on both ends).
fn roll(min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }
    rand::thread_rng().gen_range(min..=max)
}
