//! Battle actions: a resolved intent to apply an effect from an actor to a
//! target, created once, enqueued once, and consumed once by the execution
//! worker.

mod factory;
mod kind;

use std::fmt;
use std::sync::Arc;

use crate::entity::BattleEntity;

pub use factory::{
    available_enemy_actions, available_player_actions, create_enemy_action, create_player_action,
};
pub use kind::ActionKind;

/// An immutable battle action.
///
/// Sign convention for `magnitude`: positive values are damage, negative
/// values are heal requests. `target` is `None` for Run.
#[derive(Clone)]
pub struct Action {
    pub kind: ActionKind,
    pub actor: Arc<dyn BattleEntity>,
    pub target: Option<Arc<dyn BattleEntity>>,
    pub magnitude: i32,
    /// Nominal animation length in seconds; consumed by the presentation
    /// layer, never by the resolver.
    pub animation_secs: f64,
    /// Short verb phrase for battle log lines ("attacks", "haunts", ...).
    pub description: &'static str,
}

impl Action {
    pub fn new(
        kind: ActionKind,
        actor: Arc<dyn BattleEntity>,
        target: Option<Arc<dyn BattleEntity>>,
        magnitude: i32,
        animation_secs: f64,
        description: &'static str,
    ) -> Self {
        Self {
            kind,
            actor,
            target,
            magnitude,
            animation_secs,
            description,
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("kind", &self.kind)
            .field("actor", &self.actor.id())
            .field("target", &self.target.as_deref().map(BattleEntity::id))
            .field("magnitude", &self.magnitude)
            .field("animation_secs", &self.animation_secs)
            .finish()
    }
}
