//! Battle participants and the capability contract they expose.
//!
//! The battle manager holds only `Arc<dyn BattleEntity>` references; entity
//! lifecycle (creation/destruction) belongs to the owning scene. Each
//! implementor guards its own timer and stats with an internal lock, which
//! forms the inner tier of the two-tier locking scheme: the manager's
//! registry lock and a per-entity state lock.

mod enemy;
mod player;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::action::ActionKind;
use crate::stats::EntityStats;
use crate::timer::ActionTimer;
use crate::types::Vec2;

pub use enemy::Enemy;
pub use player::Player;

/// Capability surface every battle participant exposes.
///
/// Timer and stats accessors return snapshots; mutation goes through the
/// clamped [`apply_damage`](Self::apply_damage) /
/// [`apply_heal`](Self::apply_heal) and the timer operations, so the
/// per-entity lock never leaks to callers. The scheduling loop reads
/// `is_ready` while the execution worker resets timers and mutates stats;
/// both paths serialize on the implementor's internal lock.
pub trait BattleEntity: Send + Sync {
    /// Stable identifier, unique within a battle.
    fn id(&self) -> &str;

    /// Player-controlled entities are never auto-acted by the scheduler; a
    /// ready player waits at full charge for the UI to enqueue its action.
    fn is_player_controlled(&self) -> bool;

    /// Snapshot of the entity's readiness timer.
    fn action_timer(&self) -> ActionTimer;

    /// Charges the readiness timer by `dt` seconds of charged time.
    fn charge_timer(&self, dt: f64);

    /// Drains the readiness timer back to zero.
    fn reset_timer(&self);

    /// Pauses or resumes timer accrual without losing progress.
    fn set_charging(&self, charging: bool);

    /// True once the entity may act (timer full).
    fn is_ready(&self) -> bool;

    /// Snapshot of the entity's battle stats.
    fn stats(&self) -> EntityStats;

    /// Applies clamped damage and returns the post-mutation stats.
    fn apply_damage(&self, amount: u32) -> EntityStats;

    /// Applies clamped healing and returns the post-mutation stats.
    fn apply_heal(&self, amount: u32) -> EntityStats;

    /// The action kind this entity wants to perform, if it selects its own.
    /// `None` lets the scheduler fall back to the fixed enemy policy.
    fn select_action(&self) -> Option<ActionKind>;

    /// Position used to place floating damage numbers.
    fn position(&self) -> Vec2;
}

/// Lock-guarded timer and stats shared by the concrete entity variants.
#[derive(Debug)]
pub(crate) struct EntityCore {
    state: Mutex<CoreState>,
}

#[derive(Clone, Copy, Debug)]
struct CoreState {
    timer: ActionTimer,
    stats: EntityStats,
}

impl EntityCore {
    pub(crate) fn new(timer: ActionTimer, stats: EntityStats) -> Self {
        Self {
            state: Mutex::new(CoreState { timer, stats }),
        }
    }

    // A poisoned lock only means another thread panicked mid-mutation of
    // plain-old-data; recover the guard rather than propagating the panic
    // into the frame loop.
    fn lock(&self) -> MutexGuard<'_, CoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn timer(&self) -> ActionTimer {
        self.lock().timer
    }

    pub(crate) fn charge_timer(&self, dt: f64) {
        self.lock().timer.charge(dt);
    }

    pub(crate) fn reset_timer(&self) {
        self.lock().timer.reset();
    }

    pub(crate) fn set_charging(&self, charging: bool) {
        self.lock().timer.set_charging(charging);
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.lock().timer.is_full()
    }

    pub(crate) fn stats(&self) -> EntityStats {
        self.lock().stats
    }

    pub(crate) fn apply_damage(&self, amount: u32) -> EntityStats {
        let mut state = self.lock();
        state.stats.apply_damage(amount);
        state.stats
    }

    pub(crate) fn apply_heal(&self, amount: u32) -> EntityStats {
        let mut state = self.lock();
        state.stats.apply_heal(amount);
        state.stats
    }
}
