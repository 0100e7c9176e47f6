//! Tracks active floating damage/heal numbers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use battle_core::DamageEffect;

/// Thread-safe set of live [`DamageEffect`]s.
///
/// The execution worker produces effects while the external renderer
/// consumes snapshots each frame; the internal lock is independent of the
/// battle manager's registry lock. Finished effects are dropped on every
/// tick; the active count is bounded by recent action throughput, so the
/// rebuild stays cheap.
pub struct EffectManager {
    effects: Mutex<Vec<DamageEffect>>,
}

impl EffectManager {
    pub fn new() -> Self {
        Self {
            effects: Mutex::new(Vec::new()),
        }
    }

    pub fn add_effect(&self, effect: DamageEffect) {
        self.lock().push(effect);
    }

    /// Advances every effect and drops the ones past their duration.
    pub fn update(&self, dt: f64) {
        let mut effects = self.lock();
        for effect in effects.iter_mut() {
            effect.advance(dt);
        }
        effects.retain(|effect| !effect.is_finished());
    }

    /// Snapshot of the live effects for the renderer. Read-only copy; the
    /// renderer never mutates effect state.
    pub fn active_effects(&self) -> Vec<DamageEffect> {
        self.lock().clone()
    }

    pub fn clear_all(&self) {
        self.lock().clear();
    }

    pub fn effect_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DamageEffect>> {
        self.effects.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EffectManager {
    fn default() -> Self {
        Self::new()
    }
}
