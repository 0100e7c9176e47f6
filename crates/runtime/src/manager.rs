//! Battle orchestrator: entity registry, per-frame scheduling, and worker
//! lifecycle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use battle_core::{Action, BattleConfig, BattleEntity, create_enemy_action, create_player_action};

use crate::effects::EffectManager;
use crate::queue::ActionQueue;
use crate::workers::ExecutionWorker;

/// How long `stop_processing` waits for the worker before giving up.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Orchestrates one battle instance.
///
/// Two threads of control touch a manager: the caller's frame loop drives
/// [`update`](Self::update) (charging timers and scheduling ready entities)
/// while one background execution worker drains the action queue. The
/// registry lock here protects only membership; each entity serializes its
/// own timer/stats behind its own lock, so charging one entity and
/// resolving an action against another proceed concurrently.
pub struct BattleManager {
    config: BattleConfig,
    entities: Mutex<Vec<Arc<dyn BattleEntity>>>,
    queue: ActionQueue,
    // Consumer endpoint parked here until start_processing hands it to the
    // worker.
    queue_rx: Mutex<Option<mpsc::Receiver<Action>>>,
    shutdown_tx: watch::Sender<()>,
    worker: Mutex<Option<JoinHandle<()>>>,
    effects: Arc<EffectManager>,
}

impl BattleManager {
    pub fn new(config: BattleConfig) -> Self {
        let (queue, queue_rx) = ActionQueue::new(config.action_queue_capacity);
        let (shutdown_tx, _shutdown_rx) = watch::channel(());
        Self {
            config,
            entities: Mutex::new(Vec::new()),
            queue,
            queue_rx: Mutex::new(Some(queue_rx)),
            shutdown_tx,
            worker: Mutex::new(None),
            effects: Arc::new(EffectManager::new()),
        }
    }

    /// Registers a battle entity.
    pub fn add_entity(&self, entity: Arc<dyn BattleEntity>) {
        debug!(target: "battle::manager", id = entity.id(), "added entity");
        lock(&self.entities).push(entity);
    }

    /// Removes the entity with the given id, returning whether it was
    /// registered.
    pub fn remove_entity(&self, id: &str) -> bool {
        let mut entities = lock(&self.entities);
        let before = entities.len();
        entities.retain(|entity| entity.id() != id);
        let removed = entities.len() < before;
        if removed {
            debug!(target: "battle::manager", id, "removed entity");
        }
        removed
    }

    /// Snapshot of the registered entities, for HP/timer-bar display.
    pub fn entities(&self) -> Vec<Arc<dyn BattleEntity>> {
        lock(&self.entities).clone()
    }

    /// Per-frame update: charge every timer, then schedule ready entities.
    ///
    /// Never blocks or suspends. Charging is unconditional: the
    /// simulation's sense of time keeps advancing even while earlier
    /// actions are still resolving on the worker.
    pub fn update(&self, dt: f64) {
        let entities = lock(&self.entities);
        self.charge_all_timers(&entities, dt);
        self.schedule_ready_entities(&entities);
    }

    /// Places an externally built action (e.g. a player menu selection) on
    /// the queue. Returns false if the action was dropped; callers should
    /// treat that as "retry next readiness tick".
    pub fn enqueue_action(&self, action: Action) -> bool {
        let actor = action.actor.id().to_owned();
        let description = action.description;
        match self.queue.enqueue(action) {
            Ok(()) => {
                debug!(target: "battle::manager", actor = %actor, description, "enqueued action");
                true
            }
            Err(err) => {
                warn!(target: "battle::manager", actor = %actor, description, error = %err, "dropped action");
                false
            }
        }
    }

    /// Spawns the background execution worker.
    ///
    /// Must be called from within a Tokio runtime. Calling it a second time
    /// logs a warning and does nothing.
    pub fn start_processing(&self) {
        let Some(queue_rx) = lock(&self.queue_rx).take() else {
            warn!(target: "battle::manager", "action processing already started");
            return;
        };

        let worker = ExecutionWorker::new(
            queue_rx,
            self.shutdown_tx.subscribe(),
            Arc::clone(&self.effects),
            self.config,
        );
        *lock(&self.worker) = Some(tokio::spawn(worker.run()));
        debug!(target: "battle::manager", "started action processing");
    }

    /// Signals the worker to stop, closes the queue, and waits for the
    /// worker to exit up to a bounded timeout. On timeout a warning is
    /// logged and the call returns anyway, so the caller is never hung.
    pub async fn stop_processing(&self) {
        // Send fails only when no worker holds a receiver; nothing to stop.
        let _ = self.shutdown_tx.send(());
        self.queue.close();

        let Some(handle) = lock(&self.worker).take() else {
            return;
        };
        match tokio::time::timeout(SHUTDOWN_TIMEOUT, handle).await {
            Ok(Ok(())) => debug!(target: "battle::manager", "action processing stopped"),
            Ok(Err(err)) => {
                warn!(target: "battle::manager", error = %err, "execution worker failed")
            }
            Err(_) => warn!(target: "battle::manager", "timed out waiting for execution worker"),
        }
    }

    /// The floating-number subsystem, polled by the renderer each frame.
    pub fn effect_manager(&self) -> &EffectManager {
        &self.effects
    }

    /// Queue introspection for diagnostics and tests.
    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    fn charge_all_timers(&self, entities: &[Arc<dyn BattleEntity>], dt: f64) {
        // The global rate composes multiplicatively with each timer's own
        // charge rate.
        let charged = dt * self.config.timer_charge_rate;
        for entity in entities {
            entity.charge_timer(charged);
        }
    }

    /// Auto-acts ready non-player entities. A ready player stays pinned at
    /// full charge until the UI enqueues an action on its behalf.
    fn schedule_ready_entities(&self, entities: &[Arc<dyn BattleEntity>]) {
        for entity in entities {
            if !entity.is_ready() || entity.is_player_controlled() {
                continue;
            }

            // Fixed targeting policy: the first other registered entity.
            // Valid for the single-enemy topology; multi-enemy battles need
            // a real targeting policy first.
            let Some(target) = entities.iter().find(|other| other.id() != entity.id()) else {
                continue;
            };

            let action = match entity.select_action() {
                Some(kind) => {
                    create_player_action(kind, Arc::clone(entity), Some(Arc::clone(target)))
                }
                None => create_enemy_action(Arc::clone(entity), Arc::clone(target)),
            };
            self.enqueue_action(action);
        }
    }
}

// Poisoned locks only ever guard plain data here; recover the guard rather
// than propagating a panic into the frame loop.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use battle_core::{Enemy, Player, Vec2};

    use super::*;

    fn manager_with_rate(rate: f64) -> BattleManager {
        BattleManager::new(BattleConfig::default().with_timer_charge_rate(rate))
    }

    #[test]
    fn update_composes_global_and_timer_rates() {
        let manager = manager_with_rate(0.5);
        let player = Arc::new(Player::new("player", Vec2::ZERO));
        manager.add_entity(player.clone());

        manager.update(1.0);
        assert_eq!(player.action_timer().current, 0.5);
        manager.update(1.0);
        assert!(player.is_ready());
    }

    #[test]
    fn ready_player_is_never_auto_acted() {
        let manager = manager_with_rate(1.0);
        let player = Arc::new(Player::new("player", Vec2::ZERO));
        manager.add_entity(player.clone());

        manager.update(1.0);
        manager.update(1.0);
        assert!(player.is_ready());
        // Pinned at full, nothing scheduled.
        assert_eq!(player.action_timer().current, 1.0);
        assert_eq!(manager.queue().len(), 0);
    }

    #[test]
    fn ready_enemy_gets_a_synthesized_action() {
        let manager = manager_with_rate(1.0);
        let player = Arc::new(Player::new("player", Vec2::ZERO));
        let enemy = Arc::new(Enemy::new("enemy", Vec2::ZERO));
        manager.add_entity(player);
        manager.add_entity(enemy);

        manager.update(1.0);
        // Player is ready too but only the enemy is auto-acted.
        assert_eq!(manager.queue().len(), 1);
    }

    #[test]
    fn lone_enemy_has_no_target_and_is_skipped() {
        let manager = manager_with_rate(1.0);
        manager.add_entity(Arc::new(Enemy::new("enemy", Vec2::ZERO)));

        manager.update(1.0);
        assert_eq!(manager.queue().len(), 0);
    }

    #[test]
    fn zero_queue_capacity_config_still_constructs() {
        let manager = BattleManager::new(BattleConfig::default().with_queue_capacity(0));
        assert_eq!(manager.queue().capacity(), 1);
        assert_eq!(manager.queue().len(), 0);
    }

    #[test]
    fn remove_entity_by_id() {
        let manager = BattleManager::new(BattleConfig::default());
        manager.add_entity(Arc::new(Enemy::new("enemy", Vec2::ZERO)));
        assert!(manager.remove_entity("enemy"));
        assert!(!manager.remove_entity("enemy"));
        assert!(manager.entities().is_empty());
    }
}
