//! Single-consumer execution worker.
//!
//! Pulls actions off the bounded queue and resolves them one at a time, so
//! two actions never execute concurrently and always run in enqueue order.
//! The worker suspends only while the queue is empty and exits on the first
//! of {shutdown signal, queue closed and drained}.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use battle_core::{Action, ActionKind, BattleConfig, DamageEffect, Vec2};

use crate::effects::EffectManager;

/// Vertical offset above an entity at which its damage number spawns.
const EFFECT_Y_OFFSET: f64 = 20.0;

pub(crate) struct ExecutionWorker {
    queue_rx: mpsc::Receiver<Action>,
    shutdown_rx: watch::Receiver<()>,
    effects: Arc<EffectManager>,
    config: BattleConfig,
}

impl ExecutionWorker {
    pub(crate) fn new(
        queue_rx: mpsc::Receiver<Action>,
        shutdown_rx: watch::Receiver<()>,
        effects: Arc<EffectManager>,
        config: BattleConfig,
    ) -> Self {
        Self {
            queue_rx,
            shutdown_rx,
            effects,
            config,
        }
    }

    /// Main worker loop.
    pub(crate) async fn run(mut self) {
        loop {
            tokio::select! {
                _ = self.shutdown_rx.changed() => {
                    debug!(target: "battle::worker", "execution worker stopped by shutdown signal");
                    return;
                }
                action = self.queue_rx.recv() => match action {
                    Some(action) => self.process_action(action),
                    None => {
                        debug!(target: "battle::worker", "action queue closed and drained");
                        return;
                    }
                },
            }
        }
    }

    fn process_action(&self, action: Action) {
        debug!(
            target: "battle::worker",
            actor = action.actor.id(),
            kind = %action.kind,
            "processing action"
        );

        self.execute_action(&action);

        // Resolving always drains the actor's timer, even for skipped or
        // unrecognized actions, so an actor can never stall at ready.
        action.actor.reset_timer();
    }

    fn execute_action(&self, action: &Action) {
        match action.kind {
            ActionKind::Attack | ActionKind::Haunt => self.execute_damage(action),
            ActionKind::Item => self.execute_heal(action),
            ActionKind::Defend => self.execute_defend(action),
            ActionKind::Run => self.execute_run(action),
            kind => {
                warn!(target: "battle::worker", %kind, "unknown action kind, ignoring");
            }
        }
    }

    fn execute_damage(&self, action: &Action) {
        let Some(target) = action.target.as_ref() else {
            warn!(
                target: "battle::worker",
                actor = action.actor.id(),
                "damage action has no target, skipping"
            );
            return;
        };

        let amount = action.magnitude.max(0) as u32;
        let stats = target.apply_damage(amount);
        self.spawn_effect(target.position(), amount as i32, false);

        debug!(
            target: "battle::worker",
            actor = action.actor.id(),
            victim = target.id(),
            amount,
            hp = stats.hp,
            max_hp = stats.max_hp,
            "damage resolved"
        );
    }

    fn execute_heal(&self, action: &Action) {
        // Sign convention: heals are stored as negative magnitude and apply
        // to the actor.
        let amount = (-action.magnitude).max(0) as u32;
        let stats = action.actor.apply_heal(amount);
        self.spawn_effect(action.actor.position(), amount as i32, true);

        debug!(
            target: "battle::worker",
            actor = action.actor.id(),
            amount,
            hp = stats.hp,
            max_hp = stats.max_hp,
            "heal resolved"
        );
    }

    fn execute_defend(&self, action: &Action) {
        // Placeholder hook: no mitigation mechanic yet.
        debug!(target: "battle::worker", actor = action.actor.id(), "defends");
    }

    fn execute_run(&self, action: &Action) {
        // Placeholder hook: no escape mechanic yet.
        debug!(target: "battle::worker", actor = action.actor.id(), "attempts to run");
    }

    fn spawn_effect(&self, at: Vec2, value: i32, healing: bool) {
        let origin = Vec2::new(at.x, at.y - EFFECT_Y_OFFSET);
        self.effects.add_effect(DamageEffect::new(
            origin,
            value,
            self.config.damage_effect_duration,
            healing,
        ));
    }
}
