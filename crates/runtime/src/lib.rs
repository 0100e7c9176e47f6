//! Battle orchestration runtime.
//!
//! This crate wires the pure data types from `battle-core` into a running
//! battle: a [`BattleManager`] charges every registered entity's readiness
//! timer from the caller's per-frame update loop, schedules ready entities
//! onto a bounded [`ActionQueue`], and a single background execution worker
//! drains that queue in strict FIFO order, mutating stats and emitting
//! floating damage numbers through the [`EffectManager`].
//!
//! Modules are organized by responsibility:
//! - [`manager`] hosts the orchestrator (registry, scheduling, worker
//!   lifecycle)
//! - [`queue`] is the bounded drop-over-stall action queue
//! - [`effects`] tracks transient floating damage/heal numbers
//! - [`workers`] keeps the background execution task internal to the crate

pub mod effects;
pub mod error;
pub mod manager;
pub mod queue;

mod workers;

pub use effects::EffectManager;
pub use error::EnqueueError;
pub use manager::BattleManager;
pub use queue::ActionQueue;
