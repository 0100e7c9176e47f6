//! Core battle data and logic for the real-time turn-based combat resolver.
//!
//! Entities accumulate readiness over time; once ready they select (or are
//! assigned) an [`Action`] that the runtime layer executes against shared
//! battle state. This crate holds the pure pieces of that system: the
//! readiness timer, entity stats, the action value type and its factories,
//! the transient damage-number effect, and the [`BattleEntity`] capability
//! contract implemented by the player and enemy variants.
//!
//! Orchestration (the bounded action queue, execution worker, and effect
//! manager) lives in the `battle-runtime` crate. Nothing in this crate
//! performs I/O or spawns tasks.

pub mod action;
pub mod config;
pub mod effect;
pub mod entity;
pub mod stats;
pub mod timer;
pub mod types;

pub use action::{
    Action, ActionKind, available_enemy_actions, available_player_actions, create_enemy_action,
    create_player_action,
};
pub use config::BattleConfig;
pub use effect::DamageEffect;
pub use entity::{BattleEntity, Enemy, Player};
pub use stats::EntityStats;
pub use timer::ActionTimer;
pub use types::Vec2;
