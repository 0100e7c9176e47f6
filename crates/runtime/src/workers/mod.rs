//! Background task backing the battle manager.
//!
//! A single execution worker per manager instance consumes the action queue;
//! keeping it private to the crate means all coordination goes through
//! [`crate::BattleManager`].

mod executor;

pub(crate) use executor::ExecutionWorker;
