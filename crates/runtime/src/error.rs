//! Error types surfaced by the runtime.
//!
//! Failure here is deliberately soft: the frame loop and the UI treat a
//! failed enqueue as "retry next readiness tick", so nothing in this crate
//! panics or propagates a hard error into the caller's update path.

use thiserror::Error;

/// Why an action could not be placed on the queue.
///
/// Both cases drop the action; the producer is never blocked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnqueueError {
    #[error("action queue is full")]
    Full,

    #[error("action queue is closed")]
    Closed,
}
