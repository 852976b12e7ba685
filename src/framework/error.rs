//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, independent of any state type.
//! State-specific error types absorb these through `From<FrameworkError>`.

use crate::storage::StorageError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Snapshot encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("Snapshot storage failed: {0}")]
    Storage(#[from] StorageError),
}
