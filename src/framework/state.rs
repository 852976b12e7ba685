//! # ActorState Trait
//!
//! The `ActorState` trait defines the contract a state type must satisfy to be
//! owned by a [`StateActor`](crate::framework::StateActor). It names the
//! commands the state accepts, the outcome each command reports, the runtime
//! context (collaborators) injected into the actor, and the error type.
//!
//! # Architecture Note
//! Handlers never mutate in place. `handle` receives the latest committed
//! state by shared reference and returns a [`Transition`]: either a complete
//! new state to commit, or "keep" with an outcome. The actor decides when a
//! commit happens (persist first, then publish), so a handler cannot leave
//! a half-applied change behind when it fails midway through an `.await`.

use crate::framework::FrameworkError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<S, O> {
    /// Replace the state with `state` (persisted, then published).
    Commit { state: S, outcome: O },
    /// Leave the state as it is.
    Keep(O),
}

/// Trait that a state type must implement to be owned by a `StateActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so handlers can await collaborators
/// (catalogs, remote services). The `Context` type is injected into every
/// call of `handle`, which allows "Late Binding" of dependencies: they are
/// passed to `run()` instead of `new()`.
///
/// # Persistence
/// The whole state is serialized with `serde_json` on every commit. `Default`
/// is the state used when nothing (or nothing readable) has been persisted.
#[async_trait]
pub trait ActorState:
    Clone + Default + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Name of the storage slot, appended to the namespace (e.g. `"cart"`).
    const SLOT: &'static str;

    /// The operations this state accepts.
    type Command: Send + Sync + Debug;

    /// What a successful command reports back to the caller.
    type Outcome: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    ///
    /// Must absorb [`FrameworkError`] so transport and persistence failures
    /// reach callers through the same type as domain errors.
    type Error: std::error::Error + From<FrameworkError> + Send + Sync + 'static;

    /// Evaluate `command` against the current state.
    async fn handle(
        &self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Transition<Self, Self::Outcome>, Self::Error>;
}
