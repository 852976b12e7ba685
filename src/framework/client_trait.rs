//! # ActorClient Trait
//!
//! Common interface for domain clients, adding default snapshot accessors on
//! top of a generic [`StateClient`].
use crate::framework::{ActorState, StateClient};
use tokio::sync::watch;

/// Trait for domain-specific clients to inherit the read side of a `StateClient`.
///
/// Implementors only provide [`inner`](Self::inner); `snapshot` and `subscribe`
/// come for free.
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// The last committed state.
    #[tracing::instrument(skip(self), level = "trace")]
    fn snapshot(&self) -> S {
        self.inner().snapshot()
    }

    /// Subscribe to committed states.
    fn subscribe(&self) -> watch::Receiver<S> {
        self.inner().subscribe()
    }
}
