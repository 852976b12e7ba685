//! # Generic Client
//!
//! The handle used to talk to a [`StateActor`](crate::framework::StateActor).

use crate::framework::{ActorState, FrameworkError, StateRequest};
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe client for interacting with a `StateActor`.
///
/// * **Cloneable** - holds a command sender and a snapshot receiver, both cheap to clone.
/// * **Commands** - [`send`](Self::send) queues a command and waits for its result.
/// * **Snapshots** - [`snapshot`](Self::snapshot) reads the last committed state
///   without going through the actor's queue.
#[derive(Clone)]
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
    snapshots: watch::Receiver<S>,
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>, snapshots: watch::Receiver<S>) -> Self {
        Self { sender, snapshots }
    }

    pub async fn send(&self, command: S::Command) -> Result<S::Outcome, S::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// The last committed state.
    pub fn snapshot(&self) -> S {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified after every commit.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.snapshots.clone()
    }
}
