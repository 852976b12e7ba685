//! # Generic Actor Server
//!
//! This module defines the `StateActor`, the component that owns one piece of
//! state, applies commands to it one at a time, and keeps storage and
//! subscribers in step with every change.

use crate::framework::{ActorState, FrameworkError, StateClient, StateRequest, Transition};
use crate::storage::{storage_key, Storage};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic actor that owns a single state value.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state, the
/// storage it is persisted to, and the receiver end of the command channel.
///
/// **Concurrency Model**:
/// Commands are processed *sequentially* in a loop. A command that awaits a
/// collaborator holds the queue until it finishes, so the next command always
/// starts from the latest committed state. Two callers can never both read
/// the same stale state and overwrite each other's change.
///
/// # Commit Order
///
/// For a [`Transition::Commit`]:
///     1. The new state is serialized to JSON.
///     2. The JSON is written to storage under `<namespace>:<slot>`.
///     3. Only if the write succeeded, the in-memory state is replaced.
///     4. The new state is published to subscribers.
///
/// If step 1 or 2 fails, nothing changes and the caller receives the error.
/// Observers therefore never see a state that has not been persisted.
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
    storage: Box<dyn Storage>,
    key: String,
    publisher: watch::Sender<S>,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor`, restoring its state from `storage`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space. 0 is raised to 1.
    /// * `storage` - Where snapshots are read from and written to.
    /// * `namespace` - Prefix of the storage key (`<namespace>:<S::SLOT>`).
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::Storage`] if storage cannot be read. A stored
    /// value that does not deserialize is not an error: it is logged and the
    /// actor starts from `S::default()`.
    pub fn new(
        buffer_size: usize,
        storage: impl Storage + 'static,
        namespace: &str,
    ) -> Result<(Self, StateClient<S>), FrameworkError> {
        let key = storage_key(namespace, S::SLOT);
        let state = restore::<S>(&storage, &key)?;

        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let (publisher, snapshots) = watch::channel(state.clone());
        let actor = Self {
            receiver,
            state,
            storage: Box::new(storage),
            key,
            publisher,
        };
        let client = StateClient::new(sender, snapshots);
        Ok((actor, client))
    }

    /// Runs the actor's event loop, processing commands until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every [`ActorState::handle`] call.
    /// This allows the state to reach external dependencies (catalogs, stock
    /// services) that were created *after* the actor was instantiated.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "Cart" instead of "cart_store::model::cart::Cart")
        let entity_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, key = %self.key, "Actor started");

        while let Some(StateRequest {
            command,
            respond_to,
        }) = self.receiver.recv().await
        {
            debug!(entity_type, ?command, "Command");
            let handled = self.state.handle(command, &context).await;

            let result = match handled {
                Ok(Transition::Commit { state, outcome }) => match self.commit(state) {
                    Ok(()) => {
                        info!(entity_type, ?outcome, "Committed");
                        Ok(outcome)
                    }
                    Err(e) => {
                        warn!(entity_type, error = %e, "Commit failed");
                        Err(S::Error::from(e))
                    }
                },
                Ok(Transition::Keep(outcome)) => {
                    debug!(entity_type, ?outcome, "Unchanged");
                    Ok(outcome)
                }
                Err(e) => {
                    warn!(entity_type, error = %e, "Command failed");
                    Err(e)
                }
            };
            let _ = respond_to.send(result);
        }

        info!(entity_type, "Shutdown");
    }

    fn commit(&mut self, state: S) -> Result<(), FrameworkError> {
        let raw = serde_json::to_string(&state)?;
        self.storage.set(&self.key, &raw)?;
        self.state = state.clone();
        self.publisher.send_replace(state);
        Ok(())
    }
}

/// Reads the persisted state under `key`, falling back to `S::default()`.
fn restore<S: ActorState>(storage: &dyn Storage, key: &str) -> Result<S, FrameworkError> {
    let Some(raw) = storage.get(key)? else {
        debug!(key, "No persisted state, starting empty");
        return Ok(S::default());
    };

    match serde_json::from_str::<S>(&raw) {
        Ok(state) => {
            debug!(key, "Restored persisted state");
            Ok(state)
        }
        Err(e) => {
            warn!(key, error = %e, "Persisted state is unreadable; starting empty");
            Ok(S::default())
        }
    }
}
