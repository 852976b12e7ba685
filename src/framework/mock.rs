//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! A [`StateClient`] normally talks to a running [`StateActor`](crate::framework::StateActor).
//! In unit tests of the layers *around* the client (e.g. how
//! [`CartStore`](crate::lifecycle::CartStore) turns errors into notifications)
//! we don't want a real actor. [`create_mock_client`] returns a client whose
//! commands arrive on a channel the test controls; [`expect_command`] pulls
//! the next one off so the test can assert on it and answer it.
//!
//! | | Mock client | Real actor |
//! |---|---|---|
//! | **Speed** | Instant | Fast (tokio spawn) |
//! | **Error Injection** | Easy (answer with any error) | Needs a failing collaborator |
//! | **Use Case** | Logic around the client | The state's own rules |
//!
//! To test a state's rules with fake collaborators instead, see
//! [`crate::services::mock`].

use crate::framework::{ActorState, Response, StateClient, StateRequest};
use tokio::sync::{mpsc, watch};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client's snapshot is `initial` and never changes.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
    initial: S,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, snapshots) = watch::channel(initial);
    (StateClient::new(sender, snapshots), receiver)
}

/// Helper to take the next command sent through a mock client.
///
/// Returns `None` if every client was dropped without sending.
pub async fn expect_command<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(S::Command, Response<S::Outcome, S::Error>)> {
    receiver
        .recv()
        .await
        .map(|request| (request.command, request.respond_to))
}
