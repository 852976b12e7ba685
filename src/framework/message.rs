//! # Generic Messages
//!
//! The message type sent from a [`StateClient`](crate::framework::StateClient)
//! to its [`StateActor`](crate::framework::StateActor).

use crate::framework::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<O, E> = oneshot::Sender<Result<O, E>>;

/// A queued command together with the channel its result is sent back on.
///
/// The actor handles requests strictly in arrival order, which is what
/// serializes concurrent mutations of the same state.
#[derive(Debug)]
pub struct StateRequest<S: ActorState> {
    pub command: S::Command,
    pub respond_to: Response<S::Outcome, S::Error>,
}
