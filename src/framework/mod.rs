//! Generic single-state actor framework.
//!
//! This module provides the building blocks for owning one piece of durable
//! state behind an actor: every mutation is queued, evaluated against the
//! latest committed state, persisted, and only then published.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that state types implement to be owned by an actor
//! - [`StateActor`] - Generic actor that owns, persists and publishes the state
//! - [`StateClient`] - Type-safe handle for sending commands and reading snapshots
//! - [`ActorClient`] - Trait for domain clients wrapping a `StateClient`
//! - [`FrameworkError`] - Transport and persistence errors
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::{ActorState, Transition};
