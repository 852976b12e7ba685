//! Wiring and running the cart: the [`CartStore`] orchestrator, its
//! configuration and log setup.

pub mod cart_store;
pub mod config;
pub mod tracing;

pub use cart_store::*;
pub use config::*;
pub use self::tracing::*;
