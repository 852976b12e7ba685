//! Pure data structures for the cart and the products it references.
//!
//! [`Cart`] implements the [`ActorState`](crate::framework::ActorState) trait
//! (see [`crate::cart_actor`]), which lets it be owned by a
//! [`StateActor`](crate::framework::StateActor).

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
