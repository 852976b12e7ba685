//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Output is compact and hides module paths (`with_target(false)`); the actor
//! tags its events with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: start (with the storage key), shutdown
//! - **Restore**: missing or unreadable snapshots at startup
//! - **Commands**: every command at `debug`, commits at `info`, failures at `warn`
//! - **Client Calls**: one span per client method, with its arguments
//! - **Notifications**: messages sent to the user, at `warn` with `TracingNotifier`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Commits and failures only
//! RUST_LOG=info cargo run
//!
//! # Every command and its outcome
//! RUST_LOG=debug cargo run
//!
//! # Filter to the actor loop
//! RUST_LOG=cart_store::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, adding a product that is already in the cart reads:
//!
//! ```text
//! DEBUG add_item{product_id=ProductId(1)}: Sending add_item to actor
//! DEBUG Command entity_type="Cart" command=AddItem(ProductId(1))
//! INFO Committed entity_type="Cart" outcome=AmountChanged { product_id: ProductId(1), from: 1, to: 2 }
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
