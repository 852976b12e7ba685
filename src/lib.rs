//! # Cart Store
//!
//! > **A stock-aware shopping cart, persisted on every change.**
//!
//! This crate keeps a client-side shopping cart: an ordered list of products
//! with quantities. Every change is validated against a product catalog and
//! live stock, written to durable local storage, and only then published to
//! whoever renders the cart.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One Owner, One Queue
//! The cart is owned by a single actor (a Tokio task). The UI never mutates it
//! directly; it sends commands, which are applied one at a time against the
//! latest committed cart. Two quick "add" clicks therefore can't both read the
//! same stale cart and lose an increment.
//!
//! ### Persist, Then Publish
//! A change is serialized and written to storage first. Only if the write
//! succeeds does the in-memory cart change and do subscribers hear about it.
//! A failed operation leaves memory, storage and subscribers untouched.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Every layer has its own `thiserror` enum ([`CartError`](cart_actor::CartError),
//! [`ServiceError`](services::ServiceError), [`StorageError`](storage::StorageError),
//! [`FrameworkError`](framework::FrameworkError)). Operations return explicit
//! `Result`s; [`CartStore`](lifecycle::CartStore) is the one place that turns
//! an error into a user notification.
//!
//! ### 2. Async Context Injection
//! The catalog and stock services are injected into the actor at `run()`, not
//! at construction. Tests hand it mocks; the binary hands it an HTTP client or
//! an in-memory inventory.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured fields. See the
//! [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`StateActor<S>`](framework::StateActor) that owns one
//! [`ActorState`](framework::ActorState), plus its client and test helpers.
//!
//! ### 2. The Implementation ([`cart_actor`], [`model`])
//! The [`Cart`](model::Cart) and the rules for adding, removing and changing
//! the amount of its lines.
//!
//! ### 3. The Interface ([`clients`])
//! [`CartClient`](clients::CartClient) wraps the generic client in typed methods.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`CartStore`](lifecycle::CartStore) starts the actor, reports failures to
//! the [`Notifier`](notify::Notifier), and shuts everything down. Configuration
//! lives in [`CartConfig`](lifecycle::CartConfig).
//!
//! ### 5. The Edges ([`services`], [`storage`], [`notify`])
//! The catalog and stock services, the key-value storage the cart is written
//! to, and the notification sink. Each is a trait with an in-memory and a real
//! implementation.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo session with info logs
//! RUST_LOG=info cargo run
//!
//! # Against a running product API, in Portuguese
//! CART_API_URL=http://localhost:3333 CART_LOCALE=pt-BR RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cart_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod services;
pub mod storage;
