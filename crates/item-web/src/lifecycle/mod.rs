//! # Process Lifecycle
//!
//! Orchestration for the catalog process: starting the store actor,
//! seeding it before the first request, and shutting everything down.
//!
//! Wiring follows the usual actor discipline: create the actor and its
//! client, spawn the run loop, hand clones of the client to whoever needs
//! one. Shutdown is the reverse: drop the clients, which closes the
//! channel, and await the actor task.
//!
//! Seeding is process lifecycle, not request handling: it runs exactly
//! once, after the actor is up and before the listener accepts requests,
//! so the list view is non-empty on first use.

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
