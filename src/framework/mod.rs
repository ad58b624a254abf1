//! Generic resource-actor framework.
//!
//! The document store is modelled as a [`ResourceActor`]: a Tokio task that owns a
//! collection of records and answers CRUD, query and custom-action requests sent
//! through a cloneable [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns the records
//! - [`ResourceClient`] - Type-safe handle for sending requests
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
