//! # Product Store Actor
//!
//! The document store holding every seller's product records, built on the generic
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for
//!   [`ProductRecord`]
//! - [`error`] - [`ProductError`]
//! - [`ModerationAction`] - approval changes made by the moderation process
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use seller_catalog::clients::ProductClient;
//! use seller_catalog::model::NewProduct;
//! use seller_catalog::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let products = ProductClient::new(client);
//!     let id = products
//!         .create_product(NewProduct::new("seller_a", "Cassava flour", 250.0))
//!         .await?;
//!     let mine = products.list_for_owner("seller_a".into()).await?;
//!     assert_eq!(mine[0].id, id);
//!     Ok(())
//! }
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::ProductRecord;

/// Creates a new product store actor and its client.
pub fn new() -> (ResourceActor<ProductRecord>, ResourceClient<ProductRecord>) {
    ResourceActor::new(32)
}
