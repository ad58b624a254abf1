//! Pure data structures: the product record held by the store and the seller identity.

pub mod identity;
pub mod product;

pub use identity::*;
pub use product::*;
