//! # System Lifecycle & Orchestration
//!
//! Starts the product store and the seller screen, wires them to the identity provider
//! and the host UI, and shuts everything down in order.
//!
//! ```rust,ignore
//! let market = Marketplace::new(ScreenConfig::from_env()?, surface);
//! market.identity.sign_in(Identity::new("seller_a"));
//! market.screen.toggle_status(id).await?;
//! market.shutdown().await?;
//! ```
//!
//! Shutdown follows the channel-closing pattern used by every actor here: dropping the
//! last sender ends the receiving loop. The screen goes first because it holds a store
//! client of its own.

pub mod marketplace;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use marketplace::Marketplace;
