//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that reads its
//! filter from `RUST_LOG` and hides module paths (`with_target(false)`).
//!
//! ```bash
//! # Lifecycle, loads and mutations (default)
//! RUST_LOG=info cargo run
//!
//! # Request payloads, stale fetches, confirmation prompts
//! RUST_LOG=debug cargo run
//!
//! # Only the screen
//! RUST_LOG=seller_catalog::screen=debug cargo run
//! ```
//!
//! Every remote call the screen makes runs in its own span, so client logs nest under
//! it. With `RUST_LOG=debug`:
//!
//! ```text
//! INFO Signed in uid=seller_a
//! INFO Loading products owner=seller_a token=1
//! DEBUG load_products:list_for_owner: Sending request owner=UserId("seller_a")
//! DEBUG Query entity_type="ProductRecord" filter=OwnedBy(UserId("seller_a")) count=2
//! INFO Products loaded owner=seller_a count=2
//! INFO Updated entity_type="ProductRecord" id=product_1
//! INFO Status changed id=product_1 status=Inactive
//! ```
//!
//! Warnings carry the failed record's id and an `error` field; each one pairs with a
//! single error toast on the notification surface.

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
