#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Seller Catalog
//!
//! > **The "My Products" screen of a marketplace seller dashboard, built from actors.**
//!
//! A signed-in seller sees the products they own, flips each one between Active and
//! Inactive, deletes products after confirming, and copies a product or checkout link
//! to the clipboard.
//!
//! ## 🏗️ Design
//!
//! Two actors run side by side, each in its own Tokio task:
//!
//! - **The product store** is a generic [`ResourceActor`](framework::ResourceActor) of
//!   [`ProductRecord`](model::ProductRecord)s. It answers create, get, query, update,
//!   delete and moderation requests one at a time.
//! - **The product screen** ([`ProductScreen`](screen::ProductScreen)) owns the list
//!   the seller sees. It reloads on every identity change and patches its list only
//!   after the store confirmed a change.
//!
//! Nothing is shared between them except channels, so neither needs a lock.
//!
//! ### Stale loads
//! Each identity change bumps a fetch token. A load that finishes after the seller
//! switched accounts (or signed out) carries an old token and is dropped.
//!
//! ### Error handling
//! Each layer has its own `thiserror` enum: [`FrameworkError`](framework::FrameworkError)
//! for channel plumbing, [`ProductError`](product_actor::ProductError) for the store,
//! [`ScreenError`](screen::ScreenError) for screen commands. Every failed screen
//! action logs a warning and shows exactly one error toast; nothing is retried.
//!
//! ### Observability
//! `tracing` everywhere, with a span per remote call. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, and the mocks used to test code that talks to it.
//!
//! ### 2. The Store ([`model`], [`product_actor`], [`clients`])
//! The product record, its validation rules, and [`ProductClient`](clients::ProductClient),
//! the typed API over the store.
//!
//! ### 3. The Screen ([`screen`], [`identity`], [`surface`], [`links`])
//! The screen actor and its handle, the identity provider it follows, the UI
//! collaborators it reports to (toasts, clipboard, confirmation), and share links.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`Marketplace`](lifecycle::Marketplace) starts and stops everything;
//! [`ScreenConfig`](config::ScreenConfig) reads settings from the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Link origin and copy-confirmation window come from the environment or .env
//! SELLER_ORIGIN=https://shop.example COPY_FEEDBACK_MS=1000 cargo run
//!
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod identity;
pub mod lifecycle;
pub mod links;
pub mod model;
pub mod product_actor;
pub mod screen;
pub mod surface;
