#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Cart Store
//!
//! > **A stock-aware shopping cart, hosted in an actor.**
//!
//! The cart is the single source of truth for what a shopper intends to buy.
//! Every change is checked against live stock, written to durable storage,
//! and only then published to the UI. A change that fails leaves nothing
//! behind except one user-facing notification.
//!
//! ## 🏗️ Design
//!
//! ### One owner, one writer
//! The committed cart lives inside [`CartStore`](cart_actor::CartStore), which
//! runs in its own Tokio task. Requests arrive over an `mpsc` channel and are
//! applied one after another, so two components adding the same product at
//! once can never both pass the stock check against the same stale quantity.
//!
//! ### Immutable snapshots
//! Each mutation builds a new [`Cart`](model::Cart). The value written to
//! storage is the value published, and a published `Arc<Cart>` never changes.
//! Observers get snapshots through a `watch` channel.
//!
//! ### Capabilities as traits
//! Stock lookup, product lookup, storage and notification are traits in
//! [`services`]. The cart receives them through a
//! [`CartContext`](cart_actor::CartContext) when its task starts.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Key items**: [`Cart`](model::Cart), [`CartEntry`](model::CartEntry), [`ProductId`](model::ProductId).
//!
//! ### 2. The Cart ([`cart_actor`])
//! - **Role**: Validation, persistence and publication of every change.
//! - **Key items**: [`CartStore`](cart_actor::CartStore), [`CartError`](cart_actor::CartError).
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: Typed handles over the request channels.
//! - **Key items**: [`CartClient`](clients::CartClient), [`CatalogClient`](clients::CatalogClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Spawns the catalog and cart actors, wires them together, shuts them down.
//! - **Key items**: [`CartSystem`](lifecycle::CartSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 5. The Edges ([`services`], [`catalog_actor`], [`config`])
//! - Storage backends ([`MemoryStore`](services::MemoryStore), [`FileStore`](services::FileStore)),
//!   notifiers, an in-process catalog, and `figment`-based configuration.
//!
//! ## 🧪 Testing
//! [`mock`] provides a scripted [`MockLookup`](mock::MockLookup) and a
//! [`RecordingNotifier`](mock::RecordingNotifier).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! CART_DATA_DIR=/tmp/carts RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod services;
