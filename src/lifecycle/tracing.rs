//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden; every actor event carries an
//! `actor` field instead.
//!
//! ## Levels
//!
//! - `info`: actor start and shutdown, catalog listings, and each committed
//!   cart with its `size` and `items`.
//! - `warn`: failed cart operations (with the `error`) and the user
//!   notification they produced.
//! - `debug`: every request as the actor receives it, plus client-side spans
//!   from `#[instrument]`.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=cart_store::cart_actor=debug cargo run
//! ```
//!
//! ## Sample output
//!
//! ```text
//! INFO Cart system started key="@RocketShoes:cart"
//! INFO Actor started actor="Cart" key="@RocketShoes:cart" size=0
//! INFO Cart committed key="@RocketShoes:cart" size=1 items=1
//! WARN Cart operation failed key="@RocketShoes:cart" error=Insufficient stock for product_1: requested 4, available 3
//! WARN User notification notification="Requested quantity is out of stock"
//! ```

/// Installs the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
