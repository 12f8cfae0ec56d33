//! Capabilities the cart consumes: catalog lookups, durable storage, and
//! user notifications.
//!
//! Each is a trait so the cart can be wired to the in-process catalog actor,
//! to a real remote service, or to the mocks in [`crate::mock`].

pub mod lookup;
pub mod notifier;
pub mod storage;

pub use lookup::*;
pub use notifier::*;
pub use storage::*;
