//! Actor plumbing shared by the catalog and cart actors.
//!
//! # Main Components
//!
//! - [`Response`] - The one-shot sender carried by every request
//! - [`request`] - Client-side send-and-await helper
//! - [`FrameworkError`] - Channel failures (actor closed, responder dropped)

pub mod core;

// Re-export core types for convenience
pub use self::core::*;
