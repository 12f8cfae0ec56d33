//! Typed handles for the actors. Callers never touch raw channels.

pub mod cart_client;
pub mod catalog_client;

pub use cart_client::*;
pub use catalog_client::*;
