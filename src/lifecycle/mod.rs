//! Orchestration: spawning, wiring and stopping the actors.

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use self::tracing::setup_tracing;
