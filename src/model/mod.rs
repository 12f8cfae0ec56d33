//! Plain data types shared by the cart and its collaborators.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
