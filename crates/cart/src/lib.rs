//! Shopping cart domain module.
//!
//! Lines keyed by product code plus a running total that every mutation keeps
//! in step with the lines (no console I/O here; rendering returns strings).

pub mod cart;
pub mod render;

pub use cart::{Cart, CartLine, CartSnapshot};
