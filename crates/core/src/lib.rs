//! `tindahan-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, cart
//! and order crates (no console I/O).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CartId, OrderNumber};
pub use money::{CURRENCY_LABEL, Money, Quantity};
pub use value_object::ValueObject;
