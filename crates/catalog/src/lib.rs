//! Product catalog.
//!
//! A fixed, read-only list of purchasable items, built once at startup and
//! shared by reference with every cart line that points at it.

pub mod product;

pub use product::{Catalog, CatalogItem, ProductCode};
