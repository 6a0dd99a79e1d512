//! Orders domain module.
//!
//! Checkout turns the active cart into an immutable [`Order`] and appends it
//! to the session's [`OrderHistory`].

pub mod history;
pub mod order;

pub use history::OrderHistory;
pub use order::Order;
