//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers here are small sequential integers: a session has exactly one
//! cart, and order numbers are handed out 1, 2, 3, ... by the order history.

use serde::{Deserialize, Serialize};

/// Identifier of a shopping cart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(u32);

/// Sequential, 1-based order number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(u64);

macro_rules! impl_int_newtype {
    ($t:ty, $inner:ty) => {
        impl $t {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$inner> for $t {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $inner {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_int_newtype!(CartId, u32);
impl_int_newtype!(OrderNumber, u64);

impl OrderNumber {
    /// The first number ever assigned in a session.
    pub const FIRST: OrderNumber = OrderNumber(1);

    /// The number that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}
