//! Value object trait: equality by value, not identity.
//!
//! `Money`, `Quantity` and product codes are value objects: two amounts of
//! `40.50` are interchangeable, whereas two carts with the same lines are still
//! different carts.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (`line.quantity + extra`, `total - subtotal`).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ProductCode(String);
///
/// impl ValueObject for ProductCode {}
///
/// assert_eq!(ProductCode("BIG".into()), ProductCode("BIG".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
