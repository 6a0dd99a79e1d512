//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A cart keeps its id while lines come and go; an order is identified by its
/// number regardless of what it contains.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
