//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Ingredients, inventory rows and consumption records are entities: two
/// snapshots with the same id describe the same thing, even if quantities differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
