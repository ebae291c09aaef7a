//! Value object trait: equality by value, not identity.
//!
//! Computation outputs such as a reorder recommendation have no identity of
//! their own; they are recomputed from inputs on every call and compared by value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// compute a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (an `EOQResult` for the same inputs is the same result)
/// - **Entity**: has identity (an `Ingredient` keeps its id while its cost changes)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
