//! `bistro-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, ensure_fraction, ensure_non_negative};
pub use id::{ConsumptionId, IngredientId, InventoryItemId, MenuItemId, OrderId};
pub use value_object::ValueObject;
