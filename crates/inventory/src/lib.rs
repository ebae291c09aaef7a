//! Kitchen inventory domain.
//!
//! Ingredient, stock and consumption snapshots plus the replenishment engine
//! that turns them into reorder recommendations. Pure domain logic: callers
//! load the snapshots and decide what to do with the results.

pub mod consumption;
pub mod ingredient;
pub mod item;
pub mod recipe;
pub mod replenishment;

pub use consumption::{ConsumptionWindow, IngredientConsumption, daily_totals};
pub use ingredient::Ingredient;
pub use item::{InventoryItem, low_stock_items};
pub use recipe::{RecipeLine, consumption_for_sale, recipe_cost};
pub use replenishment::{
    EOQResult, PlanFailure, ReplenishmentCalculator, ReplenishmentConfig, ReplenishmentPlan,
    ReplenishmentPlanner,
};
