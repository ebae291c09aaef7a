//! Inventory replenishment: EOQ, reorder point, safety stock and low-stock alerts.
//!
//! Everything here is a pure function of its inputs (no IO, no shared state).

pub mod calculator;
pub mod config;
pub mod planner;
pub mod result;
pub mod stats;

pub use calculator::{ReplenishmentCalculator, economic_order_quantity};
pub use config::ReplenishmentConfig;
pub use planner::{PlanFailure, ReplenishmentPlan, ReplenishmentPlanner};
pub use result::EOQResult;
