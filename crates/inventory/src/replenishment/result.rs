use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use bistro_core::{IngredientId, ValueObject};

/// Reorder recommendation for one ingredient.
///
/// Recomputed from scratch on every call and never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EOQResult {
    pub ingredient_id: IngredientId,
    pub current_stock: f64,
    pub avg_daily_consumption: f64,
    /// Recommended order quantity.
    pub eoq: f64,
    pub reorder_point: f64,
    pub safety_stock: f64,
    /// Days before stock crosses the reorder point; `0` once it already has.
    /// `None` when there is no consumption to project from.
    pub days_until_reorder: Option<f64>,
    pub annual_demand: f64,
    /// Purchase orders per year implied by `eoq`.
    pub order_frequency: f64,
    /// Ordering plus holding cost at the `eoq` quantity.
    pub total_annual_cost: f64,
    /// Lead time actually used (ingredient value or configured default).
    pub lead_time_days: f64,
    /// Current stock is at or below the reorder point.
    pub below_reorder_point: bool,
}

impl ValueObject for EOQResult {}

impl EOQResult {
    /// Nothing to forecast from: every quantity is zero and no projection is made.
    pub(crate) fn no_data(
        ingredient_id: IngredientId,
        current_stock: f64,
        reorder_point: f64,
        lead_time_days: f64,
    ) -> Self {
        Self {
            ingredient_id,
            current_stock,
            avg_daily_consumption: 0.0,
            eoq: 0.0,
            reorder_point,
            safety_stock: 0.0,
            days_until_reorder: None,
            annual_demand: 0.0,
            order_frequency: 0.0,
            total_annual_cost: 0.0,
            lead_time_days,
            below_reorder_point: current_stock <= reorder_point,
        }
    }

    pub fn has_consumption_data(&self) -> bool {
        self.avg_daily_consumption > 0.0
    }

    /// Stock is at the reorder point and something is actually being used.
    pub fn needs_reorder(&self) -> bool {
        self.has_consumption_data() && self.below_reorder_point
    }

    /// Days of stock left before it runs out entirely.
    pub fn days_until_depletion(&self) -> Option<f64> {
        if !self.has_consumption_data() {
            return None;
        }
        Some(self.current_stock / self.avg_daily_consumption)
    }

    /// Calendar date by which the next purchase order should go out.
    pub fn reorder_date(&self, as_of: NaiveDate) -> Option<NaiveDate> {
        self.days_until_reorder.and_then(|d| add_whole_days(as_of, d))
    }

    /// Calendar date on which stock is projected to hit zero.
    pub fn depletion_date(&self, as_of: NaiveDate) -> Option<NaiveDate> {
        self.days_until_depletion().and_then(|d| add_whole_days(as_of, d))
    }
}

// Partial days round down: the order is due on the day the threshold is crossed.
fn add_whole_days(as_of: NaiveDate, days: f64) -> Option<NaiveDate> {
    if !(days.is_finite() && days >= 0.0) || days > u32::MAX as f64 {
        return None;
    }
    as_of.checked_add_days(Days::new(days.floor() as u64))
}
