use bistro_core::{DomainError, DomainResult, ensure_non_negative};

use crate::consumption::{ConsumptionWindow, IngredientConsumption, daily_totals};
use crate::ingredient::Ingredient;
use crate::item::InventoryItem;

use super::config::ReplenishmentConfig;
use super::result::EOQResult;
use super::stats;

/// Classic EOQ with a lead-time safety buffer.
///
/// Model:
/// - Sum history per calendar day. With a [`ConsumptionWindow`] every day of the
///   window counts (days without records are zero usage); without one, only the
///   days present in the history count.
/// - `annual_demand = avg_daily * days_per_year`.
/// - `eoq = sqrt(2 * D * S / (c * h))`, zero whenever that is not finite.
/// - `safety_stock = z(service_level) * sd_daily * sqrt(lead_time)`.
/// - `reorder_point = avg_daily * lead_time + safety_stock`.
///
/// Stateless apart from its config; share one instance freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ReplenishmentCalculator {
    config: ReplenishmentConfig,
}

impl ReplenishmentCalculator {
    pub fn new(config: ReplenishmentConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReplenishmentConfig {
        &self.config
    }

    /// Reorder recommendation for `ingredient` given its usage history and stock on hand.
    ///
    /// With no usage for this ingredient the result is all zeros with a reorder
    /// point of zero; use [`compute_for_item`](Self::compute_for_item) to fall
    /// back to the item's threshold instead.
    pub fn compute_eoq(
        &self,
        ingredient: &Ingredient,
        history: &[IngredientConsumption],
        current_stock: f64,
    ) -> DomainResult<EOQResult> {
        self.compute(ingredient, history, None, current_stock, 0.0)
    }

    /// Like [`compute_eoq`](Self::compute_eoq), averaging over every day of `window`.
    ///
    /// Records outside the window are ignored; days inside it without records
    /// count as zero usage.
    pub fn compute_eoq_in(
        &self,
        window: &ConsumptionWindow,
        ingredient: &Ingredient,
        history: &[IngredientConsumption],
        current_stock: f64,
    ) -> DomainResult<EOQResult> {
        self.compute(ingredient, history, Some(window), current_stock, 0.0)
    }

    /// Like [`compute_eoq`](Self::compute_eoq), reading stock and threshold from `item`.
    pub fn compute_for_item(
        &self,
        ingredient: &Ingredient,
        history: &[IngredientConsumption],
        item: &InventoryItem,
    ) -> DomainResult<EOQResult> {
        self.compute_item(ingredient, history, None, item)
    }

    /// [`compute_for_item`](Self::compute_for_item) over a fixed window.
    pub fn compute_for_item_in(
        &self,
        window: &ConsumptionWindow,
        ingredient: &Ingredient,
        history: &[IngredientConsumption],
        item: &InventoryItem,
    ) -> DomainResult<EOQResult> {
        self.compute_item(ingredient, history, Some(window), item)
    }

    pub fn is_low_stock(&self, item: &InventoryItem) -> bool {
        item.is_low_stock()
    }

    fn compute_item(
        &self,
        ingredient: &Ingredient,
        history: &[IngredientConsumption],
        window: Option<&ConsumptionWindow>,
        item: &InventoryItem,
    ) -> DomainResult<EOQResult> {
        if item.ingredient_id != ingredient.id {
            return Err(DomainError::invariant(format!(
                "inventory item {} belongs to ingredient {}, not {}",
                item.id, item.ingredient_id, ingredient.id
            )));
        }
        item.validate()?;
        self.compute(ingredient, history, window, item.quantity, item.threshold)
    }

    fn compute(
        &self,
        ingredient: &Ingredient,
        history: &[IngredientConsumption],
        window: Option<&ConsumptionWindow>,
        current_stock: f64,
        fallback_reorder_point: f64,
    ) -> DomainResult<EOQResult> {
        ingredient.validate()?;
        ensure_non_negative("current stock", current_stock)?;

        let lead_time_days = ingredient
            .lead_time_days
            .unwrap_or(self.config.default_lead_time_days);
        let order_cost = ingredient
            .order_cost
            .unwrap_or(self.config.default_order_cost);
        let holding_cost_percent = ingredient
            .holding_cost_percent
            .unwrap_or(self.config.default_holding_cost_percent);

        let daily = daily_usage(ingredient, history, window)?;
        if daily.is_empty() {
            tracing::debug!(
                ingredient_id = %ingredient.id,
                "no consumption history; returning empty recommendation"
            );
            return Ok(EOQResult::no_data(
                ingredient.id,
                current_stock,
                fallback_reorder_point,
                lead_time_days,
            ));
        }

        let avg_daily_consumption = stats::mean(&daily);
        let daily_stddev = stats::stddev_sample(&daily, avg_daily_consumption);
        let annual_demand = avg_daily_consumption * self.config.days_per_year;

        let eoq = economic_order_quantity(
            annual_demand,
            order_cost,
            ingredient.cost,
            holding_cost_percent,
        );

        let safety_stock =
            stats::safety_stock(daily_stddev, lead_time_days, self.config.service_level);
        let reorder_point = avg_daily_consumption * lead_time_days + safety_stock;

        // A vanishingly small rate can still overflow the quotient.
        let days_until_reorder = if avg_daily_consumption > 0.0 {
            Some(((current_stock - reorder_point) / avg_daily_consumption).max(0.0))
                .filter(|d| d.is_finite())
        } else {
            None
        };

        let order_frequency = if eoq > 0.0 { annual_demand / eoq } else { 0.0 };
        let total_annual_cost =
            order_frequency * order_cost + (eoq / 2.0) * ingredient.cost * holding_cost_percent;

        tracing::debug!(
            ingredient_id = %ingredient.id,
            avg_daily_consumption,
            eoq,
            reorder_point,
            safety_stock,
            "computed replenishment parameters"
        );

        Ok(EOQResult {
            ingredient_id: ingredient.id,
            current_stock,
            avg_daily_consumption,
            eoq,
            reorder_point,
            safety_stock,
            days_until_reorder,
            annual_demand,
            order_frequency,
            total_annual_cost,
            lead_time_days,
            below_reorder_point: current_stock <= reorder_point,
        })
    }
}

/// Per-day usage series for `ingredient`; empty when there is nothing to forecast from.
///
/// Every record of the ingredient is validated first, since records loaded by the
/// data layer never went through [`IngredientConsumption::new`].
fn daily_usage(
    ingredient: &Ingredient,
    history: &[IngredientConsumption],
    window: Option<&ConsumptionWindow>,
) -> DomainResult<Vec<f64>> {
    for record in history.iter().filter(|r| r.ingredient_id() == ingredient.id) {
        record.validate()?;
    }

    let totals = daily_totals(history, ingredient.id);
    let Some(window) = window else {
        return Ok(totals.into_values().collect());
    };

    if !totals.keys().any(|date| window.contains(*date)) {
        return Ok(Vec::new());
    }
    Ok(window
        .days()
        .map(|date| totals.get(&date).copied().unwrap_or(0.0))
        .collect())
}

/// `sqrt(2DS / (c h))`; zero when the denominator or the result is degenerate.
pub fn economic_order_quantity(
    annual_demand: f64,
    order_cost: f64,
    unit_cost: f64,
    holding_cost_percent: f64,
) -> f64 {
    let denominator = unit_cost * holding_cost_percent;
    if !(denominator.is_finite() && denominator > 0.0) {
        return 0.0;
    }
    let eoq = (2.0 * annual_demand * order_cost / denominator).sqrt();
    if eoq.is_finite() { eoq } else { 0.0 }
}
