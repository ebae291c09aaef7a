//! Batch planning across a whole pantry.
//!
//! Each ingredient is computed independently: one bad record must not hide
//! recommendations for the rest.

use std::collections::HashMap;

use serde::Serialize;

use bistro_core::IngredientId;

use crate::consumption::{ConsumptionWindow, IngredientConsumption};
use crate::ingredient::Ingredient;
use crate::item::{InventoryItem, low_stock_items};

use super::calculator::ReplenishmentCalculator;
use super::result::EOQResult;

/// Why one ingredient has no recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanFailure {
    pub ingredient_id: IngredientId,
    pub error: String,
}

/// Outcome of planning every ingredient in a snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplenishmentPlan {
    results: Vec<EOQResult>,
    failures: Vec<PlanFailure>,
    low_stock: Vec<InventoryItem>,
}

impl ReplenishmentPlan {
    /// Recommendations, in the order ingredients were supplied.
    pub fn results(&self) -> &[EOQResult] {
        &self.results
    }

    pub fn failures(&self) -> &[PlanFailure] {
        &self.failures
    }

    /// Items at or below their threshold.
    pub fn low_stock(&self) -> &[InventoryItem] {
        &self.low_stock
    }

    /// Recommendations whose stock has reached the reorder point, soonest depletion first.
    pub fn needs_reorder(&self) -> Vec<&EOQResult> {
        let mut due: Vec<&EOQResult> = self.results.iter().filter(|r| r.needs_reorder()).collect();
        due.sort_by(|a, b| {
            let da = a.days_until_depletion().unwrap_or(f64::MAX);
            let db = b.days_until_depletion().unwrap_or(f64::MAX);
            da.total_cmp(&db)
        });
        due
    }

    pub fn result_for(&self, ingredient_id: IngredientId) -> Option<&EOQResult> {
        self.results.iter().find(|r| r.ingredient_id == ingredient_id)
    }
}

/// Runs a [`ReplenishmentCalculator`] over a snapshot of ingredients, history and stock.
#[derive(Debug, Clone, Default)]
pub struct ReplenishmentPlanner {
    calculator: ReplenishmentCalculator,
    window: Option<ConsumptionWindow>,
}

impl ReplenishmentPlanner {
    pub fn new(calculator: ReplenishmentCalculator) -> Self {
        Self {
            calculator,
            window: None,
        }
    }

    /// Average usage over every day of `window` instead of only the days with records.
    pub fn with_window(mut self, window: ConsumptionWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn window(&self) -> Option<&ConsumptionWindow> {
        self.window.as_ref()
    }

    pub fn calculator(&self) -> &ReplenishmentCalculator {
        &self.calculator
    }

    /// Ingredients without an inventory row are planned from zero stock.
    pub fn plan(
        &self,
        ingredients: &[Ingredient],
        history: &[IngredientConsumption],
        items: &[InventoryItem],
    ) -> ReplenishmentPlan {
        let stock: HashMap<IngredientId, &InventoryItem> =
            items.iter().map(|i| (i.ingredient_id, i)).collect();

        let mut plan = ReplenishmentPlan::default();

        for ingredient in ingredients {
            let calc = &self.calculator;
            let outcome = match (stock.get(&ingredient.id), self.window.as_ref()) {
                (Some(item), Some(window)) => {
                    calc.compute_for_item_in(window, ingredient, history, item)
                }
                (Some(item), None) => calc.compute_for_item(ingredient, history, item),
                (None, Some(window)) => calc.compute_eoq_in(window, ingredient, history, 0.0),
                (None, None) => calc.compute_eoq(ingredient, history, 0.0),
            };

            match outcome {
                Ok(result) => plan.results.push(result),
                Err(err) => {
                    tracing::warn!(
                        ingredient_id = %ingredient.id,
                        ingredient = %ingredient.name,
                        "skipping replenishment for ingredient: {err}"
                    );
                    plan.failures.push(PlanFailure {
                        ingredient_id: ingredient.id,
                        error: err.to_string(),
                    });
                }
            }
        }

        plan.low_stock = low_stock_items(items).into_iter().cloned().collect();

        tracing::info!(
            planned = plan.results.len(),
            failed = plan.failures.len(),
            low_stock = plan.low_stock.len(),
            "replenishment plan computed"
        );

        plan
    }
}
