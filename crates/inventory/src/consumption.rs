use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use bistro_core::{
    ConsumptionId, DomainError, DomainResult, Entity, IngredientId, OrderId, ensure_non_negative,
};

/// A dated quantity of one ingredient used in the kitchen.
///
/// Records are immutable once created: there are no setters, only accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientConsumption {
    id: ConsumptionId,
    ingredient_id: IngredientId,
    date: NaiveDate,
    quantity_used: f64,
    #[serde(default)]
    order_id: Option<OrderId>,
}

impl IngredientConsumption {
    pub fn new(
        ingredient_id: IngredientId,
        date: NaiveDate,
        quantity_used: f64,
    ) -> DomainResult<Self> {
        let record = Self {
            id: ConsumptionId::new(),
            ingredient_id,
            date,
            quantity_used,
            order_id: None,
        };
        record.validate()?;
        Ok(record)
    }

    /// Usage must be a finite, non-negative quantity.
    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("quantity_used", self.quantity_used)
    }

    /// Tie the record to the order that caused it.
    pub fn for_order(mut self, order_id: OrderId) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn ingredient_id(&self) -> IngredientId {
        self.ingredient_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn quantity_used(&self) -> f64 {
        self.quantity_used
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }
}

impl Entity for IngredientConsumption {
    type Id = ConsumptionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Sum one ingredient's usage per calendar day.
///
/// Records for other ingredients are skipped, so callers may pass a mixed history.
pub fn daily_totals(
    history: &[IngredientConsumption],
    ingredient_id: IngredientId,
) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();
    for record in history.iter().filter(|r| r.ingredient_id == ingredient_id) {
        *totals.entry(record.date).or_insert(0.0) += record.quantity_used;
    }
    totals
}

/// Inclusive date range used to select the history a forecast is based on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ConsumptionWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> DomainResult<Self> {
        if from > to {
            return Err(DomainError::validation(format!(
                "consumption window starts after it ends ({from} > {to})"
            )));
        }
        Ok(Self { from, to })
    }

    /// The `days` calendar days ending on `as_of` (inclusive).
    pub fn last_days(as_of: NaiveDate, days: u32) -> DomainResult<Self> {
        if days == 0 {
            return Err(DomainError::validation("consumption window needs at least one day"));
        }
        let from = as_of
            .checked_sub_days(Days::new(u64::from(days - 1)))
            .ok_or_else(|| DomainError::validation("consumption window underflows the calendar"))?;
        Ok(Self { from, to: as_of })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn len_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Every calendar day of the window, oldest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take(self.len_days() as usize)
    }

    pub fn filter(&self, history: &[IngredientConsumption]) -> Vec<IngredientConsumption> {
        history.iter().filter(|r| self.contains(r.date)).cloned().collect()
    }
}
