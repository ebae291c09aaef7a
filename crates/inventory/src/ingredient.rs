use serde::{Deserialize, Serialize};

use bistro_core::{DomainResult, Entity, IngredientId, ensure_fraction, ensure_non_negative};

/// Ingredient snapshot with the cost and supplier parameters used for reordering.
///
/// The logistics fields are optional because most kitchens never fill them in;
/// the replenishment config supplies defaults for whatever is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    /// Unit of measure (kg, l, pcs, ...).
    pub unit: String,
    /// Purchase cost per unit.
    pub cost: f64,
    /// Days between placing a supplier order and receiving it.
    #[serde(default)]
    pub lead_time_days: Option<f64>,
    /// Fixed cost of placing one purchase order.
    #[serde(default)]
    pub order_cost: Option<f64>,
    /// Annual carrying cost as a fraction of unit value.
    #[serde(default)]
    pub holding_cost_percent: Option<f64>,
}

impl Ingredient {
    pub fn new(
        id: IngredientId,
        name: impl Into<String>,
        unit: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit: unit.into(),
            cost,
            lead_time_days: None,
            order_cost: None,
            holding_cost_percent: None,
        }
    }

    pub fn with_lead_time_days(mut self, days: f64) -> Self {
        self.lead_time_days = Some(days);
        self
    }

    pub fn with_order_cost(mut self, order_cost: f64) -> Self {
        self.order_cost = Some(order_cost);
        self
    }

    pub fn with_holding_cost_percent(mut self, percent: f64) -> Self {
        self.holding_cost_percent = Some(percent);
        self
    }

    /// Check the magnitudes the EOQ model relies on.
    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("ingredient cost", self.cost)?;
        if let Some(days) = self.lead_time_days {
            ensure_non_negative("lead_time_days", days)?;
        }
        if let Some(order_cost) = self.order_cost {
            ensure_non_negative("order_cost", order_cost)?;
        }
        if let Some(percent) = self.holding_cost_percent {
            ensure_fraction("holding_cost_percent", percent)?;
        }
        Ok(())
    }
}

impl Entity for Ingredient {
    type Id = IngredientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::DomainError;

    fn flour() -> Ingredient {
        Ingredient::new(IngredientId::new(), "Farina 00", "kg", 0.9)
    }

    #[test]
    fn bare_ingredient_is_valid() {
        assert!(flour().validate().is_ok());
    }

    #[test]
    fn identity_survives_price_changes() {
        let before = flour();
        let mut after = before.clone();
        after.cost = 1.1;
        assert_eq!(Entity::id(&before), Entity::id(&after));
        assert_ne!(before, after);
    }

    #[test]
    fn zero_cost_is_allowed() {
        let mut ing = flour();
        ing.cost = 0.0;
        assert!(ing.validate().is_ok());
    }

    #[test]
    fn negative_cost_is_rejected() {
        let mut ing = flour();
        ing.cost = -0.5;
        assert!(matches!(ing.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn holding_percent_must_be_a_fraction() {
        assert!(flour().with_holding_cost_percent(0.25).validate().is_ok());
        assert!(flour().with_holding_cost_percent(25.0).validate().is_err());
    }

    #[test]
    fn negative_logistics_fields_are_rejected() {
        assert!(flour().with_lead_time_days(-1.0).validate().is_err());
        assert!(flour().with_order_cost(-10.0).validate().is_err());
    }

    #[test]
    fn optional_fields_default_when_absent_in_json() {
        let id = IngredientId::new();
        let json = format!(r#"{{"id":"{id}","name":"Basilico","unit":"g","cost":0.02}}"#);
        let ing: Ingredient = serde_json::from_str(&json).unwrap();
        assert_eq!(ing.lead_time_days, None);
        assert_eq!(ing.order_cost, None);
        assert_eq!(ing.holding_cost_percent, None);
    }
}
