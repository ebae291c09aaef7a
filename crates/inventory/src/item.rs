use serde::{Deserialize, Serialize};

use bistro_core::{DomainResult, Entity, IngredientId, InventoryItemId, ensure_non_negative};

/// On-hand stock for one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    /// Stock level at or below which the ingredient is flagged as low.
    pub threshold: f64,
}

impl InventoryItem {
    pub fn new(ingredient_id: IngredientId, quantity: f64, threshold: f64) -> Self {
        Self {
            id: InventoryItemId::new(),
            ingredient_id,
            quantity,
            threshold,
        }
    }

    /// `quantity <= threshold`; equality counts as low.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.threshold
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("stock quantity", self.quantity)?;
        ensure_non_negative("threshold", self.threshold)?;
        Ok(())
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Items currently at or below their threshold, largest shortfall first.
pub fn low_stock_items(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut low: Vec<&InventoryItem> = items.iter().filter(|i| i.is_low_stock()).collect();
    low.sort_by(|a, b| {
        let ra = a.quantity - a.threshold;
        let rb = b.quantity - b.threshold;
        ra.total_cmp(&rb)
    });
    low
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::DomainError;

    fn item(quantity: f64, threshold: f64) -> InventoryItem {
        InventoryItem::new(IngredientId::new(), quantity, threshold)
    }

    #[test]
    fn equal_to_threshold_is_low() {
        assert!(item(10.0, 10.0).is_low_stock());
    }

    #[test]
    fn above_threshold_is_not_low() {
        assert!(!item(10.5, 10.0).is_low_stock());
    }

    #[test]
    fn below_threshold_is_low() {
        assert!(item(0.0, 2.0).is_low_stock());
    }

    #[test]
    fn negative_quantity_fails_validation() {
        assert!(matches!(item(-1.0, 2.0).validate(), Err(DomainError::Validation(_))));
        assert!(item(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn low_stock_items_filters_and_orders_by_shortfall() {
        let items = vec![item(4.0, 5.0), item(50.0, 5.0), item(0.0, 5.0), item(5.0, 5.0)];
        let low = low_stock_items(&items);
        let quantities: Vec<f64> = low.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![0.0, 4.0, 5.0]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: low stock iff quantity <= threshold.
            #[test]
            fn low_stock_matches_comparison(
                quantity in 0.0f64..1_000.0,
                threshold in 0.0f64..1_000.0,
            ) {
                prop_assert_eq!(item(quantity, threshold).is_low_stock(), quantity <= threshold);
                prop_assert!(item(threshold, threshold).is_low_stock());
            }
        }
    }
}
