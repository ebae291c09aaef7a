//! Recipes link menu items to the ingredients one portion uses.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bistro_core::{
    DomainError, DomainResult, IngredientId, MenuItemId, OrderId, ensure_non_negative,
};

use crate::consumption::IngredientConsumption;
use crate::ingredient::Ingredient;

/// Quantity of one ingredient needed for a single portion of a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub menu_item_id: MenuItemId,
    pub ingredient_id: IngredientId,
    pub quantity: f64,
}

impl RecipeLine {
    pub fn new(menu_item_id: MenuItemId, ingredient_id: IngredientId, quantity: f64) -> Self {
        Self {
            menu_item_id,
            ingredient_id,
            quantity,
        }
    }
}

/// Ingredient cost of one portion of `menu_item_id`.
///
/// Lines whose ingredient is not in `ingredients` contribute nothing.
pub fn recipe_cost(
    menu_item_id: MenuItemId,
    lines: &[RecipeLine],
    ingredients: &[Ingredient],
) -> f64 {
    lines
        .iter()
        .filter(|l| l.menu_item_id == menu_item_id)
        .map(|l| {
            ingredients
                .iter()
                .find(|i| i.id == l.ingredient_id)
                .map_or(0.0, |i| i.cost * l.quantity)
        })
        .sum()
}

/// Explode sold portions through the recipes into consumption records.
///
/// Produces one record per ingredient (quantities summed over all dishes sold),
/// ordered by ingredient id. Dishes without a recipe consume nothing.
pub fn consumption_for_sale(
    order_id: OrderId,
    date: NaiveDate,
    sold: &[(MenuItemId, f64)],
    lines: &[RecipeLine],
) -> DomainResult<Vec<IngredientConsumption>> {
    let mut per_ingredient: BTreeMap<IngredientId, f64> = BTreeMap::new();

    for &(menu_item_id, portions) in sold {
        ensure_non_negative("portions sold", portions)?;
        for line in lines.iter().filter(|l| l.menu_item_id == menu_item_id) {
            if !(line.quantity.is_finite() && line.quantity >= 0.0) {
                return Err(DomainError::validation(format!(
                    "recipe line for ingredient {} has invalid quantity {}",
                    line.ingredient_id, line.quantity
                )));
            }
            *per_ingredient.entry(line.ingredient_id).or_insert(0.0) += line.quantity * portions;
        }
    }

    per_ingredient
        .into_iter()
        .filter(|(_, qty)| *qty > 0.0)
        .map(|(ingredient_id, qty)| {
            IngredientConsumption::new(ingredient_id, date, qty).map(|r| r.for_order(order_id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn recipe_cost_sums_lines_of_the_dish_only() {
        let margherita = MenuItemId::new();
        let marinara = MenuItemId::new();
        let mozzarella = Ingredient::new(IngredientId::new(), "Mozzarella", "kg", 8.0);
        let tomato = Ingredient::new(IngredientId::new(), "Pomodoro", "kg", 2.0);

        let lines = vec![
            RecipeLine::new(margherita, mozzarella.id, 0.125),
            RecipeLine::new(margherita, tomato.id, 0.1),
            RecipeLine::new(marinara, tomato.id, 0.15),
        ];
        let ingredients = vec![mozzarella, tomato];

        let cost = recipe_cost(margherita, &lines, &ingredients);
        assert!((cost - 1.2).abs() < 1e-9);
    }

    #[test]
    fn recipe_cost_ignores_unknown_ingredients() {
        let dish = MenuItemId::new();
        let lines = vec![RecipeLine::new(dish, IngredientId::new(), 3.0)];
        assert_eq!(recipe_cost(dish, &lines, &[]), 0.0);
    }

    #[test]
    fn sale_explodes_into_one_record_per_ingredient() {
        let margherita = MenuItemId::new();
        let marinara = MenuItemId::new();
        let mozzarella = IngredientId::new();
        let tomato = IngredientId::new();
        let lines = vec![
            RecipeLine::new(margherita, mozzarella, 0.125),
            RecipeLine::new(margherita, tomato, 0.1),
            RecipeLine::new(marinara, tomato, 0.15),
        ];
        let order = OrderId::new();

        let records =
            consumption_for_sale(order, today(), &[(margherita, 2.0), (marinara, 1.0)], &lines)
                .unwrap();

        assert_eq!(records.len(), 2);
        let tomato_used = records
            .iter()
            .find(|r| r.ingredient_id() == tomato)
            .unwrap()
            .quantity_used();
        assert!((tomato_used - 0.35).abs() < 1e-9);
        assert!(records.iter().all(|r| r.order_id() == Some(order)));
        assert!(records.iter().all(|r| r.date() == today()));
    }

    #[test]
    fn dish_without_recipe_consumes_nothing() {
        let sold = [(MenuItemId::new(), 4.0)];
        let records = consumption_for_sale(OrderId::new(), today(), &sold, &[]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn negative_portions_are_rejected() {
        let dish = MenuItemId::new();
        let lines = vec![RecipeLine::new(dish, IngredientId::new(), 1.0)];
        let err =
            consumption_for_sale(OrderId::new(), today(), &[(dish, -1.0)], &lines).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
