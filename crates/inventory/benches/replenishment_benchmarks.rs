use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bistro_core::IngredientId;
use bistro_inventory::{
    Ingredient, IngredientConsumption, InventoryItem, ReplenishmentCalculator, ReplenishmentPlanner,
};
use chrono::{Days, NaiveDate};

fn snapshot(
    ingredients: usize,
    days: u64,
) -> (Vec<Ingredient>, Vec<IngredientConsumption>, Vec<InventoryItem>) {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let ingredients: Vec<Ingredient> = (0..ingredients)
        .map(|i| {
            let cost = 1.0 + i as f64 % 7.0;
            Ingredient::new(IngredientId::new(), format!("ingredient-{i}"), "kg", cost)
        })
        .collect();

    let mut history = Vec::with_capacity(ingredients.len() * days as usize);
    for (i, ing) in ingredients.iter().enumerate() {
        for d in 0..days {
            let date = start.checked_add_days(Days::new(d)).unwrap();
            let qty = 1.0 + ((i as u64 * 31 + d * 17) % 11) as f64;
            history.push(IngredientConsumption::new(ing.id, date, qty).unwrap());
        }
    }

    let items = ingredients
        .iter()
        .map(|ing| InventoryItem::new(ing.id, 40.0, 10.0))
        .collect();

    (ingredients, history, items)
}

fn bench_single(c: &mut Criterion) {
    let (ingredients, history, _) = snapshot(1, 90);
    let calc = ReplenishmentCalculator::default();

    c.bench_function("compute_eoq_90_days", |b| {
        b.iter(|| calc.compute_eoq(black_box(&ingredients[0]), black_box(&history), 25.0))
    });
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    let planner = ReplenishmentPlanner::default();

    for n in [10usize, 100, 500] {
        let (ingredients, history, items) = snapshot(n, 30);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| planner.plan(black_box(&ingredients), black_box(&history), black_box(&items)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_plan);
criterion_main!(benches);
