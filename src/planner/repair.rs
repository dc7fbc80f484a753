use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{MealItem, NutritionGoal};
use crate::planner::constants::{
    OVERSHOOT_TRIGGER, PROTEIN_SHORTFALL_TRIGGER, REPLACEMENT_SAMPLES_PER_GROUP,
};
use crate::planner::groups::{FoodGroup, FoodGroups};
use crate::planner::score::{evaluate_meal, meal_totals};
use crate::planner::servings::optimize_servings;

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Pick the index of the item to swap out.
///
/// Over calorie budget: the heaviest item. Under a protein target: the
/// leanest. Otherwise a uniformly random pick.
fn removal_index<R: Rng>(
    items: &[MealItem],
    target_calories: f64,
    target_protein: Option<f64>,
    rng: &mut R,
) -> usize {
    let (total_cals, total_protein, _, _) = meal_totals(items);

    if total_cals > target_calories * OVERSHOOT_TRIGGER {
        items
            .iter()
            .enumerate()
            .max_by(|a, b| cmp_f64(a.1.calories, b.1.calories))
            .map(|(i, _)| i)
            .unwrap_or(0)
    } else if let Some(tp) = target_protein.filter(|p| *p > 0.0) {
        if total_protein < tp * PROTEIN_SHORTFALL_TRIGGER {
            items
                .iter()
                .enumerate()
                .min_by(|a, b| cmp_f64(a.1.protein, b.1.protein))
                .map(|(i, _)| i)
                .unwrap_or(0)
        } else {
            rng.gen_range(0..items.len())
        }
    } else {
        rng.gen_range(0..items.len())
    }
}

/// One local-search improvement step on a meal.
///
/// Removes the worst item, trials randomly drawn replacements from every
/// food group (re-optimizing servings per trial), and commits the best swap
/// only when it beats the original meal's score. Returns the original meal
/// unchanged otherwise.
pub fn smart_repair<R: Rng>(
    items: &[MealItem],
    groups: &FoodGroups,
    target_calories: f64,
    goal: &NutritionGoal,
    target_protein: Option<f64>,
    rng: &mut R,
) -> Vec<MealItem> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut remaining = items.to_vec();
    remaining.remove(removal_index(items, target_calories, target_protein, rng));

    let mut best_replacement: Option<&MealItem> = None;
    let mut best_trial_score = f64::NEG_INFINITY;

    for group in FoodGroup::ALL {
        let pool = groups.get(group);
        let draws = REPLACEMENT_SAMPLES_PER_GROUP.min(pool.len());

        for candidate in pool.choose_multiple(rng, draws) {
            if remaining.iter().any(|i| i.name == candidate.name) {
                continue;
            }

            let mut trial = remaining.clone();
            trial.push(candidate.clone());
            let trial = optimize_servings(&trial, target_calories);

            let score = evaluate_meal(&trial, target_calories, goal, target_protein);
            if score > best_trial_score {
                best_trial_score = score;
                best_replacement = Some(candidate);
            }
        }
    }

    let original_score = evaluate_meal(items, target_calories, goal, target_protein);
    match best_replacement {
        Some(replacement) if best_trial_score > original_score => {
            remaining.push(replacement.clone());
            optimize_servings(&remaining, target_calories)
        }
        _ => items.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::goal_by_name;
    use crate::planner::groups::categorize_items;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(category: &str, name: &str, cal: f64, p: f64) -> MealItem {
        MealItem {
            name: name.to_string(),
            category: category.to_string(),
            servings: 1.0,
            calories: cal,
            protein: p,
            fat: cal / 30.0,
            carbs: cal / 10.0,
            fiber: 1.0,
        }
    }

    fn sample_groups() -> FoodGroups {
        categorize_items(&[
            item("Entrees", "Grilled Tofu", 180.0, 20.0),
            item("Entrees", "Bean Stew", 220.0, 14.0),
            item("Grains", "Brown Rice", 215.0, 5.0),
            item("Vegetables", "Steamed Broccoli", 55.0, 4.0),
            item("Sides", "Garden Salad", 25.0, 1.0),
            item("Desserts", "Fruit Cup", 90.0, 1.0),
        ])
    }

    #[test]
    fn test_removal_targets_heaviest_when_over_budget() {
        let meal = vec![
            item("Entrees", "Light", 100.0, 10.0),
            item("Entrees", "Heavy", 900.0, 10.0),
        ];
        let mut rng = StdRng::seed_from_u64(1);

        // 1000 total against a 600 target is past the overshoot trigger.
        let idx = removal_index(&meal, 600.0, None, &mut rng);
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_removal_targets_leanest_under_protein_shortfall() {
        let meal = vec![
            item("Entrees", "Lean", 200.0, 2.0),
            item("Entrees", "Rich", 200.0, 30.0),
        ];
        let mut rng = StdRng::seed_from_u64(2);

        let idx = removal_index(&meal, 600.0, Some(60.0), &mut rng);
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_repair_never_lowers_score() {
        let groups = sample_groups();
        let goal = goal_by_name("balanced");
        let mut rng = StdRng::seed_from_u64(3);

        let mut current = optimize_servings(
            &[item("Desserts", "Fruit Cup", 90.0, 1.0), item("Sides", "Garden Salad", 25.0, 1.0)],
            600.0,
        );
        let mut last_score = evaluate_meal(&current, 600.0, goal, None);

        for _ in 0..25 {
            let repaired = smart_repair(&current, &groups, 600.0, goal, None, &mut rng);
            let score = evaluate_meal(&repaired, 600.0, goal, None);
            assert!(
                score >= last_score - 1e-9,
                "repair regressed: {} -> {}",
                last_score,
                score
            );
            current = repaired;
            last_score = score;
        }
    }

    #[test]
    fn test_repair_keeps_names_unique() {
        let groups = sample_groups();
        let goal = goal_by_name("balanced");
        let mut rng = StdRng::seed_from_u64(4);

        let mut current = optimize_servings(
            &[
                item("Entrees", "Grilled Tofu", 180.0, 20.0),
                item("Sides", "Garden Salad", 25.0, 1.0),
            ],
            600.0,
        );

        for _ in 0..25 {
            current = smart_repair(&current, &groups, 600.0, goal, None, &mut rng);
            for (i, a) in current.iter().enumerate() {
                for b in &current[i + 1..] {
                    assert_ne!(a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn test_empty_meal_is_a_noop() {
        let groups = sample_groups();
        let goal = goal_by_name("balanced");
        let mut rng = StdRng::seed_from_u64(5);

        assert!(smart_repair(&[], &groups, 600.0, goal, None, &mut rng).is_empty());
    }
}
