use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::MealItem;
use crate::planner::constants::{
    CALORIE_CEILING_FACTOR, CALORIE_FLOOR_FACTOR, MAX_FILL_ATTEMPTS, MAX_MEAL_ITEMS,
};
use crate::planner::groups::{FoodGroup, FoodGroups};

/// Assemble one structurally valid random meal.
///
/// A protein and a vegetable anchor the meal when those groups are
/// non-empty; filler items are then drawn from random groups until the
/// calorie envelope, item cap, or attempt budget is exhausted. All servings
/// start at 1.0. No two items share a name.
pub fn generate_random_meal<R: Rng>(
    groups: &FoodGroups,
    target_calories: f64,
    rng: &mut R,
) -> Vec<MealItem> {
    let mut selected: Vec<MealItem> = Vec::new();
    let mut current_cals = 0.0;

    if let Some(main) = groups.protein.choose(rng) {
        current_cals += main.calories;
        selected.push(main.clone());
    }

    if let Some(veg) = groups.vegetables.choose(rng) {
        // The anchor pick may itself be tagged as a vegetable.
        let duplicate = selected.first().is_some_and(|s| s.name == veg.name);
        if !duplicate {
            current_cals += veg.calories;
            selected.push(veg.clone());
        }
    }

    let mut attempts = 0;
    while selected.len() < MAX_MEAL_ITEMS && attempts < MAX_FILL_ATTEMPTS {
        attempts += 1;

        let group = FoodGroup::ALL[rng.gen_range(0..FoodGroup::ALL.len())];
        let Some(item) = groups.get(group).choose(rng) else {
            continue;
        };

        if selected.iter().any(|s| s.name == item.name) {
            continue;
        }
        if current_cals + item.calories > target_calories * CALORIE_CEILING_FACTOR {
            continue;
        }

        current_cals += item.calories;
        selected.push(item.clone());

        if current_cals >= target_calories * CALORIE_FLOOR_FACTOR {
            break;
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::groups::categorize_items;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(category: &str, name: &str, calories: f64) -> MealItem {
        MealItem {
            name: name.to_string(),
            category: category.to_string(),
            servings: 1.0,
            calories,
            protein: 10.0,
            fat: 5.0,
            carbs: 25.0,
            fiber: 2.0,
        }
    }

    fn sample_groups() -> FoodGroups {
        let items = vec![
            item("Entrees", "Grilled Tofu", 180.0),
            item("Entrees", "Bean Stew", 220.0),
            item("Grains", "Brown Rice", 215.0),
            item("Vegetables", "Steamed Broccoli", 55.0),
            item("Sides", "Garden Salad", 25.0),
            item("Desserts", "Fruit Cup", 90.0),
        ];
        categorize_items(&items)
    }

    #[test]
    fn test_meal_anchored_by_protein_and_vegetable() {
        let groups = sample_groups();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let meal = generate_random_meal(&groups, 600.0, &mut rng);
            assert!(!meal.is_empty());
            assert!(groups.protein.iter().any(|p| p.name == meal[0].name));
        }
    }

    #[test]
    fn test_no_duplicate_names() {
        let groups = sample_groups();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let meal = generate_random_meal(&groups, 600.0, &mut rng);
            for (i, a) in meal.iter().enumerate() {
                for b in &meal[i + 1..] {
                    assert_ne!(a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn test_item_cap_respected() {
        let groups = sample_groups();
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..100 {
            let meal = generate_random_meal(&groups, 5000.0, &mut rng);
            assert!(meal.len() <= MAX_MEAL_ITEMS);
        }
    }

    #[test]
    fn test_empty_specific_groups_still_produce_a_meal() {
        // Nothing categorizes; only "other" is populated.
        let items = vec![item("Desserts", "Fruit Cup", 90.0), item("Beverages", "Iced Tea", 60.0)];
        let groups = categorize_items(&items);
        assert!(groups.protein.is_empty());
        assert!(groups.vegetables.is_empty());

        let mut rng = StdRng::seed_from_u64(17);
        let mut produced_any = false;
        for _ in 0..20 {
            if !generate_random_meal(&groups, 300.0, &mut rng).is_empty() {
                produced_any = true;
            }
        }
        assert!(produced_any);
    }

    #[test]
    fn test_servings_start_at_one() {
        let groups = sample_groups();
        let mut rng = StdRng::seed_from_u64(19);
        let meal = generate_random_meal(&groups, 600.0, &mut rng);
        assert!(meal.iter().all(|i| i.servings == 1.0));
    }
}
