use std::collections::HashSet;

use crate::models::{MealItem, NutritionGoal};
use crate::planner::constants::{
    CAL_WEIGHT, CAL_WEIGHT_WITH_PROTEIN, DIVERSITY_POINTS_PER_CATEGORY, DIVERSITY_WEIGHT,
    INVALID_MEAL_SCORE, MACRO_WEIGHT, MACRO_WEIGHT_WITH_PROTEIN, PROTEIN_WEIGHT,
};

/// Aggregate (calories, protein, fat, carbs) for a meal.
pub fn meal_totals(items: &[MealItem]) -> (f64, f64, f64, f64) {
    items.iter().fold((0.0, 0.0, 0.0, 0.0), |acc, i| {
        (acc.0 + i.calories, acc.1 + i.protein, acc.2 + i.fat, acc.3 + i.carbs)
    })
}

/// Composite fitness of a meal against the target and goal.
///
/// Components (each 0..=100 before weighting):
/// - calorie proximity: 100 at the target, 0 at 50% deviation
/// - protein proximity: same shape, only when a positive target is given
/// - macro balance: 100 minus 200x the euclidean distance between the
///   meal's macro-calorie ratios and the goal fractions
/// - diversity: 10 points per distinct category present
///
/// Zero-calorie meals score the invalid sentinel.
pub fn evaluate_meal(
    items: &[MealItem],
    target_calories: f64,
    goal: &NutritionGoal,
    target_protein: Option<f64>,
) -> f64 {
    let (total_cals, total_protein, total_fat, total_carbs) = meal_totals(items);

    if total_cals == 0.0 || target_calories <= 0.0 {
        return INVALID_MEAL_SCORE;
    }

    let cal_diff = (total_cals - target_calories).abs() / target_calories;
    let cal_score = (100.0 - cal_diff * 200.0).max(0.0);

    let protein_score = target_protein.filter(|p| *p > 0.0).map(|tp| {
        let diff = (total_protein - tp).abs() / tp;
        (100.0 - diff * 200.0).max(0.0)
    });

    let p_ratio = total_protein * 4.0 / total_cals;
    let f_ratio = total_fat * 9.0 / total_cals;
    let c_ratio = total_carbs * 4.0 / total_cals;
    let dist = ((p_ratio - goal.protein).powi(2)
        + (f_ratio - goal.fat).powi(2)
        + (c_ratio - goal.carbs).powi(2))
    .sqrt();
    let macro_score = (100.0 - dist * 200.0).max(0.0);

    let categories: HashSet<&str> = items.iter().map(|i| i.category.as_str()).collect();
    let diversity_score = categories.len() as f64 * DIVERSITY_POINTS_PER_CATEGORY;

    match protein_score {
        Some(ps) => {
            cal_score * CAL_WEIGHT_WITH_PROTEIN
                + ps * PROTEIN_WEIGHT
                + macro_score * MACRO_WEIGHT_WITH_PROTEIN
                + diversity_score * DIVERSITY_WEIGHT
        }
        None => {
            cal_score * CAL_WEIGHT + macro_score * MACRO_WEIGHT + diversity_score * DIVERSITY_WEIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::goal_by_name;
    use assert_float_eq::*;

    fn item(category: &str, name: &str, cal: f64, p: f64, f: f64, c: f64) -> MealItem {
        MealItem {
            name: name.to_string(),
            category: category.to_string(),
            servings: 1.0,
            calories: cal,
            protein: p,
            fat: f,
            carbs: c,
            fiber: 0.0,
        }
    }

    #[test]
    fn test_zero_calorie_meal_gets_sentinel() {
        let goal = goal_by_name("balanced");
        assert_eq!(evaluate_meal(&[], 600.0, goal, None), INVALID_MEAL_SCORE);

        let zero = vec![item("Beverages", "Water", 0.0, 0.0, 0.0, 0.0)];
        assert_eq!(evaluate_meal(&zero, 600.0, goal, None), INVALID_MEAL_SCORE);
    }

    #[test]
    fn test_perfect_meal_scores_components_fully() {
        // 100 cal at exactly 30/30/40: protein 7.5g, fat 10/3 g, carbs 10g.
        let meal = vec![item("Entrees", "Ideal Dish", 100.0, 7.5, 10.0 / 3.0, 10.0)];
        let goal = goal_by_name("balanced");

        // cal 100, macro 100, diversity 10 -> 0.4*100 + 0.5*100 + 0.1*10
        let score = evaluate_meal(&meal, 100.0, goal, None);
        assert_float_absolute_eq!(score, 91.0, 1e-6);
    }

    #[test]
    fn test_protein_target_switches_weighting() {
        let meal = vec![item("Entrees", "Ideal Dish", 100.0, 7.5, 10.0 / 3.0, 10.0)];
        let goal = goal_by_name("balanced");

        // Protein exactly on target: 0.3*100 + 0.25*100 + 0.35*100 + 0.1*10
        let score = evaluate_meal(&meal, 100.0, goal, Some(7.5));
        assert_float_absolute_eq!(score, 91.0, 1e-6);

        // A zero protein target is treated as absent.
        let without = evaluate_meal(&meal, 100.0, goal, Some(0.0));
        let none = evaluate_meal(&meal, 100.0, goal, None);
        assert_eq!(without, none);
    }

    #[test]
    fn test_calorie_deviation_lowers_score() {
        let goal = goal_by_name("balanced");
        let close = vec![item("Entrees", "Dish", 580.0, 43.5, 19.3, 58.0)];
        let far = vec![item("Entrees", "Dish", 300.0, 22.5, 10.0, 30.0)];

        assert!(evaluate_meal(&close, 600.0, goal, None) > evaluate_meal(&far, 600.0, goal, None));
    }

    #[test]
    fn test_diversity_bonus_counts_distinct_categories() {
        let goal = goal_by_name("balanced");
        let single = vec![
            item("Entrees", "A", 200.0, 15.0, 6.7, 20.0),
            item("Entrees", "B", 200.0, 15.0, 6.7, 20.0),
        ];
        let varied = vec![
            item("Entrees", "A", 200.0, 15.0, 6.7, 20.0),
            item("Sides", "B", 200.0, 15.0, 6.7, 20.0),
        ];

        assert!(
            evaluate_meal(&varied, 400.0, goal, None) > evaluate_meal(&single, 400.0, goal, None)
        );
    }
}
