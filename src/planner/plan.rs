use std::cmp::Ordering;

use chrono::{Local, Timelike};
use rand::Rng;

use crate::error::{PlannerError, Result};
use crate::models::item::round1;
use crate::models::{
    goal_by_name, Candidate, MealItem, MealPlanRequest, MealPlanResult, MealTotals, MenuItem,
    NutritionGoal,
};
use crate::planner::constants::{
    POPULATION_SIZE, REPAIR_ITERATIONS, TARGET_TOLERANCE, TOP_CANDIDATES,
};
use crate::planner::filters::{filter_available_items, filter_by_dietary_restrictions};
use crate::planner::generate::generate_random_meal;
use crate::planner::groups::categorize_items;
use crate::planner::repair::smart_repair;
use crate::planner::score::{evaluate_meal, meal_totals};
use crate::planner::servings::optimize_servings;

/// Meal period implied by an hour of day.
///
/// Band edges follow the dining halls' service schedule; overnight hours
/// fall back to Breakfast (the first service to open).
pub fn meal_type_for_hour(hour: u32) -> &'static str {
    match hour {
        6..=9 => "Breakfast",
        10..=14 => "Lunch",
        15..=20 => "Dinner",
        h if h >= 21 || h < 6 => "Breakfast",
        _ => "Lunch",
    }
}

/// Build an optimized meal plan for the request.
///
/// Filters and categorizes the pool, generates a random population, then
/// runs repair passes over the strongest candidates, keeping the single
/// best meal seen anywhere in the search. The randomness source is caller
/// supplied so seeded runs reproduce exactly.
pub fn plan<R: Rng>(
    pool: &[MenuItem],
    request: &MealPlanRequest,
    rng: &mut R,
) -> Result<MealPlanResult> {
    if request.target_calories <= 0.0 {
        return Err(PlannerError::InvalidInput(
            "target calories must be positive".to_string(),
        ));
    }

    let meal_type = request
        .meal_type
        .clone()
        .unwrap_or_else(|| meal_type_for_hour(Local::now().hour()).to_string());
    let goal = goal_by_name(&request.goal);

    let available = filter_available_items(
        pool,
        &request.dining_hall,
        &meal_type,
        request.date.as_deref(),
    );
    let available = filter_by_dietary_restrictions(available, request.vegetarian, request.vegan);

    if available.is_empty() {
        return Err(PlannerError::NoMatchingItems(empty_pool_message(
            request, &meal_type,
        )));
    }

    let groups = categorize_items(&available);

    let target = request.target_calories;
    let target_protein = request.target_protein;

    let mut best_meal: Vec<MealItem> = Vec::new();
    let mut best_score = f64::NEG_INFINITY;

    // Random-search population
    let mut population: Vec<Candidate> = Vec::with_capacity(POPULATION_SIZE);
    for _ in 0..POPULATION_SIZE {
        let raw = generate_random_meal(&groups, target, rng);
        let optimized = optimize_servings(&raw, target);
        let score = evaluate_meal(&optimized, target, goal, target_protein);

        if score > best_score {
            best_score = score;
            best_meal = optimized.clone();
        }
        population.push(Candidate { items: optimized, score });
    }

    // Local-search repair over the strongest candidates
    population.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    for candidate in population.into_iter().take(TOP_CANDIDATES) {
        let mut current = candidate.items;
        for _ in 0..REPAIR_ITERATIONS {
            let repaired = smart_repair(&current, &groups, target, goal, target_protein, rng);
            let repaired_score = evaluate_meal(&repaired, target, goal, target_protein);

            if repaired_score > best_score {
                best_score = repaired_score;
                best_meal = repaired.clone();
            }
            if repaired_score > evaluate_meal(&current, target, goal, target_protein) {
                current = repaired;
            }
        }
    }

    Ok(format_result(request, &meal_type, goal, best_meal))
}

fn empty_pool_message(request: &MealPlanRequest, meal_type: &str) -> String {
    let diet_suffix = if request.vegan {
        " (Vegan)"
    } else if request.vegetarian {
        " (Vegetarian)"
    } else {
        ""
    };

    format!(
        "No items found for {} - {} on {}{}",
        request.dining_hall,
        meal_type,
        request.date.as_deref().unwrap_or("any date"),
        diet_suffix
    )
}

fn format_result(
    request: &MealPlanRequest,
    meal_type: &str,
    goal: &NutritionGoal,
    items: Vec<MealItem>,
) -> MealPlanResult {
    let (total_cals, total_protein, total_fat, total_carbs) = meal_totals(&items);

    let (fat_percent, protein_percent, carb_percent) = if total_cals > 0.0 {
        (
            total_fat * 9.0 / total_cals * 100.0,
            total_protein * 4.0 / total_cals * 100.0,
            total_carbs * 4.0 / total_cals * 100.0,
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    let dietary = if request.vegan {
        "Vegan"
    } else if request.vegetarian {
        "Vegetarian"
    } else {
        "Standard"
    };

    let protein_target = request.target_protein.filter(|p| *p > 0.0);

    MealPlanResult {
        dining_hall: request.dining_hall.clone(),
        meal_type: meal_type.to_string(),
        date: request.date.clone(),
        dietary: dietary.to_string(),
        target_calories: request.target_calories,
        goal: goal.label.to_string(),
        actual_calories: round1(total_cals),
        items,
        totals: MealTotals {
            calories: round1(total_cals),
            protein: round1(total_protein),
            fat: round1(total_fat),
            carbs: round1(total_carbs),
            fat_percent: round1(fat_percent),
            protein_percent: round1(protein_percent),
            carb_percent: round1(carb_percent),
        },
        meets_target: (total_cals - request.target_calories).abs()
            < request.target_calories * TARGET_TOLERANCE,
        target_protein: protein_target,
        meets_protein_target: protein_target
            .map(|tp| (total_protein - tp).abs() < tp * TARGET_TOLERANCE),
    }
}
