use serde::Serialize;

use crate::models::MealItem;

/// Caller-supplied planning constraints.
#[derive(Debug, Clone)]
pub struct MealPlanRequest {
    /// Target calories for the meal. Must be positive.
    pub target_calories: f64,

    /// Optional target protein in grams.
    pub target_protein: Option<f64>,

    /// Goal key ("balanced", "weight_loss", "bulking", "keto").
    pub goal: String,

    /// Dining hall selector, matched as a substring.
    pub dining_hall: String,

    /// Meal period; inferred from the local clock when absent.
    pub meal_type: Option<String>,

    /// Optional date selector, matched as a substring.
    pub date: Option<String>,

    pub vegetarian: bool,
    pub vegan: bool,
}

/// One complete proposed meal under evaluation during search.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub items: Vec<MealItem>,
    pub score: f64,
}

/// Aggregate nutrient totals of the winning meal.
#[derive(Debug, Clone, Serialize)]
pub struct MealTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fat_percent: f64,
    pub protein_percent: f64,
    pub carb_percent: f64,
}

/// The formatted planning outcome returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct MealPlanResult {
    pub dining_hall: String,
    pub meal_type: String,
    pub date: Option<String>,

    /// "Standard", "Vegetarian", or "Vegan".
    pub dietary: String,

    pub target_calories: f64,

    /// Display label of the selected goal.
    pub goal: String,

    pub actual_calories: f64,
    pub items: Vec<MealItem>,
    pub totals: MealTotals,

    /// Whether actual calories land within 10% of the target.
    pub meets_target: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_protein: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meets_protein_target: Option<bool>,
}
