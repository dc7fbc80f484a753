use crate::models::MealItem;
use crate::planner::constants::{
    matches_any, CONTINUOUS_SCALE_MAX, CONTINUOUS_SCALE_MIN, DISCRETE_KEYWORDS, GLOBAL_SCALE_MAX,
    GLOBAL_SCALE_MIN, MIN_SERVINGS,
};

/// Check whether an item is portioned in whole or half units.
pub fn is_discrete_item(name: &str) -> bool {
    matches_any(name, DISCRETE_KEYWORDS)
}

/// Rescale item servings toward the calorie target.
///
/// Two-phase: discrete items are snapped to the nearest half serving under a
/// whole-meal scale first, then continuous items absorb the remaining
/// calorie gap. All-discrete meals keep their rounded servings with no
/// corrective pass, so their total may land off target.
///
/// Returns a new item list; the input is never mutated.
pub fn optimize_servings(items: &[MealItem], target_calories: f64) -> Vec<MealItem> {
    if items.is_empty() {
        return Vec::new();
    }

    let total_initial: f64 = items.iter().map(|i| i.calories).sum();
    if total_initial == 0.0 {
        return items.to_vec();
    }

    let global_scale = (target_calories / total_initial).clamp(GLOBAL_SCALE_MIN, GLOBAL_SCALE_MAX);

    let mut adjusted: Vec<MealItem> = Vec::with_capacity(items.len());
    let mut continuous: Vec<&MealItem> = Vec::new();
    let mut discrete_cals = 0.0;

    for item in items {
        if is_discrete_item(&item.name) {
            let ideal = item.servings * global_scale;
            let rounded = ((ideal * 2.0).round() / 2.0).max(MIN_SERVINGS);
            let snapped = item.with_servings(rounded);
            discrete_cals += snapped.calories;
            adjusted.push(snapped);
        } else {
            continuous.push(item);
        }
    }

    if !continuous.is_empty() {
        let remaining = target_calories - discrete_cals;
        let continuous_initial: f64 = continuous.iter().map(|i| i.calories).sum();

        let scale = if continuous_initial > 0.0 && remaining > 0.0 {
            (remaining / continuous_initial).clamp(CONTINUOUS_SCALE_MIN, CONTINUOUS_SCALE_MAX)
        } else {
            global_scale
        };

        for item in continuous {
            adjusted.push(item.scaled(scale));
        }
    }

    adjusted
}
