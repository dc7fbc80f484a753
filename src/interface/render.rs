use crate::models::MealPlanResult;

/// Display a meal plan in a formatted table.
pub fn display_meal_plan(result: &MealPlanResult) {
    println!();
    println!("=== Meal Plan: {} - {} ===", result.dining_hall, result.meal_type);
    if let Some(date) = &result.date {
        println!("Date: {}", date);
    }
    println!("Goal: {} | Dietary: {}", result.goal, result.dietary);
    println!();

    if result.items.is_empty() {
        println!("No items selected.");
        return;
    }

    let max_name_len = result.items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (i, item) in result.items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} x{:<4} - {:>6.1} cal | P {:>5.1}g  F {:>5.1}g  C {:>5.1}g",
            i + 1,
            item.name,
            item.servings,
            item.calories,
            item.protein,
            item.fat,
            item.carbs,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!(
        "Calories: {:.1} / {:.1} target ({})",
        result.totals.calories,
        result.target_calories,
        if result.meets_target { "on target" } else { "off target" }
    );
    println!(
        "Protein: {:.1}g ({:.1}%) | Fat: {:.1}g ({:.1}%) | Carbs: {:.1}g ({:.1}%)",
        result.totals.protein,
        result.totals.protein_percent,
        result.totals.fat,
        result.totals.fat_percent,
        result.totals.carbs,
        result.totals.carb_percent
    );

    if let Some(target_protein) = result.target_protein {
        let met = result.meets_protein_target.unwrap_or(false);
        println!(
            "Protein target: {:.1}g ({})",
            target_protein,
            if met { "met" } else { "missed" }
        );
    }
    println!();
}
