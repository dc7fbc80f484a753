use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{MenuItem, GOALS};

/// Minimum similarity before a hall suggestion is offered.
const HALL_MATCH_THRESHOLD: f64 = 0.7;

/// Resolve a dining-hall argument against the halls present in the data.
///
/// Substring matches pass through unchanged. Otherwise the closest hall by
/// Jaro-Winkler similarity is suggested: confirmed interactively, or applied
/// with a notice in non-interactive runs. Weak matches leave the input
/// untouched (the planner reports the empty pool downstream).
pub fn resolve_dining_hall(pool: &[MenuItem], requested: &str, interactive: bool) -> Result<String> {
    let requested_lower = requested.to_lowercase();

    let mut halls: Vec<&str> = pool.iter().map(|r| r.dining_hall.as_str()).collect();
    halls.sort_unstable();
    halls.dedup();

    if halls
        .iter()
        .any(|h| h.to_lowercase().contains(&requested_lower))
    {
        return Ok(requested.to_string());
    }

    let closest = halls
        .iter()
        .map(|h| (*h, jaro_winkler(&h.to_lowercase(), &requested_lower)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match closest {
        Some((hall, score)) if score > HALL_MATCH_THRESHOLD => {
            if interactive {
                let confirm = Confirm::new()
                    .with_prompt(format!("No hall matches '{}'. Did you mean '{}'?", requested, hall))
                    .default(true)
                    .interact()?;

                if confirm {
                    Ok(hall.to_string())
                } else {
                    Ok(requested.to_string())
                }
            } else {
                // Keep stdout clean for JSON consumers; notices go to stderr.
                eprintln!("No hall matches '{}', using closest match '{}'", requested, hall);
                Ok(hall.to_string())
            }
        }
        _ => Ok(requested.to_string()),
    }
}

/// Prompt for a target calorie count.
pub fn prompt_target_calories() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Target calories for this meal")
        .default("600".to_string())
        .interact_text()?;

    let calories: f64 = input
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    if calories <= 0.0 {
        return Err(PlannerError::InvalidInput(
            "Target calories must be positive".to_string(),
        ));
    }

    Ok(calories)
}

/// Prompt for an optional protein target in grams.
pub fn prompt_target_protein() -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt("Target protein in grams (leave empty to skip)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let protein: f64 = input
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    Ok(Some(protein))
}

/// Prompt for a nutrition goal, returning its key.
pub fn prompt_goal() -> Result<String> {
    let labels: Vec<&str> = GOALS.iter().map(|g| g.label).collect();

    let selection = Select::new()
        .with_prompt("Nutrition goal")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(GOALS[selection].key.to_string())
}

/// Prompt for dietary restriction, returning (vegetarian, vegan).
pub fn prompt_dietary() -> Result<(bool, bool)> {
    let options = ["Standard", "Vegetarian", "Vegan"];

    let selection = Select::new()
        .with_prompt("Dietary restriction")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => (true, false),
        2 => (false, true),
        _ => (false, false),
    })
}

/// Collect all planning constraints interactively.
///
/// Returns (target calories, target protein, goal key, vegetarian, vegan).
pub fn collect_plan_constraints() -> Result<(f64, Option<f64>, String, bool, bool)> {
    let calories = prompt_target_calories()?;
    let protein = prompt_target_protein()?;
    let goal = prompt_goal()?;
    let (vegetarian, vegan) = prompt_dietary()?;

    Ok((calories, protein, goal, vegetarian, vegan))
}
