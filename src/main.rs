use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use menu_planner_rs::cli::Cli;
use menu_planner_rs::data::load_menu;
use menu_planner_rs::error::{PlannerError, Result};
use menu_planner_rs::interface::{collect_plan_constraints, display_meal_plan, resolve_dining_hall};
use menu_planner_rs::models::MealPlanRequest;
use menu_planner_rs::planner::plan;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let path = Path::new(&cli.file);
    if !path.exists() {
        eprintln!("Menu data file not found: {}", cli.file);
        eprintln!("Export the nutrition data first, or point --file at an existing export.");
        return Ok(());
    }

    let pool = load_menu(path)?;

    if !cli.json {
        println!("Loaded {} menu records", pool.len());
    }

    let (calories, protein, goal, vegetarian, vegan) = if cli.interactive {
        collect_plan_constraints()?
    } else {
        (cli.calories, cli.protein, cli.goal.clone(), cli.vegetarian, cli.vegan)
    };

    let hall = resolve_dining_hall(&pool, &cli.hall, cli.interactive)?;

    let request = MealPlanRequest {
        target_calories: calories,
        target_protein: protein,
        goal,
        dining_hall: hall,
        meal_type: cli.meal.clone(),
        date: cli.date.clone(),
        vegetarian,
        vegan,
    };

    let result = match cli.seed {
        Some(seed) => plan(&pool, &request, &mut StdRng::seed_from_u64(seed)),
        None => plan(&pool, &request, &mut rand::thread_rng()),
    };

    match result {
        Ok(meal_plan) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&meal_plan)?);
            } else {
                display_meal_plan(&meal_plan);
            }
        }
        Err(PlannerError::NoMatchingItems(message)) => {
            if cli.json {
                println!("{}", serde_json::json!({ "error": message }));
            } else {
                println!("{}", message);
            }
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
