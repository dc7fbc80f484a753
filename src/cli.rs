use clap::Parser;

/// MenuPlanner — assembles dining-hall menu items into a meal that hits a
/// calorie target and macro-nutrient goal.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the exported menu data file (.json or .csv).
    #[arg(short, long, default_value = "menu_data.json")]
    pub file: String,

    /// Target calories for the meal.
    #[arg(long, default_value_t = 600.0)]
    pub calories: f64,

    /// Target protein in grams.
    #[arg(long)]
    pub protein: Option<f64>,

    /// Dining hall (substring match, fuzzy-corrected against the data).
    #[arg(long, default_value = "ISR")]
    pub hall: String,

    /// Meal period (Breakfast/Lunch/Dinner); inferred from the clock when omitted.
    #[arg(long)]
    pub meal: Option<String>,

    /// Nutrition goal.
    #[arg(long, default_value = "balanced", value_parser = ["balanced", "weight_loss", "bulking", "keto"])]
    pub goal: String,

    /// Filter by date (substring match, e.g. "2025-12-12").
    #[arg(long)]
    pub date: Option<String>,

    /// Vegetarian only.
    #[arg(long)]
    pub vegetarian: bool,

    /// Vegan only.
    #[arg(long)]
    pub vegan: bool,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Seed the random search for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Prompt for constraints instead of taking them from flags.
    #[arg(short, long)]
    pub interactive: bool,
}
