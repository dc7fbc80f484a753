//! Rule tables and search bounds for the planning engine.
//!
//! Classification is keyword-driven: every table below is matched as a
//! case-insensitive substring against an item's name or category label.

/// Category patterns placing an item in the protein group.
pub const PROTEIN_CATEGORY_KEYWORDS: &[&str] = &[
    "entree", "protein", "chicken", "beef", "fish", "pork", "turkey", "tofu", "egg",
];

/// Category patterns placing an item in the carbs group.
pub const CARB_CATEGORY_KEYWORDS: &[&str] = &[
    "grain", "rice", "pasta", "bread", "potato", "starch", "cereal",
];

/// Category patterns placing an item in the vegetables group.
pub const VEGETABLE_CATEGORY_KEYWORDS: &[&str] = &["vegetable", "veggie", "salad", "greens"];

/// Name patterns for the protein group, applied in a second pass so items
/// with uninformative category labels are still tagged.
pub const PROTEIN_NAME_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "fish", "salmon", "turkey", "egg", "tofu", "bean", "lentil",
];

/// Name patterns for the carbs group.
pub const CARB_NAME_KEYWORDS: &[&str] = &[
    "rice", "pasta", "bread", "potato", "noodle", "tortilla", "quinoa", "oat",
];

/// Name patterns for the vegetables group.
pub const VEGETABLE_NAME_KEYWORDS: &[&str] = &[
    "broccoli", "carrot", "spinach", "lettuce", "tomato", "pepper", "green", "salad", "veggie",
];

/// Name patterns excluded for vegetarian and vegan diners.
pub const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "turkey", "fish", "salmon", "tuna", "shrimp", "crab", "lobster",
    "lamb", "veal", "bacon", "ham", "sausage", "pepperoni", "salami", "steak", "burger",
    "meatball", "wings", "clams", "oyster",
];

/// Category patterns excluded for vegetarian and vegan diners.
pub const MEAT_CATEGORY_KEYWORDS: &[&str] = &["meat", "fish", "poultry"];

/// Additional name patterns excluded for vegan diners.
pub const DAIRY_EGG_KEYWORDS: &[&str] = &[
    "milk", "cheese", "cream", "yogurt", "butter", "egg", "whey", "casein", "honey",
    "mayonnaise", "gelato", "custard", "alfredo", "ranch", "caesar",
];

/// Additional category patterns excluded for vegan diners.
pub const DAIRY_EGG_CATEGORY_KEYWORDS: &[&str] = &["dairy", "egg"];

/// Name patterns denoting unit-counted foods, portioned in half-serving
/// steps rather than scaled continuously.
pub const DISCRETE_KEYWORDS: &[&str] = &[
    "bun", "bread", "roll", "slice", "cookie", "egg", "patty", "burger", "sandwich", "apple",
    "banana", "orange", "pear", "muffin", "bagel", "toast", "wrap", "taco", "burrito", "pizza",
    "donut", "pancake", "waffle", "sausage",
];

// ─────────────────────────────────────────────────────────────────────────────
// Search bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Size of the random-search population.
pub const POPULATION_SIZE: usize = 20;

/// How many top candidates receive repair passes.
pub const TOP_CANDIDATES: usize = 5;

/// Repair iterations per top candidate.
pub const REPAIR_ITERATIONS: usize = 50;

/// Maximum items in one meal.
pub const MAX_MEAL_ITEMS: usize = 5;

/// Maximum filler draw attempts during candidate generation.
pub const MAX_FILL_ATTEMPTS: usize = 10;

/// Random replacement draws per group during repair.
pub const REPLACEMENT_SAMPLES_PER_GROUP: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie envelopes and serving clamps
// ─────────────────────────────────────────────────────────────────────────────

/// Generation stops adding items past this multiple of the target.
pub const CALORIE_CEILING_FACTOR: f64 = 1.2;

/// Generation stops early once this multiple of the target is reached.
pub const CALORIE_FLOOR_FACTOR: f64 = 0.9;

/// Clamp range for the initial whole-meal rescale.
pub const GLOBAL_SCALE_MIN: f64 = 0.5;
pub const GLOBAL_SCALE_MAX: f64 = 2.0;

/// Clamp range for the continuous-item gap-fill rescale.
pub const CONTINUOUS_SCALE_MIN: f64 = 0.2;
pub const CONTINUOUS_SCALE_MAX: f64 = 3.0;

/// Smallest servings count an included item may carry.
pub const MIN_SERVINGS: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Sentinel score for a zero-calorie (invalid) meal.
pub const INVALID_MEAL_SCORE: f64 = -1000.0;

/// Diversity bonus per distinct category present in the meal.
pub const DIVERSITY_POINTS_PER_CATEGORY: f64 = 10.0;

/// Score weights when a protein target is given.
pub const CAL_WEIGHT_WITH_PROTEIN: f64 = 0.30;
pub const PROTEIN_WEIGHT: f64 = 0.25;
pub const MACRO_WEIGHT_WITH_PROTEIN: f64 = 0.35;

/// Score weights without a protein target.
pub const CAL_WEIGHT: f64 = 0.40;
pub const MACRO_WEIGHT: f64 = 0.50;

/// Diversity weight in both weightings.
pub const DIVERSITY_WEIGHT: f64 = 0.10;

// ─────────────────────────────────────────────────────────────────────────────
// Repair triggers and result tolerance
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie overshoot ratio that triggers removal of the heaviest item.
pub const OVERSHOOT_TRIGGER: f64 = 1.1;

/// Protein shortfall ratio that triggers removal of the leanest item.
pub const PROTEIN_SHORTFALL_TRIGGER: f64 = 0.9;

/// Relative tolerance for the "meets target" flags.
pub const TARGET_TOLERANCE: f64 = 0.1;

/// Case-insensitive substring match against a keyword table.
pub fn matches_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}
