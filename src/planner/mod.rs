pub mod constants;
pub mod filters;
pub mod generate;
pub mod groups;
pub mod plan;
pub mod repair;
pub mod score;
pub mod servings;

pub use filters::{filter_available_items, filter_by_dietary_restrictions};
pub use generate::generate_random_meal;
pub use groups::{categorize_items, FoodGroup, FoodGroups};
pub use plan::{meal_type_for_hour, plan};
pub use repair::smart_repair;
pub use score::{evaluate_meal, meal_totals};
pub use servings::{is_discrete_item, optimize_servings};
