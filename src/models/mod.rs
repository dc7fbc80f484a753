pub mod goal;
pub mod item;
pub mod plan;

pub use goal::{goal_by_name, NutritionGoal, GOALS};
pub use item::{MealItem, MenuItem};
pub use plan::{Candidate, MealPlanRequest, MealPlanResult, MealTotals};
