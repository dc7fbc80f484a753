pub mod cli;
pub mod data;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{PlannerError, Result};
pub use models::{Candidate, MealItem, MealPlanRequest, MealPlanResult, MenuItem, NutritionGoal};
