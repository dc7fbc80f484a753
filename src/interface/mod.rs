pub mod prompts;
pub mod render;

pub use prompts::{collect_plan_constraints, resolve_dining_hall};
pub use render::display_meal_plan;
