pub mod payload;
pub mod planner;
pub mod recipe;

pub use payload::{ParseError, parse_catalog, parse_planner, parse_recipe};
pub use planner::{PlannerData, Weekday};
pub use recipe::{Ingredient, Quantity, Recipe};
