pub mod collection;
pub mod favorites;
pub mod filters;
pub mod meal_plan;

pub use collection::RecipeCollection;
pub use favorites::FavoriteSet;
pub use filters::{FilterCriteria, SortKey, SortOrder};
pub use meal_plan::{MealPlan, MealPlanEntry};
