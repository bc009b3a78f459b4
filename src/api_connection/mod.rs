pub mod connection;
pub mod endpoints;

// Re-export key structs for easier access from outside the module
pub use connection::{ApiConnectionError, MealDbClient};
pub use endpoints::{IngredientSlot, MealsEnvelope, RawMeal, DEFAULT_BASE_URL, DEFAULT_API_KEY};
