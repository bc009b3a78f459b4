use tracing::debug;

use crate::api_connection::endpoints::RawMeal;
use crate::model::{Category, Difficulty, Macros, Recipe, SpiceLevel};
use crate::rng::RandomSource;

/// Per-cuisine scaling applied to the estimated macros. Cuisines not listed
/// here use the identity row.
#[derive(Debug, Clone, Copy)]
pub struct CuisineMultiplier {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

const IDENTITY_MULTIPLIER: CuisineMultiplier = CuisineMultiplier {
    protein: 1.0,
    carbs: 1.0,
    fat: 1.0,
    calories: 1.0,
};

#[rustfmt::skip]
pub const CUISINE_MULTIPLIERS: &[(&str, CuisineMultiplier)] = &[
    ("Indian",   CuisineMultiplier { protein: 1.2, carbs: 1.3, fat: 1.1, calories: 1.1 }),
    ("Italian",  CuisineMultiplier { protein: 1.0, carbs: 1.4, fat: 1.2, calories: 1.2 }),
    ("Chinese",  CuisineMultiplier { protein: 1.1, carbs: 1.2, fat: 0.9, calories: 1.0 }),
    ("Mexican",  CuisineMultiplier { protein: 1.3, carbs: 1.1, fat: 1.0, calories: 1.1 }),
    ("Thai",     CuisineMultiplier { protein: 1.1, carbs: 1.0, fat: 0.8, calories: 0.9 }),
    ("American", CuisineMultiplier { protein: 1.4, carbs: 1.2, fat: 1.3, calories: 1.3 }),
    ("French",   CuisineMultiplier { protein: 1.0, carbs: 1.1, fat: 1.4, calories: 1.2 }),
    ("Japanese", CuisineMultiplier { protein: 1.2, carbs: 1.0, fat: 0.7, calories: 0.8 }),
    ("British",  CuisineMultiplier { protein: 1.1, carbs: 1.3, fat: 1.2, calories: 1.1 }),
    ("Greek",    CuisineMultiplier { protein: 1.1, carbs: 1.0, fat: 1.1, calories: 1.0 }),
];

/// Cuisines that get a synthesized spice level.
const SPICE_PRONE_CUISINES: &[&str] = &["Indian", "Thai", "Mexican"];

const MEAT_KEYWORDS: &[&str] = &["meat", "chicken", "beef", "pork", "fish"];
const DAIRY_KEYWORDS: &[&str] = &["dairy", "cheese", "milk", "butter", "cream"];

fn multiplier_for(cuisine: &str) -> CuisineMultiplier {
    CUISINE_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == cuisine)
        .map(|(_, m)| *m)
        .unwrap_or(IDENTITY_MULTIPLIER)
}

struct NutritionEstimate {
    calories: u32,
    protein: u32,
    carbs: u32,
    fat: u32,
    fiber: u32,
}

/// Best-effort estimate: a base figure from the ingredient count plus a
/// random perturbation, scaled by the cuisine row. Not nutritionally
/// authoritative.
fn estimate_nutrition(
    cuisine: &str,
    ingredient_count: usize,
    rng: &mut dyn RandomSource,
) -> NutritionEstimate {
    let base = ingredient_count as f64 * 25.0 + rng.unit() * 100.0 + 200.0;
    let m = multiplier_for(cuisine);

    NutritionEstimate {
        protein: (base * 0.15 / 4.0 * m.protein).round() as u32,
        carbs: (base * 0.5 / 4.0 * m.carbs).round() as u32,
        fat: (base * 0.35 / 9.0 * m.fat).round() as u32,
        fiber: (ingredient_count as f64 * 0.8 + rng.unit() * 5.0).round() as u32,
        calories: (base * m.calories).round() as u32,
    }
}

fn infer_diet_tags(ingredients: &[String], macros: &Macros) -> Vec<String> {
    let ingredient_text = ingredients.join(" ").to_lowercase();
    let mut tags = Vec::new();

    if !MEAT_KEYWORDS.iter().any(|kw| ingredient_text.contains(kw)) {
        tags.push("Vegetarian".to_string());
        if !DAIRY_KEYWORDS.iter().any(|kw| ingredient_text.contains(kw)) {
            tags.push("Vegan".to_string());
        }
    }
    if macros.protein > 20 {
        tags.push("High-Protein".to_string());
    }
    if macros.carbs < 20 {
        tags.push("Low-Carb".to_string());
    }
    if macros.fiber > 8 {
        tags.push("High-Fiber".to_string());
    }
    tags
}

/// Maps one raw MealDB record onto the canonical `Recipe`.
///
/// Fields the source does not carry (times, servings, difficulty, rating,
/// nutrition, spice level, non-Breakfast/Dessert category) are synthesized
/// from `rng` within fixed ranges. The draw order is part of the contract
/// for scripted sources: calorie base, fiber, spice level (spice-prone
/// cuisines only), cook time, prep time, servings, difficulty, category
/// (when not Breakfast/Dessert), rating.
pub fn normalize_meal(meal: &RawMeal, rng: &mut dyn RandomSource) -> Recipe {
    let ingredients: Vec<String> = meal
        .ingredient_slots()
        .into_iter()
        .map(|slot| match slot.measure {
            Some(measure) => format!("{} {}", measure, slot.name),
            None => slot.name,
        })
        .collect();

    let instructions: Vec<String> = meal
        .instructions
        .as_deref()
        .unwrap_or("")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let cuisine = meal
        .area
        .as_deref()
        .filter(|a| !a.is_empty())
        .unwrap_or("International")
        .to_string();

    let nutrition = estimate_nutrition(&cuisine, ingredients.len(), rng);
    let macros = Macros {
        protein: nutrition.protein,
        carbs: nutrition.carbs,
        fat: nutrition.fat,
        fiber: nutrition.fiber,
    };
    let diet_type = infer_diet_tags(&ingredients, &macros);

    let spice_level = if SPICE_PRONE_CUISINES.contains(&cuisine.as_str()) {
        let levels = [SpiceLevel::Mild, SpiceLevel::Medium, SpiceLevel::Hot];
        Some(levels[rng.pick(levels.len())])
    } else {
        None
    };

    let cook_time = 15 + (rng.unit() * 40.0) as u32;
    let prep_time = 5 + (rng.unit() * 20.0) as u32;
    let servings = 2 + (rng.unit() * 4.0) as u32;

    let difficulties = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    let difficulty = difficulties[rng.pick(difficulties.len())];

    let category = match meal.category.as_deref() {
        Some("Breakfast") => Category::Breakfast,
        Some("Dessert") => Category::Dessert,
        _ => {
            let lunch_or_dinner = [Category::Lunch, Category::Dinner];
            lunch_or_dinner[rng.pick(lunch_or_dinner.len())]
        }
    };

    let rating = ((rng.unit() * 1.5 + 3.5) * 10.0).round() as f32 / 10.0;

    let tags = [meal.category.as_deref(), meal.area.as_deref()]
        .into_iter()
        .flatten()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    Recipe {
        id: meal.id.clone(),
        title: meal.name.clone(),
        image: meal.thumbnail.clone().unwrap_or_default(),
        cook_time,
        prep_time,
        servings,
        difficulty,
        cuisine,
        diet_type,
        category,
        ingredients,
        instructions,
        calories: nutrition.calories,
        rating,
        macros,
        tags,
        spice_level,
        source: "TheMealDB".to_string(),
        video_url: meal.youtube.clone().filter(|url| !url.is_empty()),
    }
}

/// Normalizes a whole batch in order.
pub fn normalize_all(meals: &[RawMeal], rng: &mut dyn RandomSource) -> Vec<Recipe> {
    let recipes: Vec<Recipe> = meals.iter().map(|meal| normalize_meal(meal, rng)).collect();
    debug!(count = recipes.len(), "normalized raw meal batch");
    recipes
}
