use chrono::{Days, NaiveDate};

use crate::model::Recipe;
use crate::store::meal_plan::MealPlan;

/// Totals for one calendar day. `meals_count` counts plan entries for the
/// day, whether or not their recipe could be resolved; unresolvable entries
/// simply contribute nothing to the totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    pub meals_count: usize,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WeeklySummary {
    pub total_meals: usize,
    pub avg_calories: u32,
    pub avg_protein: u32,
    pub top_cuisine: Option<String>,
}

fn find_recipe<'a>(recipes: &'a [Recipe], id: &str) -> Option<&'a Recipe> {
    recipes.iter().find(|recipe| recipe.id == id)
}

/// Sums nutrition across every plan entry on `date`. Dangling recipe ids are
/// skipped silently.
pub fn daily_summary(plan: &MealPlan, recipes: &[Recipe], date: NaiveDate) -> DailySummary {
    let mut summary = DailySummary::default();

    for entry in plan.entries_for_date(date) {
        summary.meals_count += 1;
        if let Some(recipe) = find_recipe(recipes, &entry.recipe_id) {
            summary.calories += recipe.calories;
            summary.protein += recipe.macros.protein;
            summary.carbs += recipe.macros.carbs;
            summary.fat += recipe.macros.fat;
            summary.fiber += recipe.macros.fiber;
        }
    }

    summary
}

/// Folds the seven days starting at `start_date`. Averages are per planned
/// meal (0 when the week is empty). The top cuisine is the most frequent
/// cuisine among resolved recipes; on a tie the cuisine that appeared first
/// wins, which is why counts are kept in first-appearance order rather than
/// in a hash map.
pub fn weekly_summary(plan: &MealPlan, recipes: &[Recipe], start_date: NaiveDate) -> WeeklySummary {
    let mut total_meals = 0usize;
    let mut calorie_sum = 0u64;
    let mut protein_sum = 0u64;
    let mut cuisine_counts: Vec<(String, usize)> = Vec::new();

    for offset in 0..7 {
        let date = start_date
            .checked_add_days(Days::new(offset))
            .unwrap_or(start_date);
        for entry in plan.entries_for_date(date) {
            total_meals += 1;
            if let Some(recipe) = find_recipe(recipes, &entry.recipe_id) {
                calorie_sum += u64::from(recipe.calories);
                protein_sum += u64::from(recipe.macros.protein);
                match cuisine_counts
                    .iter_mut()
                    .find(|(cuisine, _)| *cuisine == recipe.cuisine)
                {
                    Some((_, count)) => *count += 1,
                    None => cuisine_counts.push((recipe.cuisine.clone(), 1)),
                }
            }
        }
    }

    // Strict comparison keeps the first cuisine to reach the maximum count.
    let mut top_cuisine: Option<(&str, usize)> = None;
    for (cuisine, count) in &cuisine_counts {
        if top_cuisine.map_or(true, |(_, best)| *count > best) {
            top_cuisine = Some((cuisine, *count));
        }
    }
    let top_cuisine = top_cuisine.map(|(cuisine, _)| cuisine.to_string());

    let (avg_calories, avg_protein) = if total_meals > 0 {
        (
            (calorie_sum as f64 / total_meals as f64).round() as u32,
            (protein_sum as f64 / total_meals as f64).round() as u32,
        )
    } else {
        (0, 0)
    };

    WeeklySummary {
        total_meals,
        avg_calories,
        avg_protein,
        top_cuisine,
    }
}
