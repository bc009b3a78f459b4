use std::cmp::Ordering;

use crate::model::Recipe;
use crate::rng::RandomSource;
use crate::store::favorites::FavoriteSet;
use crate::store::filters::{FilterCriteria, SortKey, SortOrder};

fn matches_optional(criterion: &str, value: &str) -> bool {
    criterion.is_empty() || criterion.eq_ignore_ascii_case(value)
}

fn matches_criteria(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    let matches_cuisine = matches_optional(&criteria.cuisine, &recipe.cuisine);
    let matches_diet = criteria.diet_type.is_empty() || recipe.has_diet_tag(&criteria.diet_type);
    let matches_difficulty =
        matches_optional(&criteria.difficulty, &recipe.difficulty.to_string());
    let matches_category = matches_optional(&criteria.category, &recipe.category.to_string());
    let matches_spice = criteria.spice_level.is_empty()
        || recipe
            .spice_level
            .map(|level| level.to_string().eq_ignore_ascii_case(&criteria.spice_level))
            .unwrap_or(false);

    matches_cuisine
        && matches_diet
        && matches_difficulty
        && matches_category
        && matches_spice
        && recipe.cook_time <= criteria.max_cook_time
        && recipe.rating >= criteria.min_rating
        && recipe.calories <= criteria.max_calories
        && recipe.macros.protein >= criteria.min_protein
}

fn sort_value(recipe: &Recipe, key: SortKey, rng: &mut dyn RandomSource) -> f64 {
    match key {
        SortKey::Rating => f64::from(recipe.rating),
        SortKey::CookTime => f64::from(recipe.cook_time),
        SortKey::Calories => f64::from(recipe.calories),
        SortKey::PrepTime => f64::from(recipe.prep_time),
        // Popularity proxy: rating plus a small random jitter, so ties shift
        // between invocations. Accepted nondeterminism.
        SortKey::Popularity => f64::from(recipe.rating) * 100.0 + rng.unit() * 10.0,
    }
}

/// Recomputes the rendered recipe list from scratch: conjunction of the set
/// criteria, optionally restricted to a favorites set, then a stable sort by
/// the selected projection. Cheap at working-set sizes (tens of items), so
/// there is no caching or incremental update.
pub fn filtered_recipes(
    recipes: &[Recipe],
    criteria: &FilterCriteria,
    favorites: Option<&FavoriteSet>,
    rng: &mut dyn RandomSource,
) -> Vec<Recipe> {
    let mut keyed: Vec<(f64, &Recipe)> = recipes
        .iter()
        .filter(|recipe| {
            favorites
                .map(|favs| favs.contains(&recipe.id))
                .unwrap_or(true)
        })
        .filter(|recipe| matches_criteria(recipe, criteria))
        .map(|recipe| (sort_value(recipe, criteria.sort_by, &mut *rng), recipe))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match criteria.sort_order {
        SortOrder::Asc => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        SortOrder::Desc => b.partial_cmp(a).unwrap_or(Ordering::Equal),
    });

    keyed.into_iter().map(|(_, recipe)| recipe.clone()).collect()
}
