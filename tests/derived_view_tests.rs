use recipe_planner::derived_view::filtered_recipes;
use recipe_planner::model::{Category, Difficulty, Macros, Recipe, SpiceLevel};
use recipe_planner::rng::SequenceRandom;
use recipe_planner::store::favorites::FavoriteSet;
use recipe_planner::store::filters::{FilterCriteria, SortKey, SortOrder};

fn recipe(id: &str, rating: f32) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        image: String::new(),
        cook_time: 30,
        prep_time: 10,
        servings: 4,
        difficulty: Difficulty::Easy,
        cuisine: "Italian".to_string(),
        diet_type: vec!["Vegetarian".to_string()],
        category: Category::Dinner,
        ingredients: vec!["1 cup rice".to_string()],
        instructions: vec!["Cook".to_string()],
        calories: 500,
        rating,
        macros: Macros {
            protein: 25,
            carbs: 50,
            fat: 15,
            fiber: 5,
        },
        tags: Vec::new(),
        spice_level: None,
        source: "TheMealDB".to_string(),
        video_url: None,
    }
}

fn rng() -> SequenceRandom {
    SequenceRandom::constant(0.0)
}

#[test]
fn unset_criteria_match_everything() {
    let recipes = vec![recipe("a", 4.0), recipe("b", 3.0)];
    let view = filtered_recipes(&recipes, &FilterCriteria::default(), None, &mut rng());
    assert_eq!(view.len(), 2);
}

#[test]
fn cuisine_filter_is_case_insensitive_exact_match() {
    let mut french = recipe("b", 3.0);
    french.cuisine = "French".to_string();
    let recipes = vec![recipe("a", 4.0), french];

    let criteria = FilterCriteria {
        cuisine: "italian".to_string(),
        ..FilterCriteria::default()
    };
    let view = filtered_recipes(&recipes, &criteria, None, &mut rng());
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "a");
}

#[test]
fn diet_filter_matches_any_recipe_tag() {
    let mut high_protein = recipe("b", 3.0);
    high_protein.diet_type = vec!["High-Protein".to_string(), "Low-Carb".to_string()];
    let recipes = vec![recipe("a", 4.0), high_protein];

    let criteria = FilterCriteria {
        diet_type: "low-carb".to_string(),
        ..FilterCriteria::default()
    };
    let view = filtered_recipes(&recipes, &criteria, None, &mut rng());
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "b");
}

#[test]
fn spice_filter_excludes_recipes_without_a_level() {
    let mut hot = recipe("b", 3.0);
    hot.spice_level = Some(SpiceLevel::Hot);
    let recipes = vec![recipe("a", 4.0), hot];

    let criteria = FilterCriteria {
        spice_level: "hot".to_string(),
        ..FilterCriteria::default()
    };
    let view = filtered_recipes(&recipes, &criteria, None, &mut rng());
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "b");
}

#[test]
fn numeric_thresholds_are_conjunctive() {
    let mut slow = recipe("slow", 4.5);
    slow.cook_time = 90;
    let mut heavy = recipe("heavy", 4.5);
    heavy.calories = 1200;
    let mut weak = recipe("weak", 4.5);
    weak.macros.protein = 5;
    let ok = recipe("ok", 4.5);

    let criteria = FilterCriteria {
        max_cook_time: 60,
        max_calories: 1000,
        min_protein: 10,
        ..FilterCriteria::default()
    };
    let view = filtered_recipes(&[slow, heavy, weak, ok], &criteria, None, &mut rng());
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "ok");
}

#[test]
fn min_rating_threshold_applies() {
    let recipes = vec![recipe("a", 2.9), recipe("b", 4.2)];
    let criteria = FilterCriteria {
        min_rating: 3.0,
        ..FilterCriteria::default()
    };
    let view = filtered_recipes(&recipes, &criteria, None, &mut rng());
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "b");
}

#[test]
fn rating_ascending_orders_adjacent_pairs() {
    let recipes = vec![
        recipe("a", 4.1),
        recipe("b", 3.2),
        recipe("c", 4.9),
        recipe("d", 3.9),
    ];
    let criteria = FilterCriteria {
        sort_by: SortKey::Rating,
        sort_order: SortOrder::Asc,
        ..FilterCriteria::default()
    };
    let view = filtered_recipes(&recipes, &criteria, None, &mut rng());
    for pair in view.windows(2) {
        assert!(pair[0].rating <= pair[1].rating);
    }
}

#[test]
fn rating_descending_matches_expected_order() {
    let recipes = vec![recipe("a", 3.0), recipe("b", 4.5), recipe("c", 4.0)];
    let criteria = FilterCriteria {
        sort_by: SortKey::Rating,
        sort_order: SortOrder::Desc,
        ..FilterCriteria::default()
    };
    let view = filtered_recipes(&recipes, &criteria, None, &mut rng());
    let ratings: Vec<f32> = view.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![4.5, 4.0, 3.0]);
}

#[test]
fn same_criteria_twice_yields_the_same_sequence() {
    let recipes = vec![
        recipe("a", 4.1),
        recipe("b", 3.2),
        recipe("c", 4.9),
        recipe("d", 3.2),
    ];
    let criteria = FilterCriteria {
        sort_by: SortKey::Rating,
        sort_order: SortOrder::Asc,
        ..FilterCriteria::default()
    };

    let first: Vec<String> = filtered_recipes(&recipes, &criteria, None, &mut rng())
        .into_iter()
        .map(|r| r.id)
        .collect();
    let second: Vec<String> = filtered_recipes(&recipes, &criteria, None, &mut rng())
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn equal_sort_keys_preserve_input_order() {
    let recipes = vec![recipe("first", 4.0), recipe("second", 4.0)];
    let criteria = FilterCriteria {
        sort_by: SortKey::Rating,
        sort_order: SortOrder::Asc,
        ..FilterCriteria::default()
    };
    let view = filtered_recipes(&recipes, &criteria, None, &mut rng());
    assert_eq!(view[0].id, "first");
    assert_eq!(view[1].id, "second");
}

#[test]
fn cook_time_sort_uses_the_cook_time_projection() {
    let mut quick = recipe("quick", 3.0);
    quick.cook_time = 10;
    let mut slow = recipe("slow", 5.0);
    slow.cook_time = 50;
    let criteria = FilterCriteria {
        sort_by: SortKey::CookTime,
        sort_order: SortOrder::Asc,
        ..FilterCriteria::default()
    };
    let view = filtered_recipes(&[slow, quick], &criteria, None, &mut rng());
    assert_eq!(view[0].id, "quick");
}

#[test]
fn popularity_jitter_cannot_reorder_distinct_ratings() {
    // Jitter is bounded by 10 while a ratings gap of 0.2 contributes 20.
    let recipes = vec![recipe("low", 4.0), recipe("high", 4.2)];
    let criteria = FilterCriteria::default(); // popularity desc
    let mut jitter = SequenceRandom::new(vec![0.99, 0.01]);
    let view = filtered_recipes(&recipes, &criteria, None, &mut jitter);
    assert_eq!(view[0].id, "high");
}

#[test]
fn favorites_restriction_keeps_only_marked_recipes() {
    let recipes = vec![recipe("a", 4.0), recipe("b", 3.0)];
    let mut favorites = FavoriteSet::new();
    favorites.toggle("b");

    let view = filtered_recipes(
        &recipes,
        &FilterCriteria::default(),
        Some(&favorites),
        &mut rng(),
    );
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "b");
}
