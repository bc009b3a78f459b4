use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::EnvFilter;

use recipe_planner::api_connection::MealDbClient;
use recipe_planner::cli::{parse_args, Cli};
use recipe_planner::cook_mode::{
    cooking_tips, format_time, ConsoleAlert, ConsoleNarrator, CookSession, TickOutcome,
};
use recipe_planner::derived_view::filtered_recipes;
use recipe_planner::model::{MealType, Recipe};
use recipe_planner::normalizer::normalize_all;
use recipe_planner::nutrition::{daily_summary, weekly_summary};
use recipe_planner::rng::ThreadRandom;
use recipe_planner::shopping_list::build_shopping_list;
use recipe_planner::store::{FilterCriteria, MealPlan, RecipeCollection};

const CUISINE_FETCH_LIMIT: usize = 8;

fn criteria_from(cli: &Cli) -> FilterCriteria {
    let mut criteria = FilterCriteria {
        sort_by: cli.sort_by,
        sort_order: cli.sort_order,
        ..FilterCriteria::default()
    };
    if let Some(max) = cli.max_cook_time {
        criteria.max_cook_time = max;
    }
    if let Some(min) = cli.min_rating {
        criteria.min_rating = min;
    }
    if let Some(max) = cli.max_calories {
        criteria.max_calories = max;
    }
    if let Some(min) = cli.min_protein {
        criteria.min_protein = min;
    }
    if let Some(diet) = &cli.diet {
        criteria.diet_type = diet.clone();
    }
    if let Some(category) = &cli.category {
        criteria.category = category.clone();
    }
    if let Some(difficulty) = &cli.difficulty {
        criteria.difficulty = difficulty.clone();
    }
    if let Some(spice) = &cli.spice {
        criteria.spice_level = spice.clone();
    }
    criteria
}

fn print_recipe_table(recipes: &[Recipe]) {
    println!(
        "{:<40} {:<12} {:>6} {:>9} {:>9}  {}",
        "Title", "Cuisine", "Rating", "Cook(min)", "Calories", "Diet tags"
    );
    for recipe in recipes {
        println!(
            "{:<40} {:<12} {:>6.1} {:>9} {:>9}  {}",
            recipe.title.chars().take(40).collect::<String>(),
            recipe.cuisine,
            recipe.rating,
            recipe.cook_time,
            recipe.calories,
            recipe.diet_type.join(", ")
        );
    }
}

fn run_plan_demo(recipes: &[Recipe]) {
    let today = Local::now().date_naive();
    let mut plan = MealPlan::new(today);

    let slots = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];
    for (recipe, meal_type) in recipes.iter().zip(slots) {
        plan.add(recipe.id.clone(), today, meal_type);
    }
    if let (Some(recipe), Some(tomorrow)) = (recipes.first(), today.succ_opt()) {
        plan.add(recipe.id.clone(), tomorrow, MealType::Dinner);
    }

    let daily = daily_summary(&plan, recipes, today);
    println!("\nToday's nutrition ({} meals planned):", daily.meals_count);
    println!(
        "  {} kcal | protein {}g | carbs {}g | fat {}g | fiber {}g",
        daily.calories, daily.protein, daily.carbs, daily.fat, daily.fiber
    );

    let weekly = weekly_summary(&plan, recipes, today);
    println!(
        "This week: {} meals, avg {} kcal / {}g protein per meal, top cuisine: {}",
        weekly.total_meals,
        weekly.avg_calories,
        weekly.avg_protein,
        weekly.top_cuisine.as_deref().unwrap_or("None")
    );

    println!("\nShopping list:");
    for item in build_shopping_list(&plan, recipes) {
        let marker = if item.count > 1 {
            format!(" ({}x)", item.count)
        } else {
            String::new()
        };
        println!("  - {}{}  [for: {}]", item.ingredient, marker, item.recipes.join(", "));
    }
}

fn run_cook_demo(recipe: Recipe) {
    println!("\nCook mode: {}", recipe.title);
    let Some(mut session) =
        CookSession::with_ports(recipe, Box::new(ConsoleNarrator), Box::new(ConsoleAlert))
    else {
        println!("Recipe has no instructions; nothing to cook.");
        return;
    };

    session.toggle_voice();

    loop {
        println!(
            "\nStep {}/{} ({:.0}% done): {}",
            session.step() + 1,
            session.instruction_count(),
            session.progress_percent(),
            session.current_instruction()
        );
        for tip in cooking_tips(session.current_instruction()) {
            println!("  tip: {}", tip);
        }

        // Fast-forward a one-minute step timer instead of sleeping.
        session.start_timer(1);
        println!("  timer set: {}", format_time(session.timer_remaining()));
        loop {
            match session.tick() {
                TickOutcome::Finished => {
                    if session.is_last_step() {
                        break;
                    }
                }
                TickOutcome::AutoAdvanced | TickOutcome::Idle => break,
                TickOutcome::Running(_) => {}
            }
        }

        if session.is_last_step() {
            println!("\nAll {} steps done. Enjoy!", session.instruction_count());
            break;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = parse_args();
    let client = MealDbClient::new();
    let mut rng = ThreadRandom;
    let mut collection = RecipeCollection::new();

    collection.begin_load();
    let fetched = if let Some(cuisine) = &cli.cuisine {
        println!("Fetching {} recipes...", cuisine);
        collection.set_selected_cuisine(cuisine.clone());
        client.fetch_cuisine(cuisine, CUISINE_FETCH_LIMIT).await
    } else if let Some(term) = &cli.search {
        println!("Searching recipes for \"{}\"...", term);
        collection.set_search_term(term.clone());
        client.search(term).await
    } else {
        println!("Fetching {} random recipes...", cli.random);
        client.fetch_random(cli.random).await
    };

    match fetched {
        Ok(raw_meals) => {
            let recipes = normalize_all(&raw_meals, &mut rng);
            println!("Normalized {} recipes.", recipes.len());
            collection.finish_load(recipes);
        }
        Err(e) => {
            collection.fail_load(e.to_string());
            eprintln!("Recipe fetch failed: {}", e);
            return Err(e).context("fetching recipes from TheMealDB");
        }
    }

    let criteria = criteria_from(&cli);
    let view = filtered_recipes(collection.recipes(), &criteria, None, &mut rng);
    println!(
        "\n{} of {} recipes match the current filters:\n",
        view.len(),
        collection.recipes().len()
    );
    print_recipe_table(&view);

    if cli.plan_demo {
        run_plan_demo(&view);
    }

    if cli.cook_demo {
        match view.first() {
            Some(recipe) => run_cook_demo(recipe.clone()),
            None => println!("\nNo recipe available for the cook-mode demo."),
        }
    }

    Ok(())
}
