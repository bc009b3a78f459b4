use clap::Parser;

use crate::store::filters::{SortKey, SortOrder};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fetch recipes for one cuisine/area (e.g. "Italian")
    #[arg(long, conflicts_with = "search")]
    pub cuisine: Option<String>,

    /// Free-text recipe search
    #[arg(long)]
    pub search: Option<String>,

    /// Number of random recipes to fetch when neither --cuisine nor
    /// --search is given
    #[arg(long, default_value_t = 12)]
    pub random: usize,

    #[arg(long, value_enum, default_value = "popularity")]
    pub sort_by: SortKey,

    #[arg(long, value_enum, default_value = "desc")]
    pub sort_order: SortOrder,

    /// Only recipes cooking in at most this many minutes
    #[arg(long)]
    pub max_cook_time: Option<u32>,

    /// Only recipes rated at least this high (0-5)
    #[arg(long)]
    pub min_rating: Option<f32>,

    #[arg(long)]
    pub max_calories: Option<u32>,

    /// Only recipes with at least this much protein (grams)
    #[arg(long)]
    pub min_protein: Option<u32>,

    /// Diet tag filter (e.g. "Vegetarian", "High-Protein")
    #[arg(long)]
    pub diet: Option<String>,

    /// Category filter (e.g. "Dinner", "Dessert")
    #[arg(long)]
    pub category: Option<String>,

    /// Difficulty filter (Easy, Medium, Hard)
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Spice level filter (Mild, Medium, Hot)
    #[arg(long)]
    pub spice: Option<String>,

    /// Build a demo meal plan from the fetched recipes and print the
    /// nutrition summaries and shopping list
    #[arg(long)]
    pub plan_demo: bool,

    /// Walk the first fetched recipe through cook mode with a fast-forward
    /// timer
    #[arg(long)]
    pub cook_demo: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
