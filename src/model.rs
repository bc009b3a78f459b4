use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
    Appetizer,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Snack => "Snack",
            Category::Dessert => "Dessert",
            Category::Appetizer => "Appetizer",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpiceLevel {
    Mild,
    Medium,
    Hot,
    #[serde(rename = "Very Hot")]
    VeryHot,
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpiceLevel::Mild => "Mild",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::Hot => "Hot",
            SpiceLevel::VeryHot => "Very Hot",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        };
        write!(f, "{}", name)
    }
}

/// Estimated macronutrients in grams.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
}

/// Canonical recipe entity. Immutable once produced by the normalizer.
///
/// `instructions` is guaranteed non-empty for any recipe that enters cook
/// mode; the normalizer can emit an empty sequence when the source record
/// carried no instruction text, and callers gate cook mode on that.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub cook_time: u32,
    pub prep_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub diet_type: Vec<String>,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub calories: u32,
    pub rating: f32,
    pub macros: Macros,
    pub tags: Vec<String>,
    pub spice_level: Option<SpiceLevel>,
    pub source: String,
    pub video_url: Option<String>,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }

    pub fn has_diet_tag(&self, tag: &str) -> bool {
        self.diet_type.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
