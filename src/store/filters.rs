use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Popularity,
    Rating,
    CookTime,
    Calories,
    PrepTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// User-selected predicates and ordering for the derived recipe view.
///
/// String criteria use the empty string as "unset" (wildcard); numeric
/// criteria are always applied against their current thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub cuisine: String,
    pub diet_type: String,
    pub difficulty: String,
    pub category: String,
    pub spice_level: String,
    pub max_cook_time: u32,
    pub min_rating: f32,
    pub max_calories: u32,
    pub min_protein: u32,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            cuisine: String::new(),
            diet_type: String::new(),
            difficulty: String::new(),
            category: String::new(),
            spice_level: String::new(),
            max_cook_time: 60,
            min_rating: 0.0,
            max_calories: 1000,
            min_protein: 0,
            sort_by: SortKey::Popularity,
            sort_order: SortOrder::Desc,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
