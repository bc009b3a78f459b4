use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::MealType;

/// One recipe assigned to one date/meal slot. `recipe_id` may dangle if the
/// recipe later leaves the working set; consumers tolerate that.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MealPlanEntry {
    pub id: u64,
    pub recipe_id: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
}

/// The planned meals plus the week the planner view is focused on. Entry ids
/// come from a monotonic counter, so removal by id is unambiguous even when
/// the same recipe occupies several slots.
#[derive(Debug, Clone)]
pub struct MealPlan {
    entries: Vec<MealPlanEntry>,
    next_id: u64,
    selected_week: NaiveDate,
}

impl MealPlan {
    pub fn new(selected_week: NaiveDate) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            selected_week,
        }
    }

    pub fn add(&mut self, recipe_id: impl Into<String>, date: NaiveDate, meal_type: MealType) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(MealPlanEntry {
            id,
            recipe_id: recipe_id.into(),
            date,
            meal_type,
        });
        id
    }

    /// Removes the entry with this id, if present.
    pub fn remove(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[MealPlanEntry] {
        &self.entries
    }

    pub fn entries_for_date(&self, date: NaiveDate) -> impl Iterator<Item = &MealPlanEntry> {
        self.entries.iter().filter(move |entry| entry.date == date)
    }

    /// First entry in a slot, for single-recipe-per-slot rendering. Multiple
    /// entries may share a slot; aggregators fold over all of them.
    pub fn entry_for_slot(&self, date: NaiveDate, meal_type: MealType) -> Option<&MealPlanEntry> {
        self.entries
            .iter()
            .find(|entry| entry.date == date && entry.meal_type == meal_type)
    }

    pub fn set_selected_week(&mut self, week: NaiveDate) {
        self.selected_week = week;
    }

    pub fn selected_week(&self) -> NaiveDate {
        self.selected_week
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
