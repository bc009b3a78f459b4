use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Public demo endpoint of TheMealDB. The trailing path segment is the API
/// key; the free tier uses the literal key "1".
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1";
pub const DEFAULT_API_KEY: &str = "1";

/// Highest numbered ingredient/measure slot pair the source schema carries.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// One non-empty ingredient slot from a raw record: the ingredient name and
/// the optional measure text, both already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSlot {
    pub name: String,
    pub measure: Option<String>,
}

/// A recipe record in TheMealDB's native shape.
///
/// Only the id and name are reliably present; everything else may be absent
/// or null (filter.php returns summary records with just id, name and
/// thumbnail). The numbered `strIngredient1..20` / `strMeasure1..20` slots
/// are captured through the flattened map rather than forty named fields.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Option<String>>,
}

impl RawMeal {
    fn slot_text(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(|value| value.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Walks the numbered slot pairs in order, skipping slots whose
    /// ingredient name is missing or blank. Measures of skipped slots are
    /// dropped with them.
    pub fn ingredient_slots(&self) -> Vec<IngredientSlot> {
        let mut slots = Vec::new();
        for i in 1..=MAX_INGREDIENT_SLOTS {
            let name_key = format!("strIngredient{}", i);
            let measure_key = format!("strMeasure{}", i);
            if let Some(name) = self.slot_text(&name_key) {
                slots.push(IngredientSlot {
                    name: name.to_string(),
                    measure: self.slot_text(&measure_key).map(str::to_string),
                });
            }
        }
        slots
    }
}

/// Every MealDB endpoint wraps its payload in `{ "meals": [...] }`, with a
/// JSON null standing in for "no results".
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MealsEnvelope {
    pub meals: Option<Vec<RawMeal>>,
}
