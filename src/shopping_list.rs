use std::collections::HashMap;

use crate::model::Recipe;
use crate::store::meal_plan::MealPlan;

/// One consolidated shopping-list line. The dedup key is the full
/// lower-cased raw ingredient string, so "2 cups flour" and "3 cups flour"
/// stay separate entries — the text is never parsed into quantity/unit/name.
/// Known limitation, kept deliberately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub ingredient: String,
    pub count: usize,
    pub recipes: Vec<String>,
}

/// Folds every plan entry (all slots, not one per slot) into a deduplicated
/// ingredient list. Entries whose recipe cannot be resolved are skipped.
/// Output order is first appearance of each ingredient key; contributing
/// recipe titles are distinct, in first-contribution order.
pub fn build_shopping_list(plan: &MealPlan, recipes: &[Recipe]) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in plan.entries() {
        let Some(recipe) = recipes.iter().find(|r| r.id == entry.recipe_id) else {
            continue;
        };
        for ingredient in &recipe.ingredients {
            let key = ingredient.to_lowercase();
            match index.get(&key) {
                Some(&pos) => {
                    let item = &mut items[pos];
                    item.count += 1;
                    if !item.recipes.contains(&recipe.title) {
                        item.recipes.push(recipe.title.clone());
                    }
                }
                None => {
                    index.insert(key.clone(), items.len());
                    items.push(ShoppingItem {
                        ingredient: key,
                        count: 1,
                        recipes: vec![recipe.title.clone()],
                    });
                }
            }
        }
    }

    items
}
