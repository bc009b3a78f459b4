use std::collections::HashSet;

/// Recipe ids the user marked as favorites. Pure membership, no ordering.
#[derive(Debug, Default, Clone)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it if present. Returns the new
    /// membership state.
    pub fn toggle(&mut self, recipe_id: &str) -> bool {
        if self.ids.remove(recipe_id) {
            false
        } else {
            self.ids.insert(recipe_id.to_string());
            true
        }
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.ids.contains(recipe_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
