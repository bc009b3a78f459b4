use crate::model::Recipe;

/// The current working set of recipes plus fetch status. Mutated only
/// through its own methods; consumers read `recipes()` and derive views
/// from it.
#[derive(Debug, Default, Clone)]
pub struct RecipeCollection {
    recipes: Vec<Recipe>,
    search_term: String,
    selected_cuisine: String,
    loading: bool,
    error: Option<String>,
}

impl RecipeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, recipes: Vec<Recipe>) {
        self.loading = false;
        self.recipes = recipes;
    }

    /// A failed fetch clears the working set; retrying the fetch is the only
    /// recovery path.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
        self.recipes.clear();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_selected_cuisine(&mut self, cuisine: impl Into<String>) {
        self.selected_cuisine = cuisine.into();
    }

    pub fn clear(&mut self) {
        self.recipes.clear();
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_cuisine(&self) -> &str {
        &self.selected_cuisine
    }
}
