use super::{Recipe, ShapeError};
use crate::search::Query;
use serde_json::Value;
use std::collections::HashMap;

/// The loaded recipe collection, keyed by recipe name.
///
/// Recipes keep the order in which the source lists them. A book is never
/// changed after it has been built.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl RecipeBook {
    /// Builds a book from the parsed source document.
    ///
    /// A `null` root (such as a YAML document holding only `~`) is an empty
    /// collection.
    pub(crate) fn from_value(value: &Value) -> Result<Self, ShapeError> {
        match value {
            Value::Null => Ok(RecipeBook::default()),
            Value::Object(map) => map
                .iter()
                .map(|(name, record)| Recipe::from_value(name, record))
                .collect(),
            _ => Err(ShapeError::RootNotMapping),
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a recipe by its exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.index.get(name).map(|&position| &self.recipes[position])
    }

    /// Recipes in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Recipe names in source order.
    pub fn names(&self) -> Vec<&str> {
        self.recipes.iter().map(Recipe::name).collect()
    }

    /// Recipes whose name contains `query`, ignoring case, in source order.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let query = Query::new(query);
        self.recipes
            .iter()
            .filter(|recipe| query.matches(recipe.name()))
            .collect()
    }
}

impl FromIterator<Recipe> for RecipeBook {
    /// A later recipe with an already seen name replaces the earlier one in place.
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut book = RecipeBook::default();
        for recipe in iter {
            match book.index.get(recipe.name()) {
                Some(&position) => book.recipes[position] = recipe,
                None => {
                    book.index
                        .insert(recipe.name().to_string(), book.recipes.len());
                    book.recipes.push(recipe);
                }
            }
        }
        book
    }
}
