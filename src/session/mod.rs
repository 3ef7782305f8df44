//! Per-user browsing state.
//!
//! A [`Session`] bundles everything one user changes while browsing: the
//! navigation state, the search query and the ingredient checklist. Each user
//! gets their own session; nothing here is shared or global.

use crate::model::{Recipe, RecipeBook};
use crate::navigation::{NavigationError, Navigator, View, ViewState};
use crate::search::Query;
use std::collections::{HashMap, HashSet};

/// Checked ingredients, keyed by recipe name and ingredient path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    checked: HashMap<String, HashSet<Vec<String>>>,
}

impl Checklist {
    /// Flips the checked state of an ingredient and returns the new state.
    pub fn toggle(&mut self, recipe: &str, path: &[String]) -> bool {
        let checked = self.checked.entry(recipe.to_string()).or_default();
        if checked.remove(path) {
            false
        } else {
            checked.insert(path.to_vec());
            true
        }
    }

    pub fn is_checked(&self, recipe: &str, path: &[String]) -> bool {
        self.checked
            .get(recipe)
            .is_some_and(|checked| checked.contains(path))
    }

    pub fn checked_count(&self, recipe: &str) -> usize {
        self.checked.get(recipe).map_or(0, HashSet::len)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    navigator: Navigator,
    query: String,
    checklist: Checklist,
}

impl Session {
    /// A fresh session on the listing view.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Recipes matching the current query, in collection order.
    pub fn listing<'a>(&self, book: &'a RecipeBook) -> Vec<&'a Recipe> {
        let query = Query::new(&self.query);
        book.iter().filter(|recipe| query.matches(recipe.name())).collect()
    }

    pub fn state(&self) -> &ViewState {
        self.navigator.state()
    }

    pub fn select_recipe(&mut self, book: &RecipeBook, name: &str) -> Result<(), NavigationError> {
        self.navigator.select_recipe(book, name).map(|_| ())
    }

    pub fn go_back(&mut self) {
        self.navigator.go_back();
    }

    /// Resolves the current view against `book`.
    ///
    /// If the selected recipe is missing from `book` the session is moved
    /// back to the listing and the error is returned; the next call yields
    /// the listing.
    pub fn view<'a>(&mut self, book: &'a RecipeBook) -> Result<View<'a>, NavigationError> {
        let state = self.navigator.current(book)?.clone();
        match state {
            ViewState::Listing => Ok(View::Listing(self.listing(book))),
            ViewState::Detail(name) => match book.get(&name) {
                Some(recipe) => Ok(View::Detail(recipe)),
                None => {
                    self.navigator.go_back();
                    Err(NavigationError::UnknownRecipe(name))
                }
            },
        }
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn toggle_ingredient(&mut self, recipe: &str, path: &[String]) -> bool {
        self.checklist.toggle(recipe, path)
    }

    pub fn is_checked(&self, recipe: &str, path: &[String]) -> bool {
        self.checklist.is_checked(recipe, path)
    }

    /// Number of checked ingredients of `recipe`.
    pub fn checked_count(&self, recipe: &str) -> usize {
        self.checklist.checked_count(recipe)
    }
}
