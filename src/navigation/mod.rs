//! Listing/detail navigation.
//!
//! A [`Navigator`] starts on [`ViewState::Listing`] and only ever enters
//! [`ViewState::Detail`] for a recipe that exists in the [`RecipeBook`] it is
//! checked against.

use crate::model::RecipeBook;
use log::{debug, warn};
use thiserror::Error;

mod model;

pub use model::{View, ViewState};

/// Errors that can occur when moving between views.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),
}

/// Navigation state for one session.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: ViewState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored state, without checking it against a book.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Opens the detail view for `name`.
    ///
    /// Unknown names are refused and the state stays as it was.
    pub fn select_recipe(
        &mut self,
        book: &RecipeBook,
        name: &str,
    ) -> Result<&ViewState, NavigationError> {
        if !book.contains(name) {
            warn!("Refusing to open unknown recipe {name:?}");
            return Err(NavigationError::UnknownRecipe(name.to_string()));
        }
        debug!("Opening recipe {name:?}");
        self.state = ViewState::Detail(name.to_string());
        Ok(&self.state)
    }

    /// Returns to the listing. Does nothing when already there.
    pub fn go_back(&mut self) -> &ViewState {
        self.state = ViewState::Listing;
        &self.state
    }

    /// Returns the state after checking it against `book`.
    ///
    /// A selection that no longer exists in `book` resets the navigator to
    /// the listing and is reported as [`NavigationError::UnknownRecipe`].
    pub fn current(&mut self, book: &RecipeBook) -> Result<&ViewState, NavigationError> {
        if let ViewState::Detail(name) = &self.state {
            if !book.contains(name) {
                let name = name.clone();
                warn!("Selected recipe {name:?} is gone, returning to listing");
                self.state = ViewState::Listing;
                return Err(NavigationError::UnknownRecipe(name));
            }
        }
        Ok(&self.state)
    }
}
