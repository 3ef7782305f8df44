//! Recipe data model.
//!
//! A [`RecipeBook`] holds every [`Recipe`] of the collection in source order.
//! Each recipe owns an [`IngredientMap`], an ordered tree of [`Ingredient`]
//! nodes that are either a [`Leaf`] or a nested group.

use thiserror::Error;

mod book;
mod ingredient;
mod recipe;

pub use book::RecipeBook;
pub use ingredient::{Ingredient, IngredientMap, Leaf, QUANTITY_KEYS, UNIT_KEYS};
pub use recipe::{Recipe, DEFAULT_SUMMARY_INGREDIENTS};

/// The source document does not have the shape of a recipe collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("the collection root is not a mapping")]
    RootNotMapping,

    #[error("recipe {recipe:?}: {reason}")]
    Recipe { recipe: String, reason: String },
}
