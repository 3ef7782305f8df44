//! Ingredient formatting.
//!
//! Flattens an [`IngredientMap`] into [`DisplayLine`]s, depth first, keeping
//! the stored order at every level. Groups produce a `"<name>:"` header
//! followed directly by their children one level deeper.

use crate::model::{Ingredient, IngredientMap, Leaf};
use std::slice;

mod model;

pub use model::{DisplayLine, LineKind};

struct Frame<'a> {
    entries: slice::Iter<'a, (String, Ingredient)>,
    depth: usize,
    path: Vec<String>,
}

/// Formats `ingredients` starting at nesting level `depth`.
///
/// Traversal keeps its own stack, so nesting depth is bounded by memory only.
///
/// # Examples
///
/// ```
/// use recetario::{format, Ingredient, IngredientMap, Leaf};
///
/// let ingredients: IngredientMap = [(
///     "Sal".to_string(),
///     Ingredient::Leaf(Leaf::measure(Some("1"), Some("pizca"))),
/// )]
/// .into_iter()
/// .collect();
///
/// let lines = format(&ingredients, 0);
/// assert_eq!(lines[0].text, "Sal: 1 pizca");
/// ```
pub fn format(ingredients: &IngredientMap, depth: usize) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    let mut stack = vec![Frame {
        entries: ingredients.entries().iter(),
        depth,
        path: Vec::new(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some((name, ingredient)) = frame.entries.next() else {
            stack.pop();
            continue;
        };

        let depth = frame.depth;
        let mut path = frame.path.clone();
        path.push(name.clone());

        match ingredient {
            Ingredient::Leaf(leaf) => {
                lines.push(DisplayLine::item(depth, item_text(name, leaf), path));
            }
            Ingredient::Group(children) => {
                lines.push(DisplayLine::header(depth, format!("{name}:"), path.clone()));
                stack.push(Frame {
                    entries: children.entries().iter(),
                    depth: depth + 1,
                    path,
                });
            }
        }
    }

    lines
}

fn item_text(name: &str, leaf: &Leaf) -> String {
    match leaf.describe() {
        Some(detail) => format!("{name}: {detail}"),
        None => name.to_string(),
    }
}
