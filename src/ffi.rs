//! UniFFI bindings for host UIs (iOS, Android, desktop).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! The shared recipe book is exposed as an object; each UI session gets its
//! own [`FfiSession`].

use crate::format::{DisplayLine, LineKind};
use crate::model::{Recipe, RecipeBook, DEFAULT_SUMMARY_INGREDIENTS};
use crate::navigation::{NavigationError, View};
use crate::session::Session;
use crate::store::{LoadError, RecipeStore};
use camino::Utf8Path;
use std::cell::RefCell;
use std::sync::{Arc, Mutex, MutexGuard};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecetarioError {
    #[error("Recipe data unavailable: {message}")]
    DataUnavailable { message: String },

    #[error("Malformed recipe data: {message}")]
    MalformedData { message: String },

    #[error("Unknown recipe: {name}")]
    UnknownRecipe { name: String },
}

impl From<LoadError> for RecetarioError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::DataUnavailable { .. } => RecetarioError::DataUnavailable {
                message: e.to_string(),
            },
            LoadError::MalformedData { .. } => RecetarioError::MalformedData {
                message: e.to_string(),
            },
        }
    }
}

impl From<NavigationError> for RecetarioError {
    fn from(e: NavigationError) -> Self {
        match e {
            NavigationError::UnknownRecipe(name) => RecetarioError::UnknownRecipe { name },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiLineKind {
    GroupHeader,
    Item,
}

/// One formatted ingredient line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDisplayLine {
    pub kind: FfiLineKind,
    /// Nesting level, 0 for top-level ingredients
    pub depth: u32,
    pub text: String,
    /// Ingredient path, used as the checklist key
    pub path: Vec<String>,
}

impl From<DisplayLine> for FfiDisplayLine {
    fn from(line: DisplayLine) -> Self {
        FfiDisplayLine {
            kind: match line.kind {
                LineKind::GroupHeader => FfiLineKind::GroupHeader,
                LineKind::Item => FfiLineKind::Item,
            },
            depth: line.depth as u32,
            text: line.text,
            path: line.path,
        }
    }
}

/// A numbered instruction step.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStep {
    /// Step number (1-indexed)
    pub number: u32,
    pub text: String,
}

/// Everything the detail view shows for a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub name: String,
    /// Stored image path, not checked against the filesystem
    pub image: Option<String>,
    /// Listing card description
    pub summary: String,
    pub ingredients: Vec<FfiDisplayLine>,
    pub steps: Vec<FfiStep>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(recipe: &Recipe) -> Self {
        FfiRecipe {
            name: recipe.name().to_string(),
            image: recipe.image().map(str::to_string),
            summary: recipe.summary(DEFAULT_SUMMARY_INGREDIENTS),
            ingredients: recipe
                .display_ingredients()
                .into_iter()
                .map(FfiDisplayLine::from)
                .collect(),
            steps: recipe
                .steps()
                .map(|(number, text)| FfiStep {
                    number: number as u32,
                    text: text.to_string(),
                })
                .collect(),
        }
    }
}

/// The view a session is on.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiView {
    Listing { names: Vec<String> },
    Detail { recipe: FfiRecipe },
}

impl From<View<'_>> for FfiView {
    fn from(view: View<'_>) -> Self {
        match view {
            View::Listing(recipes) => FfiView::Listing {
                names: recipes
                    .into_iter()
                    .map(|recipe| recipe.name().to_string())
                    .collect(),
            },
            View::Detail(recipe) => FfiView::Detail {
                recipe: FfiRecipe::from(recipe),
            },
        }
    }
}

/// FFI-safe handle on a loaded recipe collection.
#[derive(uniffi::Object)]
pub struct FfiRecipeBook {
    inner: Arc<RecipeBook>,
}

#[uniffi::export]
impl FfiRecipeBook {
    /// Returns the number of recipes.
    pub fn len(&self) -> u32 {
        self.inner.len() as u32
    }

    /// Returns true if the collection has no recipes.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns all recipe names in collection order.
    pub fn names(&self) -> Vec<String> {
        self.inner.names().into_iter().map(str::to_string).collect()
    }

    /// Returns the names containing `query`, ignoring case.
    pub fn search(&self, query: String) -> Vec<String> {
        self.inner
            .search(&query)
            .into_iter()
            .map(|recipe| recipe.name().to_string())
            .collect()
    }

    /// Returns a recipe by exact name.
    pub fn recipe(&self, name: String) -> Option<FfiRecipe> {
        self.inner.get(&name).map(FfiRecipe::from)
    }
}

/// Result of [`load_recipe_book`]: the book, empty on failure, plus the
/// message to show the user if loading failed.
#[derive(uniffi::Record)]
pub struct FfiLoadResult {
    pub book: Arc<FfiRecipeBook>,
    pub diagnostic: Option<String>,
}

/// Browsing state for one UI session.
#[derive(uniffi::Object)]
pub struct FfiSession {
    book: Arc<RecipeBook>,
    inner: Mutex<Session>,
}

impl FfiSession {
    fn session(&self) -> MutexGuard<'_, Session> {
        // a panic while holding the lock leaves the session usable
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl FfiSession {
    /// Starts a session on the listing view.
    #[uniffi::constructor]
    pub fn new(book: Arc<FfiRecipeBook>) -> Arc<Self> {
        Arc::new(FfiSession {
            book: Arc::clone(&book.inner),
            inner: Mutex::new(Session::new()),
        })
    }

    /// Sets the listing search query.
    pub fn set_query(&self, query: String) {
        self.session().set_query(query);
    }

    /// Opens the detail view of a recipe.
    pub fn select_recipe(&self, name: String) -> Result<(), RecetarioError> {
        self.session()
            .select_recipe(&self.book, &name)
            .map_err(Into::into)
    }

    /// Returns to the listing.
    pub fn go_back(&self) {
        self.session().go_back();
    }

    /// Returns the current view.
    ///
    /// Fails with `UnknownRecipe` if the selected recipe is gone; the session
    /// is then back on the listing.
    pub fn current_view(&self) -> Result<FfiView, RecetarioError> {
        let mut session = self.session();
        let view = session.view(&self.book)?;
        Ok(FfiView::from(view))
    }

    /// Flips an ingredient's checkbox and returns the new state.
    pub fn toggle_ingredient(&self, recipe: String, path: Vec<String>) -> bool {
        self.session().toggle_ingredient(&recipe, &path)
    }

    /// Returns whether an ingredient is checked.
    pub fn is_checked(&self, recipe: String, path: Vec<String>) -> bool {
        self.session().is_checked(&recipe, &path)
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Loads a recipe collection from a JSON or YAML file.
///
/// Never fails: a missing or malformed file yields an empty book and a
/// diagnostic message for the user.
#[uniffi::export]
pub fn load_recipe_book(path: String) -> FfiLoadResult {
    let store = RecipeStore::new(path);
    let diagnostic = RefCell::new(None);
    let book = store.load(&|message: &str| *diagnostic.borrow_mut() = Some(message.to_string()));

    FfiLoadResult {
        book: Arc::new(FfiRecipeBook { inner: book }),
        diagnostic: diagnostic.into_inner(),
    }
}

/// Loads a recipe collection, returning the load error instead of an empty book.
#[uniffi::export]
pub fn try_load_recipe_book(path: String) -> Result<Arc<FfiRecipeBook>, RecetarioError> {
    let book = RecipeBook::from_path(Utf8Path::new(&path))?;
    Ok(Arc::new(FfiRecipeBook {
        inner: Arc::new(book),
    }))
}

/// Parses a JSON recipe collection held in memory.
#[uniffi::export]
pub fn recipe_book_from_json(json: String) -> Result<Arc<FfiRecipeBook>, RecetarioError> {
    let book = RecipeBook::from_json_str(&json)?;
    Ok(Arc::new(FfiRecipeBook {
        inner: Arc::new(book),
    }))
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    const RECETAS: &str = indoc! {r#"
        {
            "Paella": {
                "imagen": "/imagenes/paella.jpg",
                "Ingredientes": {
                    "Arroz": {"Cantidad": "400", "Unidad": "g"},
                    "Sofrito": {
                        "Tomate": {"Cantidad": "2"},
                        "Ajo": {"Cantidad": "3", "Unidad": "dientes"}
                    }
                },
                "Instrucciones": ["Hacer el sofrito", "Añadir el arroz"]
            },
            "Pollo al horno": {}
        }"#};

    #[test]
    fn test_recipe_book_from_json() {
        let book = recipe_book_from_json(RECETAS.to_string()).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.names(), vec!["Paella", "Pollo al horno"]);
        assert_eq!(book.search("POLLO".to_string()), vec!["Pollo al horno"]);

        let paella = book.recipe("Paella".to_string()).unwrap();
        assert_eq!(paella.summary, "Arroz, Sofrito");
        let texts: Vec<&str> = paella.ingredients.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Arroz: 400 g", "Sofrito:", "Tomate: 2", "Ajo: 3 dientes"]);
        assert_eq!(paella.ingredients[1].kind, FfiLineKind::GroupHeader);
        assert_eq!(paella.ingredients[2].depth, 1);
        assert_eq!(paella.steps[1].number, 2);
    }

    #[test]
    fn test_load_missing_file_returns_diagnostic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recetas.json");

        let result = load_recipe_book(path.to_str().unwrap().to_string());
        assert!(result.book.is_empty());
        assert!(result.diagnostic.unwrap().contains("recetas.json"));

        let err = try_load_recipe_book(path.to_str().unwrap().to_string()).err().unwrap();
        assert!(matches!(err, RecetarioError::DataUnavailable { .. }));
    }

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recetas.json");
        fs::write(&path, RECETAS).unwrap();

        let result = load_recipe_book(path.to_str().unwrap().to_string());
        assert!(result.diagnostic.is_none());
        assert_eq!(result.book.len(), 2);
    }

    #[test]
    fn test_malformed_json() {
        let err = recipe_book_from_json("[1, 2]".to_string()).err().unwrap();
        assert!(matches!(err, RecetarioError::MalformedData { .. }));
    }

    #[test]
    fn test_session_flow() {
        let book = recipe_book_from_json(RECETAS.to_string()).unwrap();
        let session = FfiSession::new(book);

        session.set_query("paella".to_string());
        match session.current_view().unwrap() {
            FfiView::Listing { names } => assert_eq!(names, vec!["Paella"]),
            FfiView::Detail { .. } => panic!("expected listing"),
        }

        let err = session.select_recipe("Gazpacho".to_string()).unwrap_err();
        assert!(matches!(err, RecetarioError::UnknownRecipe { name } if name == "Gazpacho"));

        session.select_recipe("Paella".to_string()).unwrap();
        match session.current_view().unwrap() {
            FfiView::Detail { recipe } => assert_eq!(recipe.name, "Paella"),
            FfiView::Listing { .. } => panic!("expected detail"),
        }

        let tomate = vec!["Sofrito".to_string(), "Tomate".to_string()];
        assert!(session.toggle_ingredient("Paella".to_string(), tomate.clone()));
        session.go_back();
        assert!(session.is_checked("Paella".to_string(), tomate));
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
