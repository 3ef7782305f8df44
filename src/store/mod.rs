//! Recipe source loading.
//!
//! [`RecipeBook::from_path`] reads and parses a recipe source file once.
//! [`RecipeStore`] wraps it as the owned, load-once handle a UI shares
//! between readers: the first [`RecipeStore::load`] reads the file and every
//! later call returns the same [`RecipeBook`].

use crate::model::{RecipeBook, ShapeError};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, error, info};
use serde_json::Value;
use std::io;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Errors that can occur when loading a recipe source.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Recipe source not available: {path}")]
    DataUnavailable {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed recipe data in {origin}: {reason}")]
    MalformedData { origin: String, reason: String },
}

impl LoadError {
    fn malformed(origin: impl Into<String>, reason: impl ToString) -> Self {
        LoadError::MalformedData {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

/// How a recipe source file is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// `.yaml` and `.yml` files are YAML, everything else is read as JSON.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("yaml" | "yml") => SourceFormat::Yaml,
            _ => SourceFormat::Json,
        }
    }
}

/// Receives user-facing messages about load failures.
pub trait Diagnostics {
    fn report(&self, message: &str);
}

impl<F: Fn(&str)> Diagnostics for F {
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, message: &str) {
        error!("{message}");
    }
}

impl RecipeBook {
    /// Reads and parses the recipe source at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DataUnavailable`] if the file cannot be read and
    /// [`LoadError::MalformedData`] if its content is not a recipe collection.
    pub fn from_path(path: &Utf8Path) -> Result<Self, LoadError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(LoadError::malformed(path.as_str(), e));
            }
            Err(source) => {
                return Err(LoadError::DataUnavailable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let format = SourceFormat::from_path(path);
        debug!("Parsing {path} as {format:?}");
        parse(&text, format, path.as_str())
    }

    /// Parses a JSON recipe collection.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        parse(text, SourceFormat::Json, "<json>")
    }

    /// Parses a YAML recipe collection.
    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        parse(text, SourceFormat::Yaml, "<yaml>")
    }
}

fn parse(text: &str, format: SourceFormat, origin: &str) -> Result<RecipeBook, LoadError> {
    let value: Value = match format {
        SourceFormat::Json => {
            serde_json::from_str(text).map_err(|e| LoadError::malformed(origin, e))?
        }
        SourceFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| LoadError::malformed(origin, e))?
        }
    };

    RecipeBook::from_value(&value).map_err(|e: ShapeError| LoadError::malformed(origin, e))
}

struct Loaded {
    book: Arc<RecipeBook>,
    failure: Option<String>,
}

/// Load-once handle on a recipe source file.
///
/// # Examples
///
/// ```no_run
/// use recetario::{LogDiagnostics, RecipeStore};
///
/// let store = RecipeStore::new("recetas.json");
/// let book = store.load(&LogDiagnostics);
/// for name in book.names() {
///     println!("{name}");
/// }
/// ```
pub struct RecipeStore {
    path: Utf8PathBuf,
    loaded: OnceLock<Loaded>,
}

impl RecipeStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        RecipeStore {
            path: path.into(),
            loaded: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the recipe collection, reading the source on the first call.
    ///
    /// A source that is missing or malformed yields an empty collection. The
    /// failure is reported to `diagnostics` on every call, so each caller's
    /// UI can show it; the file is still read only once.
    pub fn load(&self, diagnostics: &dyn Diagnostics) -> Arc<RecipeBook> {
        let loaded = self.loaded.get_or_init(|| match RecipeBook::from_path(&self.path) {
            Ok(book) => {
                info!("Loaded {} recipes from {}", book.len(), self.path);
                Loaded {
                    book: Arc::new(book),
                    failure: None,
                }
            }
            Err(e) => {
                error!("Failed to load recipes: {e}");
                Loaded {
                    book: Arc::new(RecipeBook::default()),
                    failure: Some(e.to_string()),
                }
            }
        });

        if let Some(failure) = &loaded.failure {
            diagnostics.report(failure);
        }
        Arc::clone(&loaded.book)
    }

    /// The failure message of the first load, if it failed.
    pub fn failure(&self) -> Option<&str> {
        self.loaded.get()?.failure.as_deref()
    }
}
