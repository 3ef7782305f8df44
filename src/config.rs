use crate::image::FsImageResolver;
use crate::model::DEFAULT_SUMMARY_INGREDIENTS;
use crate::store::RecipeStore;
use camino::Utf8PathBuf;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Recipe source file (JSON, or YAML by extension)
    #[serde(default = "default_source")]
    pub source: Utf8PathBuf,
    /// Directory stored image paths are resolved against
    #[serde(default = "default_image_root")]
    pub image_root: Utf8PathBuf,
    /// Number of ingredient names shown on a listing card
    #[serde(default = "default_summary_ingredients")]
    pub summary_ingredients: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: default_source(),
            image_root: default_image_root(),
            summary_ingredients: default_summary_ingredients(),
        }
    }
}

fn default_source() -> Utf8PathBuf {
    Utf8PathBuf::from("recetas.json")
}

fn default_image_root() -> Utf8PathBuf {
    Utf8PathBuf::from(".")
}

fn default_summary_ingredients() -> usize {
    DEFAULT_SUMMARY_INGREDIENTS
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECETARIO__ prefix
    /// 2. recetario.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECETARIO__SOURCE, RECETARIO__IMAGE_ROOT
    pub fn load() -> Result<Self, ConfigError> {
        load_settings()
    }

    /// A load-once store for the configured source.
    pub fn store(&self) -> RecipeStore {
        RecipeStore::new(self.source.clone())
    }

    pub fn image_resolver(&self) -> FsImageResolver {
        FsImageResolver::new(self.image_root.clone())
    }
}

/// Load settings from file and environment variables
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_with(settings_environment())
}

fn settings_environment() -> Environment {
    Environment::with_prefix("RECETARIO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_with(environment: Environment) -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional settings file (can be missing)
        .add_source(File::with_name("recetario").required(false))
        .add_source(environment)
        .build()?;

    settings.try_deserialize()
}
