pub mod config;
pub mod ffi;
pub mod format;
pub mod image;
pub mod model;
pub mod navigation;
pub mod search;
pub mod session;
pub mod store;

pub use crate::config::Settings;
pub use format::{format, DisplayLine, LineKind};
pub use image::{FsImageResolver, ImageResolver, ImageVariant, ResolvedImage};
pub use model::*;
pub use navigation::{NavigationError, Navigator, View, ViewState};
pub use search::filter;
pub use session::{Checklist, Session};
pub use store::{Diagnostics, LoadError, LogDiagnostics, RecipeStore, SourceFormat};

uniffi::setup_scaffolding!();
