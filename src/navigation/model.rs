use crate::model::Recipe;

/// Which view is active and, for the detail view, which recipe it shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Listing,
    Detail(String),
}

impl ViewState {
    /// The selected recipe name, if the detail view is active.
    pub fn selected(&self) -> Option<&str> {
        match self {
            ViewState::Listing => None,
            ViewState::Detail(name) => Some(name.as_str()),
        }
    }
}

/// The data a UI needs to render the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// Recipes matching the session query, in collection order
    Listing(Vec<&'a Recipe>),
    Detail(&'a Recipe),
}
