/// A prepared, case-insensitive name query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Lowercased, trimmed needle; `None` matches everything
    needle: Option<String>,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.needle {
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}
