use serde::Serialize;

/// What a [`DisplayLine`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    GroupHeader,
    Item,
}

/// One line of a formatted ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    pub kind: LineKind,
    /// Nesting level, 0 for top-level ingredients
    pub depth: usize,
    pub text: String,
    /// Ingredient names from the top level down to this line
    pub path: Vec<String>,
}

impl DisplayLine {
    pub(crate) fn header(depth: usize, text: String, path: Vec<String>) -> Self {
        DisplayLine {
            kind: LineKind::GroupHeader,
            depth,
            text,
            path,
        }
    }

    pub(crate) fn item(depth: usize, text: String, path: Vec<String>) -> Self {
        DisplayLine {
            kind: LineKind::Item,
            depth,
            text,
            path,
        }
    }

    pub fn is_header(&self) -> bool {
        self.kind == LineKind::GroupHeader
    }

    /// The text prefixed by `width` spaces per nesting level.
    pub fn indented(&self, width: usize) -> String {
        format!("{}{}", " ".repeat(self.depth * width), self.text)
    }
}
