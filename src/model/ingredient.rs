use serde_json::{Map, Value};

/// Keys that carry the quantity of a leaf ingredient.
pub const QUANTITY_KEYS: &[&str] = &["Cantidad", "quantity"];

/// Keys that carry the unit of a leaf ingredient.
pub const UNIT_KEYS: &[&str] = &["Unidad", "unit"];

/// A single node of an ingredient tree.
///
/// A node is a [`Leaf`] when the stored value is not a mapping, or when it is
/// a mapping with a quantity or unit key. Every other mapping is a group whose
/// entries are ingredient nodes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingredient {
    Leaf(Leaf),
    Group(IngredientMap),
}

/// The terminal part of an ingredient tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// A `{quantity?, unit?}` mapping. The empty mapping lands here with both absent.
    Measure {
        quantity: Option<String>,
        unit: Option<String>,
    },
    /// A bare string, number or boolean.
    Value(String),
    /// A value that is neither a mapping nor a scalar, kept as its raw JSON text.
    Raw(String),
    /// An explicit `null`.
    Empty,
}

impl Leaf {
    /// Creates a measured leaf from optional quantity and unit.
    pub fn measure(quantity: Option<&str>, unit: Option<&str>) -> Self {
        Leaf::Measure {
            quantity: quantity.and_then(non_blank),
            unit: unit.and_then(non_blank),
        }
    }

    /// Returns the text shown after `"<name>: "`, or `None` when only the
    /// name should be displayed.
    pub fn describe(&self) -> Option<String> {
        match self {
            Leaf::Measure { quantity, unit } => match (quantity, unit) {
                (Some(quantity), Some(unit)) => Some(format!("{quantity} {unit}")),
                (Some(quantity), None) => Some(quantity.clone()),
                (None, Some(unit)) => Some(unit.clone()),
                (None, None) => None,
            },
            Leaf::Value(value) => non_blank(value),
            Leaf::Raw(raw) => Some(raw.clone()),
            Leaf::Empty => None,
        }
    }
}

impl Ingredient {
    /// Classifies a stored value. Never fails: values that fit no known shape
    /// become [`Leaf::Raw`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                let quantity = lookup(map, QUANTITY_KEYS);
                let unit = lookup(map, UNIT_KEYS);
                // quantity/unit wins over nesting; any other keys are not shown
                if quantity.is_some() || unit.is_some() || map.is_empty() {
                    Ingredient::Leaf(Leaf::Measure {
                        quantity: quantity.and_then(scalar_text),
                        unit: unit.and_then(scalar_text),
                    })
                } else {
                    Ingredient::Group(IngredientMap::from_object(map))
                }
            }
            Value::Null => Ingredient::Leaf(Leaf::Empty),
            Value::String(text) => Ingredient::Leaf(Leaf::Value(text.clone())),
            Value::Number(number) => Ingredient::Leaf(Leaf::Value(number.to_string())),
            Value::Bool(flag) => Ingredient::Leaf(Leaf::Value(flag.to_string())),
            Value::Array(_) => Ingredient::Leaf(Leaf::Raw(value.to_string())),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Ingredient::Group(_))
    }
}

/// An insertion-ordered mapping from ingredient name to [`Ingredient`].
///
/// Order is the display order, so entries are never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientMap {
    entries: Vec<(String, Ingredient)>,
}

impl IngredientMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_object(map: &Map<String, Value>) -> Self {
        map.iter()
            .map(|(name, value)| (name.clone(), Ingredient::from_value(value)))
            .collect()
    }

    /// Inserts an entry. An existing name keeps its position and gets the new value.
    pub fn insert(&mut self, name: impl Into<String>, ingredient: Ingredient) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = ingredient,
            None => self.entries.push((name, ingredient)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, ingredient)| ingredient)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ingredient)> {
        self.entries
            .iter()
            .map(|(name, ingredient)| (name.as_str(), ingredient))
    }

    /// Top-level ingredient names in stored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn entries(&self) -> &[(String, Ingredient)] {
        &self.entries
    }
}

impl FromIterator<(String, Ingredient)> for IngredientMap {
    fn from_iter<I: IntoIterator<Item = (String, Ingredient)>>(iter: I) -> Self {
        let mut map = IngredientMap::new();
        for (name, ingredient) in iter {
            map.insert(name, ingredient);
        }
        map
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => non_blank(text),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quantity_and_unit_is_leaf() {
        let node = Ingredient::from_value(&json!({"Cantidad": "1", "Unidad": "pizca"}));
        assert_eq!(node, Ingredient::Leaf(Leaf::measure(Some("1"), Some("pizca"))));
    }

    #[test]
    fn test_english_keys_are_recognised() {
        let node = Ingredient::from_value(&json!({"quantity": 2, "unit": "cups"}));
        assert_eq!(node, Ingredient::Leaf(Leaf::measure(Some("2"), Some("cups"))));
    }

    #[test]
    fn test_empty_mapping_is_degenerate_leaf() {
        let node = Ingredient::from_value(&json!({}));
        assert_eq!(node, Ingredient::Leaf(Leaf::measure(None, None)));
    }

    #[test]
    fn test_mapping_without_measure_keys_is_group() {
        let node = Ingredient::from_value(&json!({
            "Tomate": {"Cantidad": "2"},
            "Ajo": "1 diente"
        }));
        let Ingredient::Group(children) = node else {
            panic!("expected a group");
        };
        assert_eq!(children.names().collect::<Vec<_>>(), vec!["Tomate", "Ajo"]);
    }

    #[test]
    fn test_measure_keys_win_over_nested_children() {
        let node = Ingredient::from_value(&json!({
            "Cantidad": "500",
            "Unidad": "g",
            "Harina integral": {"Cantidad": "100"}
        }));
        assert!(!node.is_group());
    }

    #[test]
    fn test_scalars_and_raw_values() {
        assert_eq!(
            Ingredient::from_value(&json!("al gusto")),
            Ingredient::Leaf(Leaf::Value("al gusto".to_string()))
        );
        assert_eq!(
            Ingredient::from_value(&json!(3)),
            Ingredient::Leaf(Leaf::Value("3".to_string()))
        );
        assert_eq!(
            Ingredient::from_value(&json!(null)),
            Ingredient::Leaf(Leaf::Empty)
        );
        assert_eq!(
            Ingredient::from_value(&json!(["a", "b"])),
            Ingredient::Leaf(Leaf::Raw(r#"["a","b"]"#.to_string()))
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Leaf::measure(Some("1"), Some("pizca")).describe().as_deref(),
            Some("1 pizca")
        );
        assert_eq!(Leaf::measure(Some("1"), None).describe().as_deref(), Some("1"));
        assert_eq!(Leaf::measure(None, Some("g")).describe().as_deref(), Some("g"));
        assert_eq!(Leaf::measure(Some("  "), Some("")).describe(), None);
        assert_eq!(Leaf::Empty.describe(), None);
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut map = IngredientMap::new();
        map.insert("Sal", Ingredient::Leaf(Leaf::Empty));
        map.insert("Aceite", Ingredient::Leaf(Leaf::Empty));
        map.insert("Sal", Ingredient::Leaf(Leaf::Value("1".to_string())));

        assert_eq!(map.len(), 2);
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["Sal", "Aceite"]);
        assert_eq!(
            map.get("Sal"),
            Some(&Ingredient::Leaf(Leaf::Value("1".to_string())))
        );
    }
}
