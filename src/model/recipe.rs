use super::ingredient::IngredientMap;
use super::ShapeError;
use crate::format::{format, DisplayLine};
use serde_json::{Map, Value};

const IMAGE_KEYS: &[&str] = &["image", "imagen"];
const INGREDIENT_KEYS: &[&str] = &["ingredients", "Ingredientes"];
const INSTRUCTION_KEYS: &[&str] = &["instructions", "Instrucciones"];

/// Number of ingredient names a listing card shows before `...`.
pub const DEFAULT_SUMMARY_INGREDIENTS: usize = 4;

/// A single recipe of the collection.
///
/// # Examples
///
/// ```
/// use recetario::{Ingredient, IngredientMap, Leaf, Recipe};
///
/// let ingredients: IngredientMap = [
///     ("Arroz".to_string(), Ingredient::Leaf(Leaf::measure(Some("400"), Some("g")))),
///     ("Sal".to_string(), Ingredient::Leaf(Leaf::Value("al gusto".to_string()))),
/// ]
/// .into_iter()
/// .collect();
///
/// let recipe = Recipe::new("Paella").with_ingredients(ingredients);
/// assert_eq!(recipe.summary(4), "Arroz, Sal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    image: Option<String>,
    ingredients: IngredientMap,
    instructions: Vec<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Recipe {
            name: name.into(),
            image: None,
            ingredients: IngredientMap::default(),
            instructions: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_ingredients(mut self, ingredients: IngredientMap) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_instructions<S: Into<String>>(
        mut self,
        instructions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    /// Builds a recipe from its stored record.
    pub(crate) fn from_value(name: &str, value: &Value) -> Result<Self, ShapeError> {
        let invalid = |reason: &str| ShapeError::Recipe {
            recipe: name.to_string(),
            reason: reason.to_string(),
        };

        let Value::Object(record) = value else {
            return Err(invalid("record is not a mapping"));
        };

        let image = match lookup(record, IMAGE_KEYS) {
            None | Some(Value::Null) => None,
            Some(Value::String(path)) if path.trim().is_empty() => None,
            Some(Value::String(path)) => Some(path.clone()),
            Some(_) => return Err(invalid("image is not a string")),
        };

        let ingredients = match lookup(record, INGREDIENT_KEYS) {
            None | Some(Value::Null) => IngredientMap::default(),
            Some(Value::Object(map)) => IngredientMap::from_object(map),
            Some(_) => return Err(invalid("ingredients are not a mapping")),
        };

        let instructions = match lookup(record, INSTRUCTION_KEYS) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(steps)) => steps
                .iter()
                .enumerate()
                .map(|(index, step)| match step {
                    Value::String(text) => Ok(text.clone()),
                    Value::Number(number) => Ok(number.to_string()),
                    _ => Err(invalid(&format!("step {} is not text", index + 1))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(invalid("instructions are not a list")),
        };

        Ok(Recipe {
            name: name.to_string(),
            image,
            ingredients,
            instructions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored image path, if any. It is not checked against the filesystem.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn ingredients(&self) -> &IngredientMap {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Instruction steps numbered from 1.
    pub fn steps(&self) -> impl Iterator<Item = (usize, &str)> {
        self.instructions
            .iter()
            .enumerate()
            .map(|(index, step)| (index + 1, step.as_str()))
    }

    /// Short description for listing cards: the first `limit` top-level
    /// ingredient names, followed by `...` when there are more.
    pub fn summary(&self, limit: usize) -> String {
        let names: Vec<&str> = self.ingredients.names().take(limit).collect();
        let mut summary = names.join(", ");
        if self.ingredients.len() > limit {
            summary.push_str("...");
        }
        summary
    }

    /// The ingredient tree flattened for display.
    pub fn display_ingredients(&self) -> Vec<DisplayLine> {
        format(&self.ingredients, 0)
    }
}

fn lookup<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(*key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_from_spanish_record() {
        let value = json!({
            "imagen": "/imagenes/paella.jpg",
            "Ingredientes": {
                "Arroz": {"Cantidad": "400", "Unidad": "g"},
                "Azafrán": {"Cantidad": "1", "Unidad": "pizca"}
            },
            "Instrucciones": ["Sofreír", "Añadir el arroz"]
        });

        let recipe = Recipe::from_value("Paella", &value).unwrap();
        assert_eq!(recipe.name(), "Paella");
        assert_eq!(recipe.image(), Some("/imagenes/paella.jpg"));
        assert_eq!(recipe.ingredients().len(), 2);
        assert_eq!(
            recipe.steps().collect::<Vec<_>>(),
            vec![(1, "Sofreír"), (2, "Añadir el arroz")]
        );
    }

    #[test]
    fn test_recipe_from_english_record() {
        let value = json!({
            "image": "tarta.png",
            "ingredients": {"Eggs": {"quantity": "3"}},
            "instructions": ["Whisk"]
        });

        let recipe = Recipe::from_value("Tarta", &value).unwrap();
        assert_eq!(recipe.image(), Some("tarta.png"));
        assert_eq!(recipe.instructions(), ["Whisk".to_string()]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let recipe = Recipe::from_value("Vacía", &json!({})).unwrap();
        assert!(recipe.image().is_none());
        assert!(recipe.ingredients().is_empty());
        assert!(recipe.instructions().is_empty());
        assert_eq!(recipe.summary(DEFAULT_SUMMARY_INGREDIENTS), "");
    }

    #[test]
    fn test_blank_image_is_absent() {
        let recipe = Recipe::from_value("Sopa", &json!({"imagen": "  "})).unwrap();
        assert!(recipe.image().is_none());
    }

    #[test]
    fn test_malformed_records() {
        assert!(Recipe::from_value("A", &json!("text")).is_err());
        assert!(Recipe::from_value("A", &json!({"Ingredientes": ["Sal"]})).is_err());
        assert!(Recipe::from_value("A", &json!({"Instrucciones": "Mezclar"})).is_err());
        assert!(Recipe::from_value("A", &json!({"imagen": 3})).is_err());

        let err = Recipe::from_value("A", &json!({"Instrucciones": ["Mezclar", {}]})).unwrap_err();
        assert_eq!(err.to_string(), r#"recipe "A": step 2 is not text"#);
    }

    #[test]
    fn test_summary_truncates_after_limit() {
        let value = json!({
            "Ingredientes": {
                "Harina": "500 g",
                "Huevos": "3",
                "Azúcar": "200 g",
                "Leche": "1 vaso",
                "Levadura": "1 sobre"
            }
        });
        let recipe = Recipe::from_value("Bizcocho", &value).unwrap();

        assert_eq!(
            recipe.summary(DEFAULT_SUMMARY_INGREDIENTS),
            "Harina, Huevos, Azúcar, Leche..."
        );
        assert_eq!(
            recipe.summary(5),
            "Harina, Huevos, Azúcar, Leche, Levadura"
        );
    }

    #[test]
    fn test_builder() {
        let recipe = Recipe::new("Tostada")
            .with_image("tostada.jpg")
            .with_instructions(["Tostar el pan", "Untar"]);

        assert_eq!(recipe.image(), Some("tostada.jpg"));
        assert_eq!(recipe.steps().last(), Some((2, "Untar")));
    }
}
