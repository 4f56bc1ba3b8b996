//! Data structures for MealMaster recipe datasets.
//!
//! A dataset is an ordered mapping of category name to a list of recipes.
//! Recipes are kept as opaque JSON objects so that every field the annotator
//! does not touch is written back exactly as it was read, in the same order.

use indexmap::IndexMap;
use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the nested object holding a recipe's names by language
pub const RECIPE_NAME_FIELD: &str = "recipe name";

/// Key of the English entry inside [`RECIPE_NAME_FIELD`]
pub const ENGLISH_FIELD: &str = "english";

/// Key of the derived image path
pub const IMAGE_FIELD: &str = "image";

/// A single recipe record
///
/// Only `"recipe name"` and `"image"` have meaning here; everything else is
/// passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe {
    fields: Map<String, Value>,
}

impl Recipe {
    /// Wraps an existing JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The raw English name, or `""` when it is missing
    ///
    /// A `"recipe name"` that is not an object, or an `"english"` entry that
    /// is not a string, counts as missing. The value is not trimmed.
    pub fn english_name(&self) -> &str {
        self.fields
            .get(RECIPE_NAME_FIELD)
            .and_then(Value::as_object)
            .and_then(|names| names.get(ENGLISH_FIELD))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// The current image path, if the recipe has a string `image` field
    pub fn image(&self) -> Option<&str> {
        self.fields.get(IMAGE_FIELD).and_then(Value::as_str)
    }

    /// Sets the `image` field
    ///
    /// An existing `image` keeps its position in the object; a new one is
    /// appended after the other fields.
    pub fn set_image(&mut self, path: String) {
        trace!("Setting image to '{}'", path);
        self.fields.insert(IMAGE_FIELD.to_string(), Value::String(path));
    }

    /// All fields of the recipe, in document order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Unwraps the recipe back into its JSON object
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// Recipes grouped by category, in document order
///
/// A category that appears twice in a document keeps its first position and
/// the recipes of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    categories: IndexMap<String, Vec<Recipe>>,
}

impl Dataset {
    /// Creates a dataset with no categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category, replacing the recipes of an existing one with the same name
    ///
    /// A replaced category keeps its original position.
    pub fn insert(&mut self, category: impl Into<String>, recipes: Vec<Recipe>) {
        self.categories.insert(category.into(), recipes);
    }

    /// Recipes of one category
    pub fn get(&self, category: &str) -> Option<&[Recipe]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Iterates categories in document order
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[Recipe])> {
        self.categories
            .iter()
            .map(|(name, recipes)| (name.as_str(), recipes.as_slice()))
    }

    pub fn categories_mut(&mut self) -> impl Iterator<Item = (&str, &mut Vec<Recipe>)> {
        self.categories
            .iter_mut()
            .map(|(name, recipes)| (name.as_str(), recipes))
    }

    /// Iterates every recipe across all categories
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.categories.values().flatten()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// True when the dataset has no categories at all
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe(value: Value) -> Recipe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_english_name_lookup() {
        assert_eq!(
            recipe(json!({"recipe name": {"english": "Tomato Soup"}})).english_name(),
            "Tomato Soup"
        );
        assert_eq!(recipe(json!({"recipe name": {}})).english_name(), "");
        assert_eq!(recipe(json!({})).english_name(), "");
    }

    #[test]
    fn test_english_name_wrong_types_count_as_missing() {
        assert_eq!(recipe(json!({"recipe name": "Soup"})).english_name(), "");
        assert_eq!(recipe(json!({"recipe name": null})).english_name(), "");
        assert_eq!(recipe(json!({"recipe name": {"english": 42}})).english_name(), "");
        assert_eq!(recipe(json!({"recipe name": {"english": null}})).english_name(), "");
    }

    #[test]
    fn test_set_image_keeps_existing_position() {
        let mut r = recipe(json!({"image": "old", "recipe name": {"english": "A"}}));
        r.set_image("/images/a.jpg".to_string());

        let keys: Vec<&str> = r.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["image", "recipe name"]);
        assert_eq!(r.image(), Some("/images/a.jpg"));
    }

    #[test]
    fn test_insert_replaces_duplicate_category_in_place() {
        let mut dataset = Dataset::new();
        dataset.insert("Soups", vec![Recipe::default()]);
        dataset.insert("Breads", vec![]);
        dataset.insert("Soups", vec![]);

        let names: Vec<&str> = dataset.categories().map(|(name, _)| name).collect();
        assert_eq!(names, ["Soups", "Breads"]);
        assert_eq!(dataset.get("Soups").unwrap().len(), 0);
    }
}
