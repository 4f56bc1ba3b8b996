//! Recipe data enrichment.
//!
//! This module attaches a derived `image` path to every recipe in a dataset.
//! The path is a pure function of the recipe's English name, so enriching an
//! already-enriched dataset produces the same paths again.

use crate::config::ImageNaming;
use crate::models::{Dataset, Recipe};
use crate::slug::image_path_for;
use log::{debug, trace};

/// Counts gathered while enriching a dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationReport {
    /// Number of categories visited
    pub categories: usize,
    /// Number of recipes visited
    pub recipes: usize,
    /// Recipes that received a non-empty image path
    pub with_image: usize,
    /// Recipes whose English name was missing or blank
    pub without_image: usize,
}

/// Sets the `image` field of a single recipe and returns the assigned path
pub fn enrich_recipe(recipe: &mut Recipe, naming: &ImageNaming) -> String {
    let path = image_path_for(recipe.english_name(), naming);
    recipe.set_image(path.clone());
    path
}

/// Enriches every recipe in the dataset with its image path
///
/// Any previous `image` value is overwritten. Category and recipe order are
/// left as they are and no other field is touched.
///
/// # Arguments
///
/// * `dataset` - The dataset to enrich in place
/// * `naming` - Prefix and extension used to build each path
pub fn enrich_recipes_with_images(dataset: &mut Dataset, naming: &ImageNaming) -> AnnotationReport {
    let mut report = AnnotationReport::default();

    for (category, recipes) in dataset.categories_mut() {
        debug!("Annotating {} recipes in category '{}'", recipes.len(), category);
        report.categories += 1;

        for recipe in recipes.iter_mut() {
            let path = enrich_recipe(recipe, naming);
            if path.is_empty() {
                trace!("Recipe without an English name in category '{}'", category);
                report.without_image += 1;
            } else {
                report.with_image += 1;
            }
            report.recipes += 1;
        }
    }

    report
}

/// Returns the dataset with every recipe annotated using the default naming
///
/// # Examples
///
/// ```
/// use recipe_image_annotator::enrich::annotate;
/// use recipe_image_annotator::models::Dataset;
///
/// let dataset: Dataset = serde_json::from_str(
///     r#"{"Soups": [{"recipe name": {"english": "Tomato Soup"}}]}"#,
/// ).unwrap();
/// let dataset = annotate(dataset);
///
/// assert_eq!(dataset.get("Soups").unwrap()[0].image(), Some("/images/tomato-soup.jpg"));
/// ```
pub fn annotate(mut dataset: Dataset) -> Dataset {
    enrich_recipes_with_images(&mut dataset, &ImageNaming::default());
    dataset
}
