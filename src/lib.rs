//! A Rust library for annotating MealMaster recipe datasets with image paths.
//!
//! This library reads a JSON dataset of recipes grouped by category, derives
//! an image path for each recipe from its English name, and writes the
//! augmented dataset back out. Every field it does not derive is passed
//! through unchanged.
//!
//! # Logging
//!
//! Progress goes through the [`log`] facade; the binary wires it to
//! [`env_logger`]. At `info` a run reports the loaded and written recipe
//! counts plus a summary of how many recipes got an image. `debug` adds one
//! line per category and `trace` one line per assigned path.
//!
//! ```
//! // RUST_LOG=debug shows the per-category lines
//! env_logger::init();
//! ```

/// Module containing run configuration and image naming defaults
pub mod config;

/// Module containing the error type
pub mod error;

/// Module containing data model structures
pub mod models;

/// Module deriving filenames from recipe names
pub mod slug;

/// Module for enriching recipes with their image paths
pub mod enrich;

/// Module for reading and writing dataset files
pub mod dataset_io;

pub use config::AnnotatorConfig;
pub use enrich::{annotate, AnnotationReport};
pub use error::AnnotatorError;
pub use models::{Dataset, Recipe};

use log::info;

/// Main entry point for annotating a dataset file
///
/// This function orchestrates the entire process of:
/// 1. Loading the dataset from the configured input path
/// 2. Enriching every recipe with its image path
/// 3. Writing the enriched dataset to the configured output path
///
/// Nothing is written if loading fails.
///
/// # Arguments
///
/// * `config` - Paths and image naming for this run
///
/// # Returns
///
/// A Result containing the counts gathered during enrichment
pub fn run(config: &AnnotatorConfig) -> Result<AnnotationReport, AnnotatorError> {
    // 1. Load the dataset
    let mut dataset = dataset_io::load_dataset(&config.input_path)?;

    // 2. Enrich every recipe
    let report = enrich::enrich_recipes_with_images(&mut dataset, &config.naming);

    // 3. Write the result
    dataset_io::save_dataset(&dataset, &config.output_path)?;

    info!(
        "Annotated {} recipes in {} categories ({} with images, {} without)",
        report.recipes, report.categories, report.with_image, report.without_image
    );
    Ok(report)
}
