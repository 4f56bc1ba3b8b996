//! Reading and writing dataset documents.
//!
//! Documents are UTF-8 JSON. Output is indented with two spaces and keeps
//! non-ASCII characters literal.

use crate::error::AnnotatorError;
use crate::models::Dataset;
use log::info;
use std::fs;
use std::path::Path;

/// Loads a dataset from a JSON file
///
/// # Errors
///
/// [`AnnotatorError::Read`] if the file cannot be read, and
/// [`AnnotatorError::Parse`] if it is not JSON shaped as a dataset.
pub fn load_dataset(path: &Path) -> Result<Dataset, AnnotatorError> {
    let contents = fs::read_to_string(path).map_err(|source| AnnotatorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset: Dataset =
        serde_json::from_str(&contents).map_err(|source| AnnotatorError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        "Loaded {} recipes in {} categories from {}",
        dataset.recipe_count(),
        dataset.category_count(),
        path.display()
    );
    Ok(dataset)
}

/// Renders a dataset as indented JSON
pub fn to_pretty_json(dataset: &Dataset) -> Result<String, AnnotatorError> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Writes a dataset to a JSON file, replacing any existing file
pub fn save_dataset(dataset: &Dataset, path: &Path) -> Result<(), AnnotatorError> {
    let json = to_pretty_json(dataset)?;
    fs::write(path, json).map_err(|source| AnnotatorError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} recipes to {}", dataset.recipe_count(), path.display());
    Ok(())
}
