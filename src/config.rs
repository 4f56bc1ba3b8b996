//! Run configuration.
//!
//! The binary always runs with [`AnnotatorConfig::default`], which points at
//! the fixed MealMaster file names in the working directory.

use std::path::PathBuf;

/// Input document read by a default run
pub const DEFAULT_INPUT_PATH: &str = "MealMaster.json";

/// Output document written by a default run
pub const DEFAULT_OUTPUT_PATH: &str = "MealMaster_with_images.json";

/// Prefix prepended to every derived image filename
pub const DEFAULT_IMAGE_PREFIX: &str = "/images/";

/// Extension appended to every derived image filename
pub const DEFAULT_IMAGE_EXTENSION: &str = ".jpg";

/// How image paths are built from a slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNaming {
    /// Literal prefix, e.g. `/images/`
    pub prefix: String,
    /// Extension including the leading dot, e.g. `.jpg`
    pub extension: String,
}

impl Default for ImageNaming {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            extension: DEFAULT_IMAGE_EXTENSION.to_string(),
        }
    }
}

/// Paths and naming rules for one annotation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Dataset to read
    pub input_path: PathBuf,
    /// Where the annotated dataset is written
    pub output_path: PathBuf,
    pub naming: ImageNaming,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            naming: ImageNaming::default(),
        }
    }
}

impl AnnotatorConfig {
    /// Builds a config for the given paths with the default image naming
    pub fn with_paths(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            naming: ImageNaming::default(),
        }
    }
}
