//! Binary frontend for the recipe-image-annotator library.
//!
//! Reads `MealMaster.json` from the working directory and writes
//! `MealMaster_with_images.json` next to it.

use log::error;
use recipe_image_annotator::config::DEFAULT_OUTPUT_PATH;
use recipe_image_annotator::{run, AnnotatorConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Errors always reach stderr; RUST_LOG=info or lower adds progress
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    match run(&AnnotatorConfig::default()) {
        Ok(_) => {
            println!("✅ {} created with image links.", DEFAULT_OUTPUT_PATH);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Annotation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
