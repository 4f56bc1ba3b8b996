//! Filename derivation from recipe names.
//!
//! A slug is the trimmed, lower-cased name with every run of whitespace
//! collapsed to a single hyphen. Nothing else is stripped or escaped, so
//! punctuation and non-ASCII letters survive into the filename.

use crate::config::ImageNaming;
use once_cell::sync::Lazy;
use regex::Regex;

/// Any maximal run of Unicode whitespace
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Converts a name into a slug
///
/// Leading and trailing whitespace is removed before collapsing, so the
/// result never starts or ends with a hyphen produced by this step.
///
/// # Examples
///
/// ```
/// use recipe_image_annotator::slug::slugify;
///
/// assert_eq!(slugify("  Spicy   Bean   Stew  "), "spicy-bean-stew");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    WHITESPACE_RUN.replace_all(&lowered, "-").into_owned()
}

/// Builds the image filename for a name, e.g. `tomato-soup.jpg`
///
/// # Arguments
///
/// * `name` - The recipe name, untrimmed
/// * `extension` - Extension with its leading dot
pub fn to_filename(name: &str, extension: &str) -> String {
    format!("{}{}", slugify(name), extension)
}

/// Derives the image path for a recipe name
///
/// Returns an empty string when the name is empty or whitespace-only;
/// otherwise the prefix followed by the filename.
pub fn image_path_for(name: &str, naming: &ImageNaming) -> String {
    let name = name.trim();
    if name.is_empty() {
        return String::new();
    }
    format!("{}{}", naming.prefix, to_filename(name, &naming.extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Tomato Soup"), "tomato-soup");
        assert_eq!(slugify("Spicy   Bean   Stew"), "spicy-bean-stew");
        assert_eq!(slugify("Chili\t\tcon\nCarne"), "chili-con-carne");
        // NBSP and ideographic space are whitespace too
        assert_eq!(slugify("Pad\u{00A0}Thai\u{3000}Noodles"), "pad-thai-noodles");
    }

    #[test]
    fn test_slugify_keeps_punctuation_and_unicode() {
        assert_eq!(slugify("Mom's Apple-Pie!"), "mom's-apple-pie!");
        assert_eq!(slugify("Crème Brûlée"), "crème-brûlée");
        assert_eq!(slugify("ÄPFEL Strudel"), "äpfel-strudel");
    }

    #[test]
    fn test_image_path_for_empty_names() {
        let naming = ImageNaming::default();
        assert_eq!(image_path_for("", &naming), "");
        assert_eq!(image_path_for("   \t\n ", &naming), "");
    }

    #[test]
    fn test_image_path_for_custom_naming() {
        let naming = ImageNaming {
            prefix: "https://cdn.example.com/img/".to_string(),
            extension: ".webp".to_string(),
        };
        assert_eq!(
            image_path_for("Tomato Soup", &naming),
            "https://cdn.example.com/img/tomato-soup.webp"
        );
    }
}
