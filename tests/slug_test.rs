use recipe_image_annotator::config::ImageNaming;
use recipe_image_annotator::slug::{image_path_for, slugify, to_filename};

#[test]
fn test_to_filename() {
    assert_eq!(to_filename("Tomato Soup", ".jpg"), "tomato-soup.jpg");
    assert_eq!(to_filename("  Spicy   Bean   Stew  ", ".jpg"), "spicy-bean-stew.jpg");
    assert_eq!(to_filename("Dal", ".png"), "dal.png");
}

#[test]
fn test_image_path_for_default_naming() {
    let naming = ImageNaming::default();

    assert_eq!(image_path_for("Tomato Soup", &naming), "/images/tomato-soup.jpg");
    assert_eq!(
        image_path_for("\tAloo\r\nGobi ", &naming),
        "/images/aloo-gobi.jpg"
    );
    assert_eq!(image_path_for("", &naming), "");
}

#[test]
fn test_slugify_is_stable() {
    let names = ["Tomato Soup", "  Spicy   Bean   Stew  ", "Crème Brûlée", "A\tB\nC"];

    for name in names {
        let once = slugify(name);
        assert_eq!(slugify(&once), once);
        assert!(!once.chars().any(char::is_whitespace));
        assert_eq!(once, once.to_lowercase());
    }
}
