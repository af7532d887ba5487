//! Recipe page rendering.
//!
//! Turns a parsed [`Recipe`] into a standalone HTML document with
//! [maud](https://maud.lambda.xyz/). The page links the shared stylesheet by a
//! path relative to the page's own directory, and shows a photo when one
//! sits next to the recipe (`<name>.jpg`, `<name>.png`, ...).
//!
//! ## Escaping
//!
//! List items (ingredients, directions, notes) are escaped. The title, the
//! image `alt` text, and the metadata values are written as-is, so inline
//! markup in them reaches the page unchanged. Escaping covers `& < > "`
//! only; apostrophes pass through.

use crate::config::Site;
use crate::recipe::Recipe;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::{Component, Path};

/// Render a recipe found in `directory` as `<base_name>.txt`.
///
/// Probes the filesystem for a sibling image; otherwise pure.
pub fn render(recipe: &Recipe, directory: &Path, base_name: &str, site: &Site) -> String {
    let image = find_image(directory, base_name, &site.config.image_extensions);
    let css = relative_path(directory, &site.stylesheet_path());
    render_recipe(recipe, image.as_deref(), &css).into_string()
}

/// Find `<base_name>.<ext>` in `directory`, trying `extensions` in order.
///
/// Returns the file name (not the full path) of the first one that exists.
pub fn find_image(directory: &Path, base_name: &str, extensions: &[String]) -> Option<String> {
    let found = extensions
        .iter()
        .map(|ext| format!("{base_name}.{ext}"))
        .find(|name| directory.join(name).exists());
    match &found {
        Some(name) => tracing::debug!(dir = %directory.display(), image = %name, "found recipe image"),
        None => tracing::debug!(dir = %directory.display(), base_name, "no recipe image"),
    }
    found
}

/// Path of `target` relative to the directory `from`, joined with `/`.
///
/// Both paths must be expressed against the same base (both absolute, or
/// both relative to the same working directory). `.` components are ignored.
pub fn relative_path(from: &Path, target: &Path) -> String {
    let from: Vec<Component> = from
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let target: Vec<Component> = target
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = from
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..".to_string(), from.len() - common);
    let downs = target[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());
    let parts: Vec<String> = ups.chain(downs).collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// The recipe page document.
pub fn render_recipe(recipe: &Recipe, image: Option<&str>, stylesheet_href: &str) -> Markup {
    let title = PreEscaped(recipe.title.as_str());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                link rel="stylesheet" href=(stylesheet_href);
                title { (title) }
            }
            body {
                h1 { (title) }
                @if let Some(src) = image {
                    img src=(src) alt=(title) class="recipe-image";
                }
                (metadata(recipe))
                h2 { "Ingredients" }
                ul {
                    @for item in &recipe.ingredients {
                        li { (item) }
                    }
                }
                h2 { "Directions" }
                ol {
                    @for step in &recipe.directions {
                        li { (step) }
                    }
                }
                h2 { "Notes" }
                ul {
                    @for note in &recipe.notes {
                        li { (note) }
                    }
                }
            }
        }
    }
}

fn metadata(recipe: &Recipe) -> Markup {
    html! {
        div.metadata {
            "Serves: " (PreEscaped(&recipe.serves))
            br;
            "Active Time: " (PreEscaped(&recipe.prep_time))
            " | Total Time: " (PreEscaped(&recipe.cook_time))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_recipe() -> Recipe {
        Recipe {
            title: "Lentil Soup".to_string(),
            serves: "4".to_string(),
            prep_time: "15 min".to_string(),
            cook_time: "45 min".to_string(),
            ingredients: vec!["Onion".to_string(), "2 cups lentils".to_string()],
            directions: vec!["Chop onion.".to_string(), "Simmer 20 min.".to_string()],
            notes: vec!["Freezes well".to_string()],
        }
    }

    fn default_exts() -> Vec<String> {
        SiteConfig::default().image_extensions
    }

    #[test]
    fn document_structure() {
        let html = render_recipe(&sample_recipe(), None, "../Stylesheet.css").into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains(r#"<meta charset="utf-8">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="../Stylesheet.css">"#));
        assert!(html.contains("<title>Lentil Soup</title>"));
        assert!(html.contains("<h1>Lentil Soup</h1>"));
    }

    #[test]
    fn lists_render_in_order() {
        let html = render_recipe(&sample_recipe(), None, "s.css").into_string();

        assert!(html.contains("<ul><li>Onion</li><li>2 cups lentils</li></ul>"));
        assert!(html.contains("<ol><li>Chop onion.</li><li>Simmer 20 min.</li></ol>"));
        assert!(html.contains("<ul><li>Freezes well</li></ul>"));
    }

    #[test]
    fn metadata_block() {
        let html = render_recipe(&sample_recipe(), None, "s.css").into_string();
        assert!(html.contains(
            r#"<div class="metadata">Serves: 4<br>Active Time: 15 min | Total Time: 45 min</div>"#
        ));
    }

    #[test]
    fn items_escaped_title_raw() {
        let recipe = Recipe {
            title: "<2 cups>".to_string(),
            ingredients: vec!["<2 cups>".to_string()],
            directions: vec!["Stir & serve".to_string()],
            notes: vec!["\"hot\"".to_string()],
            ..Recipe::default()
        };
        let html = render_recipe(&recipe, None, "s.css").into_string();

        assert!(html.contains("<li>&lt;2 cups&gt;</li>"));
        assert!(html.contains("<li>Stir &amp; serve</li>"));
        assert!(html.contains("<li>&quot;hot&quot;</li>"));
        assert!(html.contains("<h1><2 cups></h1>"));
        assert!(html.contains("<title><2 cups></title>"));
    }

    #[test]
    fn apostrophe_left_as_is_in_items() {
        let recipe = Recipe {
            ingredients: vec!["Baker's yeast".to_string()],
            ..Recipe::default()
        };
        let html = render_recipe(&recipe, None, "s.css").into_string();
        assert!(html.contains("<li>Baker's yeast</li>"));
    }

    #[test]
    fn metadata_is_raw() {
        let recipe = Recipe {
            serves: "<b>6</b>".to_string(),
            ..Recipe::default()
        };
        let html = render_recipe(&recipe, None, "s.css").into_string();
        assert!(html.contains("Serves: <b>6</b>"));
    }

    #[test]
    fn image_tag_when_present() {
        let html = render_recipe(&sample_recipe(), Some("Lentil.jpg"), "s.css").into_string();
        assert!(html.contains(
            r#"<img src="Lentil.jpg" alt="Lentil Soup" class="recipe-image">"#
        ));
    }

    #[test]
    fn no_image_tag_when_absent() {
        let html = render_recipe(&sample_recipe(), None, "s.css").into_string();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn empty_recipe_renders_empty_elements() {
        let html = render_recipe(&Recipe::default(), None, "s.css").into_string();
        assert!(html.contains("<title></title>"));
        assert!(html.contains("<h1></h1>"));
        assert!(html.contains("<h2>Ingredients</h2><ul></ul>"));
        assert!(html.contains("<h2>Directions</h2><ol></ol>"));
        assert!(html.contains("<h2>Notes</h2><ul></ul>"));
    }

    #[test]
    fn find_image_respects_extension_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Lentil.png"), "png").unwrap();
        fs::write(tmp.path().join("Lentil.jpeg"), "jpeg").unwrap();

        let found = find_image(tmp.path(), "Lentil", &default_exts());
        assert_eq!(found.as_deref(), Some("Lentil.jpeg"));
    }

    #[test]
    fn find_image_ignores_other_names() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("photo.jpg"), "jpg").unwrap();
        fs::write(tmp.path().join("Lentil.gif"), "gif").unwrap();

        assert_eq!(find_image(tmp.path(), "Lentil", &default_exts()), None);
    }

    #[test]
    fn relative_path_from_nested_dir() {
        assert_eq!(
            relative_path(Path::new("/r/Soups/Lentil"), Path::new("/r/Stylesheet.css")),
            "../../Stylesheet.css"
        );
        assert_eq!(
            relative_path(Path::new("/r"), Path::new("/r/Stylesheet.css")),
            "Stylesheet.css"
        );
        assert_eq!(
            relative_path(Path::new("/r/a"), Path::new("/r/b/c.css")),
            "../b/c.css"
        );
    }

    #[test]
    fn relative_path_ignores_cur_dir() {
        assert_eq!(
            relative_path(Path::new("./Soups/Lentil"), Path::new("./Stylesheet.css")),
            "../../Stylesheet.css"
        );
        assert_eq!(relative_path(Path::new("."), Path::new(".")), ".");
    }

    #[test]
    fn render_uses_site_config() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("Soups").join("Lentil");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Lentil.webp"), "webp").unwrap();

        let site = Site::new(tmp.path(), SiteConfig::default());
        let html = render(&sample_recipe(), &dir, "Lentil", &site);

        assert!(html.contains(r#"href="../../Stylesheet.css""#));
        assert!(html.contains(r#"src="Lentil.webp""#));
    }

    #[test]
    fn render_custom_stylesheet_location() {
        let root = PathBuf::from("/recipes");
        let site = Site::new(
            &root,
            SiteConfig {
                stylesheet: "assets/site.css".to_string(),
                ..SiteConfig::default()
            },
        );
        let html = render(&Recipe::default(), &root.join("Breads"), "Rye", &site);
        assert!(html.contains(r#"href="../assets/site.css""#));
    }
}
