//! CLI output formatting.
//!
//! Each phase has `format_*` functions (pure, returning lines) for
//! testability and `print_*` wrappers that write to stdout.
//!
//! ```text
//! Building recipe HTML files...
//! ✅ Created HTML: ./Soups/Lentil/Lentil.html
//! ✅ Created HTML: ./Soups/Minestrone/Minestrone.html
//! All recipes processed successfully!
//!
//! Building index...
//! Index updated: ./Index.html
//!
//! ✅ All done! Recipes and index are up to date.
//! ```
//!
//! `check` lists every recipe with its counts and source:
//!
//! ```text
//! 001 Lentil Soup (3 ingredients, 2 steps, 1 note)
//!     Source: Soups/Lentil/Lentil.txt
//! ```

use crate::convert::{ConvertEvent, RecipeSource};
use crate::recipe::Recipe;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

pub fn format_convert_start() -> String {
    "Building recipe HTML files...".to_string()
}

pub fn format_convert_event(event: &ConvertEvent) -> String {
    match event {
        ConvertEvent::Created { html } => format!("✅ Created HTML: {}", html.display()),
    }
}

pub fn format_convert_done() -> Vec<String> {
    vec![
        "All recipes processed successfully!".to_string(),
        String::new(),
    ]
}

pub fn format_index_start() -> String {
    "Building index...".to_string()
}

pub fn format_index_done(index_path: &Path) -> Vec<String> {
    vec![format!("Index updated: {}", index_path.display()), String::new()]
}

pub fn format_build_done() -> String {
    "✅ All done! Recipes and index are up to date.".to_string()
}

/// Format the `check` listing: one header line per recipe with an indented
/// source line, relative to `root` when possible.
pub fn format_check_output(recipes: &[(RecipeSource, Recipe)], root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, (source, recipe)) in recipes.iter().enumerate() {
        let title = if recipe.title.is_empty() {
            format!("({})", source.base_name)
        } else {
            recipe.title.clone()
        };
        lines.push(format!(
            "{} {} ({}, {}, {})",
            format_index(i + 1),
            title,
            plural(recipe.ingredients.len(), "ingredient", "ingredients"),
            plural(recipe.directions.len(), "step", "steps"),
            plural(recipe.notes.len(), "note", "notes"),
        ));
        let rel = source.path.strip_prefix(root).unwrap_or(&source.path);
        lines.push(format!("    Source: {}", rel.display()));
    }
    lines.push(format!(
        "Checked {}",
        plural(recipes.len(), "recipe", "recipes")
    ));
    lines
}

pub fn print_lines<I: IntoIterator<Item = String>>(lines: I) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_convert_event(event: &ConvertEvent) {
    println!("{}", format_convert_event(event));
}

pub fn print_check_output(recipes: &[(RecipeSource, Recipe)], root: &Path) {
    print_lines(format_check_output(recipes, root));
}
