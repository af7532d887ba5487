//! Recipe text parsing.
//!
//! Recipes are plain UTF-8 text, one fact per line:
//!
//! ```text
//! Lentil Soup
//! Serves: 4
//! Active Time: 15 min
//! Total Time: 45 min
//! Ingredients:
//! - 1 onion
//! - 2 cups lentils
//! Directions:
//! 1. Chop the onion.
//! 2. Simmer 20 min.
//! Notes:
//! - Freezes well
//! ```
//!
//! The first non-blank line is always the title. After that each line is
//! classified by [`classify_line`] in a fixed priority order: metadata labels,
//! then section headers, then list items for the current [`Section`]. Lines
//! that match nothing are dropped, so a malformed file still yields a
//! (possibly sparse) [`Recipe`] and never an error.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("failed to read recipe {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One parsed recipe. Every field defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub serves: String,
    /// From the `Active Time:` line.
    pub prep_time: String,
    /// From the `Total Time:` line.
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub notes: Vec<String>,
}

/// Which list the parser is currently filling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Ingredients,
    Directions,
    Notes,
}

/// What a single non-title line means, given the current section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Serves(&'a str),
    PrepTime(&'a str),
    CookTime(&'a str),
    Header(Section),
    Ingredient(&'a str),
    Direction(&'a str),
    Note(&'a str),
    Ignored,
}

const SERVES: &str = "Serves:";
const ACTIVE_TIME: &str = "Active Time:";
const TOTAL_TIME: &str = "Total Time:";
const INGREDIENTS: &str = "Ingredients:";
const DIRECTIONS: &str = "Directions:";
const NOTES: &str = "Notes:";

/// Classify a trimmed, non-blank line that is not the title.
pub fn classify_line(section: Section, line: &str) -> LineKind<'_> {
    if line.starts_with(SERVES) {
        LineKind::Serves(after_colon(line))
    } else if line.starts_with(ACTIVE_TIME) {
        LineKind::PrepTime(after_colon(line))
    } else if line.starts_with(TOTAL_TIME) {
        LineKind::CookTime(after_colon(line))
    } else if line.starts_with(INGREDIENTS) {
        LineKind::Header(Section::Ingredients)
    } else if line.starts_with(DIRECTIONS) {
        LineKind::Header(Section::Directions)
    } else if line.starts_with(NOTES) {
        LineKind::Header(Section::Notes)
    } else {
        match section {
            Section::Ingredients => match line.strip_prefix('-') {
                Some(rest) => LineKind::Ingredient(rest.trim()),
                None => LineKind::Ignored,
            },
            Section::Directions if line.starts_with(|c: char| c.is_ascii_digit()) => {
                LineKind::Direction(direction_text(line))
            }
            Section::Notes => match line.strip_prefix('-') {
                Some(rest) => LineKind::Note(rest.trim()),
                None => LineKind::Ignored,
            },
            _ => LineKind::Ignored,
        }
    }
}

/// Text after the first colon, trimmed.
fn after_colon(line: &str) -> &str {
    line.split_once(':').map(|(_, v)| v.trim()).unwrap_or("")
}

/// Step text: everything after the first `.` anywhere in the line, so
/// `"1. Heat to 350. Bake."` gives `"Heat to 350. Bake."` but
/// `"10 min. rest"` gives `"rest"`. Without any `.`, the leading digits are
/// dropped instead (`"3 Add pasta"` gives `"Add pasta"`). Earlier converters
/// kept such a line whole, number included.
fn direction_text(line: &str) -> &str {
    match line.find('.') {
        Some(dot) => line[dot + 1..].trim(),
        None => line.trim_start_matches(|c: char| c.is_ascii_digit()).trim(),
    }
}

/// Parse recipe text into a [`Recipe`].
pub fn parse(contents: &str) -> Recipe {
    let mut recipe = Recipe::default();
    let mut section = Section::None;
    let mut has_title = false;

    // `\n`, `\r\n` and a lone `\r` all end a line; the empty pieces between
    // `\r` and `\n` are skipped with the blank lines.
    for line in contents
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|l| !l.is_empty())
    {
        if !has_title {
            recipe.title = line.to_string();
            has_title = true;
            continue;
        }

        match classify_line(section, line) {
            LineKind::Serves(v) => recipe.serves = v.to_string(),
            LineKind::PrepTime(v) => recipe.prep_time = v.to_string(),
            LineKind::CookTime(v) => recipe.cook_time = v.to_string(),
            LineKind::Header(next) => section = next,
            LineKind::Ingredient(v) => recipe.ingredients.push(v.to_string()),
            LineKind::Direction(v) => recipe.directions.push(v.to_string()),
            LineKind::Note(v) => recipe.notes.push(v.to_string()),
            LineKind::Ignored => tracing::trace!(line, ?section, "ignoring unrecognized line"),
        }
    }

    recipe
}

/// Read and parse a recipe file.
pub fn parse_file(path: &Path) -> Result<Recipe, RecipeError> {
    let contents = fs::read_to_string(path).map_err(|source| RecipeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&contents))
}
