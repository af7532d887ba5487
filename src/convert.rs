//! Recipe conversion: every `<name>.txt` below the root becomes `<name>.html`
//! in the same directory.
//!
//! Files sitting directly in the root are left alone; the root holds the
//! index page, the stylesheet and the config, not recipes. Directories are
//! walked in file-name order so repeated runs produce the same pages and the
//! same progress output.
//!
//! There is no per-file error isolation: the first unreadable recipe or
//! unwritable page aborts the run.

use crate::config::Site;
use crate::recipe::{self, Recipe, RecipeError};
use crate::render;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Recipe(#[from] RecipeError),
    #[error("failed to walk recipe tree: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Progress notifications emitted while converting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertEvent {
    /// A page was written to `html`.
    Created { html: PathBuf },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub pages: Vec<PathBuf>,
}

/// A recipe source file found under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSource {
    pub path: PathBuf,
    pub dir: PathBuf,
    pub base_name: String,
}

impl RecipeSource {
    pub fn html_path(&self) -> PathBuf {
        self.dir.join(format!("{}.html", self.base_name))
    }
}

/// Find every recipe source below `site.root`, in walk order.
pub fn discover(site: &Site) -> Result<Vec<RecipeSource>, ConvertError> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(&site.root)
        .min_depth(2)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_extension(path, &site.config.source_extension) {
            continue;
        }
        let (Some(dir), Some(stem)) = (path.parent(), path.file_stem()) else {
            continue;
        };
        sources.push(RecipeSource {
            path: path.to_path_buf(),
            dir: dir.to_path_buf(),
            base_name: stem.to_string_lossy().into_owned(),
        });
    }
    Ok(sources)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Convert one recipe and write its page. Returns the page path.
pub fn convert_one(source: &RecipeSource, site: &Site) -> Result<PathBuf, ConvertError> {
    let recipe = recipe::parse_file(&source.path)?;
    let page = render::render(&recipe, &source.dir, &source.base_name, site);
    let html_path = source.html_path();
    fs::write(&html_path, page).map_err(|source| ConvertError::Write {
        path: html_path.clone(),
        source,
    })?;
    tracing::debug!(path = %html_path.display(), title = %recipe.title, "wrote recipe page");
    Ok(html_path)
}

/// Convert every recipe under the root, reporting each page through
/// `on_event` as soon as it is written.
pub fn convert_all(
    site: &Site,
    mut on_event: impl FnMut(&ConvertEvent),
) -> Result<ConvertSummary, ConvertError> {
    let mut summary = ConvertSummary::default();
    for source in discover(site)? {
        let html = convert_one(&source, site)?;
        on_event(&ConvertEvent::Created { html: html.clone() });
        summary.pages.push(html);
    }
    Ok(summary)
}

/// Parse every recipe under the root without writing anything.
pub fn check_all(site: &Site) -> Result<Vec<(RecipeSource, Recipe)>, ConvertError> {
    discover(site)?
        .into_iter()
        .map(|source| {
            let recipe = recipe::parse_file(&source.path)?;
            Ok((source, recipe))
        })
        .collect()
}
