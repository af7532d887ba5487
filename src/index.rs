//! Index page generation.
//!
//! The index mirrors the directory tree under the root. Folders are
//! classified structurally:
//!
//! ```text
//! recipes/
//! ├── Index.html              # this page (never listed)
//! ├── Stylesheet.css
//! ├── Breads/                 # group folder → <li class="folder">
//! │   └── Rye/                # recipe folder: contains Rye.html → link
//! │       ├── Rye.txt
//! │       └── Rye.html
//! └── Soups/
//!     ├── Lentil/             # recipe folder → link to Soups/Lentil/Lentil.html
//!     └── Winter/             # nested group folder
//!         └── Borscht/
//! ```
//!
//! A directory is a recipe folder iff it holds `<dir-name>.html`; every other
//! directory is a group folder whose contents are listed recursively. Files
//! are never listed directly. Entries whose name starts with `.` and the
//! index page itself are skipped at every level.
//!
//! Reading the tree goes through [`DirTree`] so the recursion can be tested
//! against an in-memory tree.

use crate::config::Site;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One directory entry as seen by the indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read access to a directory tree.
pub trait DirTree {
    /// Entries directly inside `dir`, in any order.
    fn entries(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    /// Whether `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTree;

impl DirTree for FsTree {
    fn entries(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        fs::read_dir(dir)?
            .map(|entry| {
                let entry = entry?;
                Ok(DirEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    // Follows symlinks, like `Path::is_dir`.
                    is_dir: entry.path().is_dir(),
                })
            })
            .collect()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Whether `dir/name` is a recipe folder, i.e. holds `name/name.html`.
pub fn has_sibling_html(tree: &impl DirTree, dir: &Path, name: &str) -> bool {
    tree.is_file(&recipe_page_path(dir, name))
}

fn recipe_page_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name).join(format!("{name}.html"))
}

/// Path of `path` relative to `root`, joined with `/`.
fn href_from_root(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Render the list items for `dir` (without the enclosing `<ul>`).
///
/// Entries are sorted by name at every level. Links are relative to `root`.
pub fn build_list(
    tree: &impl DirTree,
    root: &Path,
    dir: &Path,
    index_file: &str,
) -> Result<Markup, IndexError> {
    let mut entries = tree.entries(dir).map_err(|source| IndexError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let mut items = Vec::new();
    for entry in entries {
        if entry.name.starts_with('.') || entry.name == index_file || !entry.is_dir {
            continue;
        }

        if has_sibling_html(tree, dir, &entry.name) {
            let href = href_from_root(root, &recipe_page_path(dir, &entry.name));
            tracing::debug!(name = %entry.name, %href, "recipe folder");
            items.push(html! {
                li { a href=(href) { (entry.name) } }
            });
        } else {
            tracing::debug!(name = %entry.name, "group folder");
            let children = build_list(tree, root, &dir.join(&entry.name), index_file)?;
            items.push(html! {
                li.folder {
                    (entry.name)
                    ul { (children) }
                }
            });
        }
    }

    Ok(html! {
        @for item in &items {
            (item)
        }
    })
}

/// The complete index page for `site`, read through `tree`.
pub fn build_index(tree: &impl DirTree, site: &Site) -> Result<Markup, IndexError> {
    let list = build_list(tree, &site.root, &site.root, &site.config.index_file)?;
    let title = &site.config.index_title;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                link rel="stylesheet" href=(site.config.stylesheet);
                title { (title) }
            }
            body {
                h1 { (title) }
                ul { (list) }
            }
        }
    })
}

/// Build the index from the filesystem and overwrite the index file.
///
/// Returns the path written.
pub fn write_index(site: &Site) -> Result<PathBuf, IndexError> {
    let page = build_index(&FsTree, site)?;
    let path = site.index_path();
    fs::write(&path, page.into_string()).map_err(|source| IndexError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote index");
    Ok(path)
}
